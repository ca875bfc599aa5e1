//! feature-bot: scripted prompt endpoint over the feature catalog, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
