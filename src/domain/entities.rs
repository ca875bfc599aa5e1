//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; the catalog adapter maps its wire DTOs to plain names.

use std::fmt;

/// Outcome of classifying one prompt. Exactly one per prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// User asked how to search features of a given entity.
    SearchHelp,
    /// Feature lookup with an extracted entity name.
    EntityFeatures(String),
    /// Feature lookup where no entity name could be extracted.
    MissingEntity,
    AddInstructions,
    ListEntities,
    AboutWebsite,
    Capabilities,
    Greeting,
    Fallback,
}

pub const SEARCH_HELP_REPLY: &str =
    "Type a prompt like 'Get me features for [entity name] entity'";

pub const MISSING_ENTITY_REPLY: &str = "Please provide a valid entity name to fetch its features.";

pub const ADD_INSTRUCTIONS_REPLY: &str = "From the Home page click the add button (to add individual entities) or upload button (as CSV file) to upload your features. Enter the entity name you want to add features to: if it exists the features will be added to the existing entity with the same name, or enter a unique name to create a new entity to add your features in it.";

pub const ABOUT_WEBSITE_REPLY: &str = "This is a feature sharing marketplace that makes it easy for Data Scientists to View, Add, Edit and Delete features for training their machine learning models using our 2FA secured application.";

pub const CAPABILITIES_REPLY: &str = "You can ask me about how to add entities or features, all the available entities, features in a given entity and much more about our website.";

pub const GREETING_REPLY: &str = "Hello! How can I help you?";

pub const FALLBACK_REPLY: &str = "Please provide a valid prompt. You can ask me about how to add entities or features, all the available entities, features in a given entity and much more about our website.";

/// Payload of `GET /`.
pub const SERVER_UP_REPLY: &str = "Hello! The API server is up and running.";

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SearchHelp => f.write_str("search_help"),
            Intent::EntityFeatures(name) => write!(f, "entity_features({})", name),
            Intent::MissingEntity => f.write_str("missing_entity"),
            Intent::AddInstructions => f.write_str("add_instructions"),
            Intent::ListEntities => f.write_str("list_entities"),
            Intent::AboutWebsite => f.write_str("about_website"),
            Intent::Capabilities => f.write_str("capabilities"),
            Intent::Greeting => f.write_str("greeting"),
            Intent::Fallback => f.write_str("fallback"),
        }
    }
}

/// Reply listing the features of one entity.
pub fn features_reply(entity_name: &str, feature_names: &[String]) -> String {
    format!(
        "Here are the feature names for the entity \"{}\": {}",
        entity_name,
        feature_names.join(", ")
    )
}

/// Reply listing every entity in the catalog.
pub fn entities_reply(entity_names: &[String]) -> String {
    format!(
        "Here are the available entity names: {}",
        entity_names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_reply_joins_names() {
        let names = vec!["color".to_string(), "weight".to_string()];
        assert_eq!(
            features_reply("widgets", &names),
            "Here are the feature names for the entity \"widgets\": color, weight"
        );
    }

    #[test]
    fn test_entities_reply_empty_catalog() {
        assert_eq!(entities_reply(&[]), "Here are the available entity names: ");
    }
}
