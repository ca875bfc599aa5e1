//! Prompt classifier. Ordered keyword rules, first match wins.
//!
//! Pure functions only: no catalog access, no state between prompts.

use super::entities::Intent;
use regex::Regex;
use std::sync::LazyLock;

/// Entity-name patterns, tried in order. `<name>` is the lazy group `"?.*?"?`,
/// so quotes around a name are captured and stripped afterwards.
static ENTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?i)(?:get|fetch|show)\s*(?:me)?\s*(?:the)?\s*features\s*(?:of|for|in)?\s*(?:the)?\s*("?.*?"?)\s*entity"#,
        r#"(?i)features\s*(?:of|for|in)?\s*(?:the)?\s*("?.*?"?)\s*entity"#,
        r#"(?i)(?:get|fetch|show)\s*(?:me)?\s*(?:the)?\s*("?.*?"?)\s*entity\s*features"#,
        r#"(?i)features\s*(?:of|for|in)?\s*(?:the)?\s*("?.*?"?)"#,
        r#"(?i)(?:list|show)\s*(?:me)?\s*(?:all)?\s*features\s*(?:of|for|in)?\s*(?:the)?\s*("?.*?"?)\s*entity"#,
        r#"(?i)(?:get|fetch)\s*(?:all)?\s*("?.*?"?)\s*entity\s*features"#,
        r#"(?i)(?:what\s*are|tell\s*me\s*about)\s*(?:the)?\s*features\s*(?:of|for|in)?\s*(?:the)?\s*("?.*?"?)\s*entity"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid entity pattern"))
    .collect()
});

/// One row of the rule table: predicate on the lower-cased prompt, and the intent it yields.
struct Rule {
    name: &'static str,
    matches: fn(&str) -> bool,
    intent: fn(&str) -> Intent,
}

/// Priority order matters: e.g. "add features for the widgets entity" must hit
/// the feature lookup before the add instructions.
const RULES: &[Rule] = &[
    Rule {
        name: "search_help",
        matches: is_search_help,
        intent: |_| Intent::SearchHelp,
    },
    Rule {
        name: "entity_features",
        matches: is_feature_lookup,
        intent: feature_lookup_intent,
    },
    Rule {
        name: "add_instructions",
        matches: is_add_request,
        intent: |_| Intent::AddInstructions,
    },
    Rule {
        name: "list_entities",
        matches: is_entity_listing,
        intent: |_| Intent::ListEntities,
    },
    Rule {
        name: "about_website",
        matches: is_about_website,
        intent: |_| Intent::AboutWebsite,
    },
    Rule {
        name: "capabilities",
        matches: is_capabilities,
        intent: |_| Intent::Capabilities,
    },
    Rule {
        name: "greeting",
        matches: is_greeting,
        intent: |_| Intent::Greeting,
    },
];

/// Classify a prompt. Falls back to `Intent::Fallback` when no rule matches.
pub fn classify(prompt: &str) -> Intent {
    let prompt = prompt.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&prompt))
        .map(|rule| {
            tracing::trace!(rule = rule.name, "prompt rule matched");
            (rule.intent)(&prompt)
        })
        .unwrap_or(Intent::Fallback)
}

/// Extract an entity name from a feature-lookup prompt.
///
/// Returns the first non-empty capture, lower-cased and stripped of quotes.
pub fn extract_entity_name(prompt: &str) -> Option<String> {
    ENTITY_PATTERNS.iter().find_map(|pattern| {
        let captured = pattern.captures(prompt)?.get(1)?.as_str();
        let name = captured
            .trim()
            .trim_matches('"')
            .trim()
            .to_lowercase();
        (!name.is_empty()).then_some(name)
    })
}

fn contains_all(prompt: &str, words: &[&str]) -> bool {
    words.iter().all(|w| prompt.contains(w))
}

fn contains_any(prompt: &str, words: &[&str]) -> bool {
    words.iter().any(|w| prompt.contains(w))
}

fn is_search_help(prompt: &str) -> bool {
    contains_all(prompt, &["search", "features", "given", "entity"])
}

fn is_feature_lookup(prompt: &str) -> bool {
    contains_all(prompt, &["features", "entity"])
}

fn feature_lookup_intent(prompt: &str) -> Intent {
    match extract_entity_name(prompt) {
        Some(name) => Intent::EntityFeatures(name),
        None => Intent::MissingEntity,
    }
}

fn is_add_request(prompt: &str) -> bool {
    prompt.contains("add") && contains_any(prompt, &["entity", "feature", "entities", "features"])
}

fn is_entity_listing(prompt: &str) -> bool {
    contains_any(prompt, &["entity", "available entities", "entities"])
}

fn is_about_website(prompt: &str) -> bool {
    contains_all(prompt, &["tell", "me", "about", "website"])
}

fn is_capabilities(prompt: &str) -> bool {
    contains_all(prompt, &["tell", "can", "do"])
}

fn is_greeting(prompt: &str) -> bool {
    contains_any(prompt, &["hello", "hi"])
}
