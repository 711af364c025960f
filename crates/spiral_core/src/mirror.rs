//! Pattern Mirror - reflect user language back as a named pattern
//!
//! A first-match scan over an ordered rule table. The earliest rule with
//! any keyword hit wins; no hit falls back to a neutral observation.

use serde::{Deserialize, Serialize};

use crate::text::{contains_any, fold, normalize, trim_to_words, SNIPPET_WORDS};

/// Pattern reported when no rule matches.
pub const NEUTRAL_PATTERN: &str = "neutral observation";

/// One row of the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub keywords: &'static [&'static str],
    pub grounding: Option<&'static str>,
}

/// Ordered pattern table. Order is match priority.
pub const PATTERN_RULES: &[Rule] = &[
    Rule {
        pattern: "anxious activation",
        keywords: &[
            "anxious",
            "anxiety",
            "worried",
            "worry",
            "panic",
            "panicky",
            "tight",
            "racing",
            "can't settle",
        ],
        grounding: Some("If you'd like, try a slow exhale longer than the inhale."),
    },
    Rule {
        pattern: "shutdown or numbness",
        keywords: &["numb", "blank", "shut down", "frozen", "flat", "disconnected"],
        grounding: Some("If you'd like, notice three things you can see in the room."),
    },
    Rule {
        pattern: "overwhelm",
        keywords: &["overwhelmed", "too much", "can't handle", "flooded", "drowning"],
        grounding: Some("If you'd like, feel your feet on the floor for a moment."),
    },
    Rule {
        pattern: "sadness or heaviness",
        keywords: &["sad", "heavy", "grief", "down", "tearful", "cry"],
        grounding: None,
    },
    Rule {
        pattern: "anger or heat",
        keywords: &["angry", "mad", "furious", "rage", "irritated"],
        grounding: None,
    },
];

/// Result of one mirror pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorResult {
    pub pattern: String,
    pub reflection: String,
    pub grounding: Option<String>,
}

/// Mirror user language into a pattern, a reflection, and an optional
/// grounding suggestion.
///
/// Any string is valid input, including an empty one.
pub fn mirror(text: &str) -> MirrorResult {
    let cleaned = normalize(text);
    let snippet = trim_to_words(&cleaned, SNIPPET_WORDS);
    let (pattern, grounding) = classify_pattern(&cleaned);

    let reflection = if snippet.is_empty() {
        "Noticing:".to_string()
    } else {
        format!("Noticing: {}.", snippet)
    };

    MirrorResult {
        pattern: pattern.to_string(),
        reflection,
        grounding: grounding.map(str::to_string),
    }
}

/// Name and grounding text of the first matching rule.
pub fn classify_pattern(text: &str) -> (&'static str, Option<&'static str>) {
    let lowered = fold(text);
    PATTERN_RULES
        .iter()
        .find(|rule| contains_any(&lowered, rule.keywords))
        .map(|rule| (rule.pattern, rule.grounding))
        .unwrap_or((NEUTRAL_PATTERN, None))
}
