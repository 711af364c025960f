//! Property-based tests for spiral_core.
//!
//! Uses proptest to verify invariants that must hold for ALL possible inputs:
//! normalization idempotence, first-match priority, and agreement between the
//! pieces of a composed interruption.

use proptest::prelude::*;
use spiral_core::interrupter::{regulation_cue, CLOSING_LINE, DEFAULT_STATE};
use spiral_core::mirror::{NEUTRAL_PATTERN, PATTERN_RULES};
use spiral_core::text::{normalize, SNIPPET_WORDS};
use spiral_core::{interrupt, mirror, pre_trigger_loop_interruption, Signal, SignalSet};

// ============================================================================
// Strategies
// ============================================================================

/// Free text mixing words, keywords and odd whitespace.
fn arb_text() -> impl Strategy<Value = String> {
    let keyword = prop::sample::select(vec![
        "anxious", "numb", "too much", "sad", "angry", "want to die", "hopeless", "stuck",
        "all i can see", "overwhelmed", "LOOP", "Frozen",
    ]);
    let word = "[a-zA-Z']{1,8}";
    let sep = prop::sample::select(vec![" ", "  ", "\t", "\n", " \r\n "]);
    prop::collection::vec(
        (prop_oneof![word.prop_map(String::from), keyword.prop_map(String::from)], sep),
        0..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect::<String>()
    })
}

/// Lower-case words that cannot contain any keyword.
fn arb_plain_word() -> impl Strategy<Value = String> {
    "[bjqxz]{1,6}"
}

// ============================================================================
// Pattern Mirror
// ============================================================================

proptest! {
    /// mirror(s) and mirror(normalize(s)) are identical.
    #[test]
    fn mirror_is_idempotent_on_normalization(s in arb_text()) {
        prop_assert_eq!(mirror(&s), mirror(&normalize(&s)));
    }

    /// Arbitrary unicode never panics and always yields a well-formed reflection.
    #[test]
    fn mirror_never_panics(s in any::<String>()) {
        let result = mirror(&s);
        prop_assert!(result.reflection.starts_with("Noticing:"));
        if normalize(&s).is_empty() {
            prop_assert_eq!(result.reflection, "Noticing:");
        } else {
            prop_assert!(result.reflection.ends_with('.'));
        }
    }

    /// The snippet never exceeds the word limit.
    #[test]
    fn reflection_snippet_is_bounded(s in arb_text()) {
        let result = mirror(&s);
        let body = result.reflection.trim_start_matches("Noticing:");
        prop_assert!(body.split_whitespace().count() <= SNIPPET_WORDS);
    }

    /// With keywords from two rules, the earlier rule wins.
    #[test]
    fn earlier_rule_wins(
        i in 0..PATTERN_RULES.len(),
        j in 0..PATTERN_RULES.len(),
        pad in prop::collection::vec(arb_plain_word(), 0..5),
    ) {
        let (first, second) = (&PATTERN_RULES[i], &PATTERN_RULES[j]);
        let text = format!(
            "{} {} {}",
            second.keywords[0],
            pad.join(" "),
            first.keywords[0],
        );
        let expected = if i <= j { first.pattern } else { second.pattern };
        prop_assert_eq!(mirror(&text).pattern, expected);
    }

    /// Keyword-free text is a neutral observation with no grounding.
    #[test]
    fn plain_text_is_neutral(words in prop::collection::vec(arb_plain_word(), 0..30)) {
        let result = mirror(&words.join(" "));
        prop_assert_eq!(result.pattern, NEUTRAL_PATTERN);
        prop_assert!(result.grounding.is_none());
    }
}

// ============================================================================
// Loop Interrupter
// ============================================================================

proptest! {
    /// Arbitrary input always composes a non-empty response.
    #[test]
    fn interruption_never_panics(s in any::<String>()) {
        let out = pre_trigger_loop_interruption(&s);
        prop_assert!(!out.is_empty());
    }

    /// Normalization does not change the response.
    #[test]
    fn interruption_is_idempotent_on_normalization(s in arb_text()) {
        prop_assert_eq!(
            pre_trigger_loop_interruption(&s),
            pre_trigger_loop_interruption(&normalize(&s))
        );
    }

    /// Reflection, instruction and closing all follow the same top signal.
    #[test]
    fn composed_parts_agree(s in arb_text()) {
        let result = interrupt(&s);
        let name = result.top.map_or("default", Signal::name);
        prop_assert_eq!(Some(result.instruction), regulation_cue(name));

        match result.top {
            None => {
                prop_assert_eq!(result.state, DEFAULT_STATE);
                prop_assert_eq!(result.to_string(), result.instruction);
            }
            Some(top) => {
                let reflection = format!("Your system is {} right now.", top.state_phrase());
                prop_assert_eq!(result.reflection.as_deref(), Some(reflection.as_str()));
                prop_assert_eq!(result.closing.is_some(), top.closes());
                let out = result.to_string();
                prop_assert!(out.starts_with(&reflection));
                prop_assert_eq!(out.ends_with(CLOSING_LINE), top.closes());
            }
        }
    }

    /// The top signal is the first active one in precedence order.
    #[test]
    fn top_follows_precedence(s in arb_text()) {
        let set = SignalSet::detect(&s);
        let expected = Signal::PRIORITY.into_iter().find(|sig| set.contains(*sig));
        prop_assert_eq!(set.top(), expected);
    }

    /// Adding a self-harm cue to any text makes it the driving signal.
    #[test]
    fn self_harm_always_dominates(s in arb_text()) {
        let result = interrupt(&format!("{} i want to die", s));
        prop_assert_eq!(result.top, Some(Signal::SelfHarm));
        prop_assert_eq!(result.closing, Some(CLOSING_LINE));
    }
}
