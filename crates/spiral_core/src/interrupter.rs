//! Loop Interrupter - pre-trigger regulation cue
//!
//! normalize -> detect signals -> resolve the top signal -> compose.
//! Reflection, instruction and closing line are all derived from the one
//! resolved signal.

use serde::Serialize;
use std::fmt;

use crate::signal::{Signal, SignalSet};

/// State phrase used when nothing matched.
pub const DEFAULT_STATE: &str = "activated";

/// Appended after the instruction for the most severe signals.
pub const CLOSING_LINE: &str = "If you want, you could reach out to someone you trust.";

/// Regulation instructions keyed by signal name, plus a default entry.
pub const REGULATION_CUES: &[(&str, &str)] = &[
    (
        "self_harm",
        "For 60 seconds, rest a hand on your chest and let your breath move slowly beneath it.",
    ),
    (
        "hopeless",
        "For 45 seconds, let your eyes settle on one steady thing nearby and notice that it is still here.",
    ),
    (
        "overload",
        "For 45 seconds, press your feet gently into the floor and let your shoulders drop on each exhale.",
    ),
    (
        "rumination",
        "For 60 seconds, name five objects you can see, one by one, without judging them.",
    ),
    (
        "narrowing",
        "For 45 seconds, slowly widen your gaze until you can take in the edges of the room.",
    ),
    (
        "default",
        "For 60 seconds, breathe in gently and let each exhale be a little longer than the inhale.",
    ),
];

/// Look up a regulation instruction by signal name or `"default"`.
pub fn regulation_cue(name: &str) -> Option<&'static str> {
    REGULATION_CUES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, cue)| *cue)
}

fn cue_for(top: Option<Signal>) -> &'static str {
    let name = top.map_or("default", Signal::name);
    // Every signal has a row; fall back to the default row regardless.
    regulation_cue(name)
        .or_else(|| regulation_cue("default"))
        .unwrap_or_default()
}

/// State phrase for the resolved signal.
pub fn state_phrase(top: Option<Signal>) -> &'static str {
    top.map_or(DEFAULT_STATE, Signal::state_phrase)
}

/// Structured result of one interruption pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interruption {
    pub signals: SignalSet,
    pub top: Option<Signal>,
    pub state: &'static str,
    pub reflection: Option<String>,
    pub instruction: &'static str,
    pub closing: Option<&'static str>,
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reflection) = &self.reflection {
            write!(f, "{} ", reflection)?;
        }
        f.write_str(self.instruction)?;
        if let Some(closing) = self.closing {
            write!(f, " {}", closing)?;
        }
        Ok(())
    }
}

/// Classify text and assemble the interruption.
pub fn interrupt(text: &str) -> Interruption {
    let signals = SignalSet::detect(text);
    let top = signals.top();

    tracing::debug!(
        active = ?signals.active().collect::<Vec<_>>(),
        top = ?top,
        "Loop interrupter resolved signals"
    );

    Interruption {
        signals,
        top,
        state: state_phrase(top),
        reflection: top.map(|s| format!("Your system is {} right now.", s.state_phrase())),
        instruction: cue_for(top),
        closing: top.filter(|s| s.closes()).map(|_| CLOSING_LINE),
    }
}

/// Composed response string for raw user text.
pub fn pre_trigger_loop_interruption(text: &str) -> String {
    interrupt(text).to_string()
}
