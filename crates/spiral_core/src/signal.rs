//! Loop signals and their precedence
//!
//! Each signal is detected independently; several can be true at once.
//! [`Signal::PRIORITY`] is the only place the precedence between them is
//! encoded, so every consumer resolves the same driving signal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::text::{contains_any, fold, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    SelfHarm,
    Hopeless,
    Overload,
    Rumination,
    Narrowing,
}

impl Signal {
    /// Most severe first.
    pub const PRIORITY: [Signal; 5] = [
        Signal::SelfHarm,
        Signal::Hopeless,
        Signal::Overload,
        Signal::Rumination,
        Signal::Narrowing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Signal::SelfHarm => "self_harm",
            Signal::Hopeless => "hopeless",
            Signal::Overload => "overload",
            Signal::Rumination => "rumination",
            Signal::Narrowing => "narrowing",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Signal::SelfHarm => &[
                "want to die",
                "kill myself",
                "hurt myself",
                "harm myself",
                "end my life",
                "end it all",
                "suicide",
                "suicidal",
                "better off dead",
                "don't want to be here",
                "not be here anymore",
            ],
            Signal::Hopeless => &[
                "hopeless",
                "no hope",
                "no point",
                "what's the point",
                "nothing will change",
                "never get better",
                "give up",
                "no way out",
            ],
            Signal::Overload => &[
                "overwhelmed",
                "overloaded",
                "too much",
                "can't handle",
                "can't cope",
                "drowning",
                "flooded",
                "falling apart",
            ],
            Signal::Rumination => &[
                "loop",
                "can't stop thinking",
                "keep thinking",
                "over and over",
                "replaying",
                "stuck",
                "spiral",
                "in circles",
            ],
            Signal::Narrowing => &[
                "all i can see",
                "only thing i can",
                "tunnel vision",
                "can't see anything else",
                "can't think of anything else",
                "nothing else matters",
            ],
        }
    }

    /// Phrase used in "Your system is <state> right now."
    pub fn state_phrase(self) -> &'static str {
        match self {
            Signal::SelfHarm => "in intense distress",
            Signal::Hopeless => "tilting toward hopeless framing",
            Signal::Overload => "overloaded",
            Signal::Rumination => "caught in a loop",
            Signal::Narrowing => "narrowing perception",
        }
    }

    /// Whether a response driven by this signal ends with the reach-out line.
    pub fn closes(self) -> bool {
        matches!(self, Signal::SelfHarm | Signal::Hopeless)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown signal '{0}' (expected one of: self_harm, hopeless, overload, rumination, narrowing)")]
pub struct UnknownSignal(pub String);

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Signal::PRIORITY
            .into_iter()
            .find(|signal| signal.name() == wanted)
            .ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

/// The five independently detected flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub self_harm: bool,
    pub overload: bool,
    pub rumination: bool,
    pub hopeless: bool,
    pub narrowing: bool,
}

impl SignalSet {
    /// Scan raw text against every signal's keyword list.
    pub fn detect(text: &str) -> Self {
        let lowered = fold(&normalize(text));
        let hit = |signal: Signal| contains_any(&lowered, signal.keywords());
        Self {
            self_harm: hit(Signal::SelfHarm),
            overload: hit(Signal::Overload),
            rumination: hit(Signal::Rumination),
            hopeless: hit(Signal::Hopeless),
            narrowing: hit(Signal::Narrowing),
        }
    }

    pub fn contains(&self, signal: Signal) -> bool {
        match signal {
            Signal::SelfHarm => self.self_harm,
            Signal::Hopeless => self.hopeless,
            Signal::Overload => self.overload,
            Signal::Rumination => self.rumination,
            Signal::Narrowing => self.narrowing,
        }
    }

    /// Matched signals, most severe first.
    pub fn active(&self) -> impl Iterator<Item = Signal> + '_ {
        Signal::PRIORITY
            .into_iter()
            .filter(move |signal| self.contains(*signal))
    }

    /// The single signal that drives the response, if any.
    pub fn top(&self) -> Option<Signal> {
        self.active().next()
    }

    pub fn is_empty(&self) -> bool {
        self.top().is_none()
    }
}
