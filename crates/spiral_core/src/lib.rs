//! # Spiral Mirror
//!
//! Non-diagnostic nervous system reflection. Two independent, stateless
//! pipelines map a short piece of free text to a calm templated response:
//!
//! - **Pattern Mirror** ([`mirror`]): first-match keyword scan over an
//!   ordered rule table, returning a named pattern, a reflection snippet and
//!   an optional grounding suggestion.
//! - **Loop Interrupter** ([`pre_trigger_loop_interruption`]): detects five
//!   independent signals, resolves the most severe one, and composes a state
//!   reflection, a regulation instruction and an optional closing line.
//!
//! All tables are `const` data. Every call is a pure function of its input
//! and is safe to invoke from any number of threads.

pub mod config;
pub mod interrupter;
pub mod mirror;
pub mod signal;
pub mod text;

pub use config::{LoggingConfig, OutputConfig, OutputFormat, SpiralConfig};
pub use interrupter::{interrupt, pre_trigger_loop_interruption, regulation_cue, Interruption};
pub use mirror::{classify_pattern, mirror, MirrorResult};
pub use signal::{Signal, SignalSet, UnknownSignal};
