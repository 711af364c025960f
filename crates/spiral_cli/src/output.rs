//! Rendering results as plain text or JSON on stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use spiral_core::{Interruption, MirrorResult, OutputConfig, OutputFormat, SignalSet};
use std::io::{self, Write};

pub struct Printer {
    format: OutputFormat,
    pretty: bool,
}

impl Printer {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            pretty: config.pretty,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write `value` as JSON, or `text` verbatim, followed by a newline.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", text)?,
            OutputFormat::Json => {
                let written = if self.pretty {
                    serde_json::to_writer_pretty(&mut out, value)
                } else {
                    serde_json::to_writer(&mut out, value)
                };
                written.context("Failed to encode JSON output")?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

pub fn mirror_text(result: &MirrorResult) -> String {
    let mut text = format!("Pattern: {}\n{}", result.pattern, result.reflection);
    if let Some(grounding) = &result.grounding {
        text.push('\n');
        text.push_str(grounding);
    }
    text
}

/// Which signals fired, and the one that wins.
#[derive(Debug, Serialize)]
pub struct SignalReport {
    pub signals: SignalSet,
    pub active: Vec<&'static str>,
    pub top: Option<&'static str>,
}

impl SignalReport {
    pub fn new(signals: SignalSet) -> Self {
        Self {
            active: signals.active().map(|s| s.name()).collect(),
            top: signals.top().map(|s| s.name()),
            signals,
        }
    }

    pub fn text(&self) -> String {
        let active = if self.active.is_empty() {
            "none".to_string()
        } else {
            self.active.join(", ")
        };
        format!("Top: {}\nActive: {}", self.top.unwrap_or("none"), active)
    }
}

/// One REPL turn: both pipelines over the same line.
#[derive(Debug, Serialize)]
pub struct Reading {
    pub mirror: MirrorResult,
    pub interruption: Interruption,
}

impl Reading {
    pub fn text(&self) -> String {
        format!("{}\n\n{}", mirror_text(&self.mirror), self.interruption)
    }
}
