//! Manual smoke run over a fixed set of sample inputs.

use anyhow::Result;
use serde::Serialize;
use spiral_core::pre_trigger_loop_interruption;

use crate::output::Printer;

pub const SAMPLES: &[&str] = &[
    "Everything feels like too much and I can't handle it.",
    "My thoughts keep looping and I can't stop thinking about it.",
    "Nothing will change and it feels hopeless.",
    "All I can see is this one problem right now.",
    "Just a regular day, nothing in particular happening.",
    "We broke up and it hurts, but I'm trying to be steady.",
    "I want to die and end it.",
    "I don't want to be here anymore.",
];

#[derive(Debug, Serialize)]
struct Sample {
    input: &'static str,
    output: String,
}

pub fn run(printer: &Printer) -> Result<()> {
    for &input in SAMPLES {
        let sample = Sample {
            input,
            output: pre_trigger_loop_interruption(input),
        };
        let text = format!(
            "Input: {}\nOutput: {}\n{}",
            sample.input,
            sample.output,
            "-".repeat(40)
        );
        printer.emit(&sample, &text)?;
    }
    Ok(())
}
