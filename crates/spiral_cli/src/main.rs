use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spiral_core::{
    interrupt, mirror, regulation_cue, LoggingConfig, OutputFormat, Signal, SignalSet,
    SpiralConfig,
};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod output;
mod smoke;

use output::{mirror_text, Printer, Reading, SignalReport};

#[derive(Parser, Debug)]
#[command(name = "spiral", author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "SPIRAL_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: text or json (overrides the config file)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reflect text back as a named pattern (reads stdin when no text is given)
    Mirror { text: Vec<String> },
    /// Compose a pre-trigger loop interruption
    Interrupt { text: Vec<String> },
    /// Show which loop signals the text trips
    Signals { text: Vec<String> },
    /// Print the regulation instruction for a signal, or the default one
    Cue { signal: Option<Signal> },
    /// Run the sample inputs through the loop interrupter
    Smoke,
    /// Read lines interactively until 'quit'
    Repl,
}

#[derive(Debug, Serialize)]
struct CueEntry {
    signal: String,
    cue: &'static str,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.config.clone().or_else(SpiralConfig::default_path) {
        Some(path) => SpiralConfig::load_or_default(path),
        None => SpiralConfig::from_env(),
    };
    if let Some(format) = args.format {
        config.output.format = format;
    }

    init_tracing(&config.logging);
    debug!("Using config: {:?}", config);

    let printer = Printer::new(&config.output);

    match args.command {
        Command::Mirror { text } => {
            let result = mirror(&read_text(text)?);
            info!(pattern = %result.pattern, "Mirrored input");
            printer.emit(&result, &mirror_text(&result))?;
        }
        Command::Interrupt { text } => {
            let result = interrupt(&read_text(text)?);
            printer.emit(&result, &result.to_string())?;
        }
        Command::Signals { text } => {
            let report = SignalReport::new(SignalSet::detect(&read_text(text)?));
            printer.emit(&report, &report.text())?;
        }
        Command::Cue { signal } => {
            let name = signal.map_or("default", Signal::name);
            let cue = regulation_cue(name)
                .with_context(|| format!("No regulation cue for '{}'", name))?;
            let entry = CueEntry {
                signal: name.to_string(),
                cue,
            };
            printer.emit(&entry, cue)?;
        }
        Command::Smoke => smoke::run(&printer)?,
        Command::Repl => repl(&printer)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Join positional words, or read all of stdin when there are none.
fn read_text(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn repl(printer: &Printer) -> Result<()> {
    let interactive = printer.format() == OutputFormat::Text;
    if interactive {
        println!("Spiral Mirror. Type 'quit' to exit.");
    }
    prompt(interactive)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read line from stdin")?;
        let trimmed = line.trim();

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if trimmed.is_empty() {
            prompt(interactive)?;
            continue;
        }

        let reading = Reading {
            mirror: mirror(trimmed),
            interruption: interrupt(trimmed),
        };
        debug!(top = ?reading.interruption.top, "Read line");
        printer.emit(&reading, &format!("\n{}\n", reading.text()))?;
        prompt(interactive)?;
    }

    Ok(())
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
