//! polisent: command-line front end
//!
//! Analyses a text and prints the JSON result, or shows how a text is
//! segmented into sentences or debate turns.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use polisent::discourse::{segment_turns, split_sentences};
use polisent::{Analyzer, AnalyzerBuilder, Config, Domain, Source, Task};

/// Polisent CLI
#[derive(Parser)]
#[command(name = "polisent")]
#[command(version)]
#[command(about = "Sentiment analysis for Kazakh political discourse")]
struct Args {
    /// Config file (default: ~/.polisent/config.toml, then /etc/polisent/config.toml)
    #[arg(short, long, global = true, env = "POLISENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a text and print the result as JSON
    Analyze {
        /// Text to analyse (or omit to read from stdin)
        text: Option<String>,
        /// Discourse domain: campaign_ad, candidate_speech, debate, other
        #[arg(short, long, default_value = "other")]
        domain: Domain,
        /// Text source: official or unofficial
        #[arg(short, long, default_value = "official")]
        source: Source,
        /// emotion or sentiment
        #[arg(short, long, default_value = "sentiment")]
        task: Task,
        /// Ontology JSON file (overrides config and POLISENT_ONTO_PATH)
        #[arg(long)]
        ontology: Option<PathBuf>,
        /// Tactic term list JSON file (overrides config and PD_JSON_PATH)
        #[arg(long)]
        terms: Option<PathBuf>,
        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the sentence or turn segmentation of a text
    Segment {
        /// Text to segment (or omit to read from stdin)
        text: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Mode::Sentences)]
        mode: Mode,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Sentences,
    Turns,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Analyze {
            text,
            domain,
            source,
            task,
            ontology,
            terms,
            compact,
        } => {
            let text = resolve_text(text, "analyze")?;
            let config = Config::load_or_default(args.config.as_deref())?;
            let analyzer = build_analyzer(&config, ontology, terms)?;
            let result = analyzer.analyze(&text, domain, source, task);
            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{json}");
        }

        Command::Segment { text, mode } => {
            let text = resolve_text(text, "segment")?;
            let json = match mode {
                Mode::Sentences => {
                    let units: Vec<_> = split_sentences(&text)
                        .into_iter()
                        .map(|(span, unit)| serde_json::json!({ "span": span, "text": unit }))
                        .collect();
                    serde_json::to_string_pretty(&units)?
                }
                Mode::Turns => serde_json::to_string_pretty(&segment_turns(&text))?,
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn build_analyzer(
    config: &Config,
    ontology: Option<PathBuf>,
    terms: Option<PathBuf>,
) -> polisent::Result<Analyzer> {
    let mut builder = AnalyzerBuilder::from_config(config);
    if let Some(path) = ontology {
        builder = builder.ontology_path(path);
    }
    if let Some(path) = terms {
        builder = builder.term_list_path(path);
    }
    builder.build()
}

/// Resolve text input from an optional CLI argument and/or stdin.
///
/// Combination rules:
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => {
            Err(format!("{command}: no input provided (pass text as argument or via stdin)").into())
        }
    }
}
