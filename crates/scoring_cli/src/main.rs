//! Scoring CLI
//!
//! Evaluates tennis scores from the command line through the engine's JSON API.
//! Output is JSON on stdout.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoring")]
#[command(about = "Evaluate tennis match scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the match format comes from.
#[derive(Args, Debug, Clone)]
struct FormatArgs {
    /// Named format preset (see `scoring presets`)
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,

    /// Match configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the match outcome from per-set scores
    Outcome {
        #[command(flatten)]
        format: FormatArgs,

        /// One set as `side1,side2[,tiebreak]`; repeat per set
        #[arg(long = "set", required = true)]
        sets: Vec<String>,
    },

    /// Evaluate a single set
    Evaluate {
        #[command(flatten)]
        format: FormatArgs,

        /// 0-based set index
        #[arg(long, default_value_t = 0)]
        set_index: usize,

        #[arg(long)]
        side1: u32,

        #[arg(long)]
        side2: u32,

        /// Losing side's tiebreak points
        #[arg(long)]
        tiebreak: Option<u32>,
    },

    /// Predict the paired score for a typed digit
    Complement {
        #[command(flatten)]
        format: FormatArgs,

        #[arg(long)]
        digit: u32,

        /// Reverse entry: digit belongs to side 2
        #[arg(long)]
        shift: bool,

        /// 0-based set index
        #[arg(long, default_value_t = 0)]
        set_index: usize,

        /// Set indices that already used their complement
        #[arg(long = "used")]
        used: Vec<usize>,

        /// Turn the smart complement off for this call
        #[arg(long)]
        disabled: bool,
    },

    /// Replay entry events from a JSON file
    Replay {
        #[command(flatten)]
        format: FormatArgs,

        /// JSON array of entry events
        #[arg(long)]
        events: PathBuf,
    },

    /// List format presets
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Outcome { format, sets } => {
            let sets = sets
                .iter()
                .map(|raw| parse_set_arg(raw))
                .collect::<Result<Vec<_>>>()?;
            let mut request = format_source(&format)?;
            request.insert("sets".to_string(), Value::Array(sets));
            scoring_core::build_outcome_json(&Value::Object(request).to_string())?
        }

        Commands::Evaluate {
            format,
            set_index,
            side1,
            side2,
            tiebreak,
        } => {
            let mut request = format_source(&format)?;
            request.insert("setIndex".to_string(), json!(set_index));
            request.insert("side1".to_string(), json!(side1));
            request.insert("side2".to_string(), json!(side2));
            if let Some(tiebreak) = tiebreak {
                request.insert("tiebreak".to_string(), json!(tiebreak));
            }
            scoring_core::evaluate_set_json(&Value::Object(request).to_string())?
        }

        Commands::Complement {
            format,
            digit,
            shift,
            set_index,
            used,
            disabled,
        } => {
            let mut request = format_source(&format)?;
            request.insert("digit".to_string(), json!(digit));
            request.insert("shiftPressed".to_string(), json!(shift));
            request.insert("setIndex".to_string(), json!(set_index));
            request.insert("usedSetIndices".to_string(), json!(used));
            if disabled {
                request.insert("enabled".to_string(), json!(false));
            }
            scoring_core::smart_complement_json(&Value::Object(request).to_string())?
        }

        Commands::Replay { format, events: path } => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading events from {}", path.display()))?;
            let events: Value = serde_json::from_str(&content)
                .with_context(|| format!("parsing events in {}", path.display()))?;
            if !events.is_array() {
                bail!("events file must contain a JSON array");
            }
            let mut request = format_source(&format)?;
            request.insert("events".to_string(), events);
            scoring_core::apply_entry_events_json(&Value::Object(request).to_string())?
        }

        Commands::Presets => scoring_core::presets_json()?,
    };

    let pretty: Value = serde_json::from_str(&output)?;
    println!("{}", serde_json::to_string_pretty(&pretty)?);
    Ok(())
}

/// Request fields selecting the match format.
fn format_source(format: &FormatArgs) -> Result<Map<String, Value>> {
    let mut request = Map::new();
    match (&format.preset, &format.config) {
        (_, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config from {}", path.display()))?;
            let config: Value = serde_json::from_str(&content)
                .with_context(|| format!("parsing config in {}", path.display()))?;
            request.insert("config".to_string(), config);
        }
        (Some(name), None) => {
            request.insert("preset".to_string(), json!(name));
        }
        (None, None) => {
            request.insert("preset".to_string(), json!("standard"));
        }
    }
    Ok(request)
}

/// Parses `6,4` or `7,6,5` into a raw set entry.
fn parse_set_arg(raw: &str) -> Result<Value> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [side1, side2] => Ok(json!({"side1": side1, "side2": side2})),
        [side1, side2, tiebreak] => {
            Ok(json!({"side1": side1, "side2": side2, "tiebreak": tiebreak}))
        }
        _ => bail!("set must be `side1,side2[,tiebreak]`, got '{raw}'"),
    }
}
