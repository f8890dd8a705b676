//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Config`] is what the rest of the
//! program reads. Exactly one tree source is active: `--tree`, `--preset`,
//! `--random`, or the default preset.

use crate::playback::DEFAULT_INTERVAL;
use crate::tree::errors::TreeInputError;
use crate::tree::input::{parse_and_validate, validate};
use crate::tree::presets::find_preset;
use crate::tree::random::{random_level_order, RandomTreeOptions};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

/// Preset loaded when no tree source is given
pub const DEFAULT_PRESET: &str = "example";

/// Step through the binary tree diameter algorithm
#[derive(Debug, Parser)]
#[command(name = "diameter-viz", version, about)]
pub struct Cli {
    /// Level-order tree, e.g. "[1,2,3,null,5]"
    #[arg(short, long, conflicts_with_all = ["preset", "random"])]
    pub tree: Option<String>,

    /// Name of a built-in sample tree (see --list-presets)
    #[arg(short, long, conflicts_with = "random")]
    pub preset: Option<String>,

    /// Grow a random tree with at most N nodes
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for random trees
    #[arg(long)]
    pub seed: Option<u64>,

    /// Auto-play interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Print the step sequence as JSON instead of starting the UI
    #[arg(long)]
    pub dump: bool,

    /// Print the built-in presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Write logs to this file (honors RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Where the initial tree comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSource {
    Text(String),
    Preset(String),
    Random { max_nodes: usize },
}

/// What the binary should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Dump,
    ListPresets,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: TreeSource,
    pub seed: Option<u64>,
    pub interval: Duration,
    pub mode: Mode,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.tree, cli.preset, cli.random) {
            (Some(text), _, _) => TreeSource::Text(text),
            (None, Some(name), _) => TreeSource::Preset(name),
            (None, None, Some(max_nodes)) => TreeSource::Random { max_nodes },
            (None, None, None) => TreeSource::Preset(DEFAULT_PRESET.to_string()),
        };

        let mode = if cli.list_presets {
            Mode::ListPresets
        } else if cli.dump {
            Mode::Dump
        } else {
            Mode::Interactive
        };

        Config {
            source,
            seed: cli.seed,
            interval: cli
                .interval_ms
                .map_or(DEFAULT_INTERVAL, Duration::from_millis),
            mode,
            log_file: cli.log_file,
        }
    }
}

impl Config {
    /// RNG for random trees: seeded when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Produce the validated level-order array for the configured source
    pub fn initial_values(&self, rng: &mut StdRng) -> Result<Vec<Option<i32>>, TreeInputError> {
        match &self.source {
            TreeSource::Text(text) => parse_and_validate(text),
            TreeSource::Preset(name) => {
                let preset = find_preset(name)?;
                Ok(preset.values.to_vec())
            }
            TreeSource::Random { max_nodes } => {
                let options = RandomTreeOptions {
                    max_nodes: *max_nodes,
                    ..RandomTreeOptions::default()
                };
                let values = random_level_order(rng, options);
                validate(&values)?;
                Ok(values)
            }
        }
    }
}
