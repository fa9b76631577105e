//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::game::PenaltyDisplay;

#[derive(Debug, Parser)]
#[command(name = "riddlerun", version, about = "Solve the riddles before the clock runs away")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of ~/.riddlerun/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the default config and logs
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Penalty display format: hms or ms
    #[arg(long, global = true, value_name = "FORMAT")]
    pub penalty_format: Option<PenaltyDisplay>,

    /// Turn the hint action off
    #[arg(long, global = true)]
    pub no_hints: bool,

    /// Clock refresh interval in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the config and print a one-line summary
    Check,
}

impl Cli {
    /// Load the config named on the command line (or the default one) and
    /// apply flag overrides
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(display) = self.penalty_format {
            config = config.with_penalty_display(display);
        }
        if self.no_hints {
            config = config.with_hints_enabled(false);
        }
        if let Some(tick_ms) = self.tick_ms {
            config = config.with_tick_ms(tick_ms);
        }

        config.validate()?;
        Ok(config)
    }
}
