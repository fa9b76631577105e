use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::game::{PenaltyDisplay, Riddle, SessionRules, DEFAULT_PENALTY_SECONDS};
use crate::ui::action::Action;
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Accepted clock refresh interval, in milliseconds
pub const TICK_MS_RANGE: std::ops::RangeInclusive<u64> = 100..=1000;

/// Codes of the stock riddle set
const DEFAULT_CODES: [&str; 5] = ["123", "456", "789", "012", "345"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No riddles configured")]
    NoRiddles,
    #[error("Riddle {index} has an empty code")]
    EmptyCode { index: usize },
    #[error("Riddle {index} code {code:?} must contain only digits 0-9")]
    NonDigitCode { index: usize, code: String },
    #[error("Penalty must be at least one second")]
    ZeroPenalty,
    #[error("Tick interval {0} ms is outside 100..=1000")]
    TickOutOfRange(u64),
}

/// One riddle as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RiddleConfig {
    pub code: String,
    pub title: Option<String>,
    pub prompt: Option<String>,
    pub hint: Option<String>,
}

impl RiddleConfig {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: None,
            prompt: None,
            hint: None,
        }
    }

    fn to_riddle(&self) -> Riddle {
        let mut riddle = Riddle::new(self.code.clone());
        riddle.title = self.title.clone();
        riddle.prompt = self.prompt.clone();
        riddle.hint = self.hint.clone();
        riddle
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Riddles in board order
    pub riddles: Vec<RiddleConfig>,
    /// Seconds added per failed attempt or hint
    pub penalty_seconds: u64,
    /// Rendering of the penalty counter
    pub penalty_display: PenaltyDisplay,
    /// Whether the hint action is offered
    pub hints_enabled: bool,
    /// Clock refresh interval
    pub tick_ms: u64,
    /// Duration of the success/failure flash
    pub flash_ms: u64,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            riddles: DEFAULT_CODES
                .iter()
                .enumerate()
                .map(|(i, code)| RiddleConfig {
                    title: Some(format!("Riddle {}", i + 1)),
                    ..RiddleConfig::new(*code)
                })
                .collect(),
            penalty_seconds: DEFAULT_PENALTY_SECONDS,
            penalty_display: PenaltyDisplay::Hms,
            hints_enabled: true,
            tick_ms: 250,
            flash_ms: 220,
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of the `[game]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlGameConfig {
    pub penalty_seconds: Option<u64>,
    pub penalty_display: Option<PenaltyDisplay>,
    pub hints: Option<bool>,
    pub tick_ms: Option<u64>,
    pub flash_ms: Option<u64>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,
    pub start: Option<HashMap<String, String>>,
    pub board: Option<HashMap<String, String>>,
    pub dialog: Option<HashMap<String, String>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub game: Option<TomlGameConfig>,
    pub riddles: Option<Vec<RiddleConfig>>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, value) in &self.global {
            // Context tables are captured by the named fields
            if let Some(key_str) = value.as_str() {
                insert_binding(&mut config.global, action_name, key_str);
            }
        }

        for (context, bindings) in [
            (KeyContext::Start, &self.start),
            (KeyContext::Board, &self.board),
            (KeyContext::Dialog, &self.dialog),
        ] {
            if let Some(bindings) = bindings {
                let map = config.context.entry(context).or_default();
                for (action_name, key_str) in bindings {
                    insert_binding(map, action_name, key_str);
                }
            }
        }

        config
    }
}

fn insert_binding(
    map: &mut HashMap<KeyCombo, Action>,
    action_name: &str,
    key_str: &str,
) {
    let Some(action) = Action::from_name(action_name) else {
        tracing::warn!(action = action_name, "Unknown action in [keys], skipping");
        return;
    };
    match parse_key_notation(key_str) {
        Ok(combo) => {
            map.insert(combo, action);
        }
        Err(e) => {
            tracing::warn!(action = action_name, key = key_str, error = %e, "Invalid key notation, skipping");
        }
    }
}

impl Config {
    /// Load the config from the default location, writing the bundled example
    /// on first run
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = config_path();
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            riddles = config.riddles.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Merge TOML contents over the defaults and validate the result
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(game) = toml_config.game {
            if let Some(penalty) = game.penalty_seconds {
                config.penalty_seconds = penalty;
            }
            if let Some(display) = game.penalty_display {
                config.penalty_display = display;
            }
            if let Some(hints) = game.hints {
                config.hints_enabled = hints;
            }
            if let Some(tick_ms) = game.tick_ms {
                config.tick_ms = tick_ms;
            }
            if let Some(flash_ms) = game.flash_ms {
                config.flash_ms = flash_ms;
            }
        }

        if let Some(riddles) = toml_config.riddles {
            config.riddles = riddles;
        }

        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the game relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.riddles.is_empty() {
            return Err(ConfigError::NoRiddles);
        }
        for (index, riddle) in self.riddles.iter().enumerate() {
            if riddle.code.is_empty() {
                return Err(ConfigError::EmptyCode { index });
            }
            if !riddle.code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::NonDigitCode {
                    index,
                    code: riddle.code.clone(),
                });
            }
        }
        if self.penalty_seconds == 0 {
            return Err(ConfigError::ZeroPenalty);
        }
        if !TICK_MS_RANGE.contains(&self.tick_ms) {
            return Err(ConfigError::TickOutOfRange(self.tick_ms));
        }
        Ok(())
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_penalty_display(mut self, display: PenaltyDisplay) -> Self {
        self.penalty_display = display;
        self
    }

    pub fn with_hints_enabled(mut self, enabled: bool) -> Self {
        self.hints_enabled = enabled;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Session tunables derived from this config
    pub fn rules(&self) -> SessionRules {
        SessionRules {
            penalty_per_fail: self.penalty_seconds,
            penalty_display: self.penalty_display,
        }
    }

    /// Fresh, unsolved riddles in board order
    pub fn build_riddles(&self) -> Vec<Riddle> {
        self.riddles.iter().map(RiddleConfig::to_riddle).collect()
    }

    /// One-line description used by `riddlerun check`
    pub fn summary_line(&self) -> String {
        let lengths: Vec<String> = self
            .riddles
            .iter()
            .map(|r| r.code.len().to_string())
            .collect();
        format!(
            "{} riddles (code lengths {}), penalty {}s, display {}, hints {}",
            self.riddles.len(),
            lengths.join("/"),
            self.penalty_seconds,
            self.penalty_display,
            if self.hints_enabled { "on" } else { "off" }
        )
    }
}
