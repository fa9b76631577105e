//! Clock text formatting

use std::fmt;

use serde::Deserialize;

/// How the penalty counter is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyDisplay {
    /// `HH:MM:SS`
    #[default]
    Hms,
    /// `MM:SS`, minutes uncapped
    Ms,
}

impl PenaltyDisplay {
    pub fn format(self, seconds: u64) -> String {
        match self {
            PenaltyDisplay::Hms => format_hms(seconds),
            PenaltyDisplay::Ms => format_ms(seconds),
        }
    }
}

impl std::str::FromStr for PenaltyDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hms" => Ok(PenaltyDisplay::Hms),
            "ms" => Ok(PenaltyDisplay::Ms),
            other => Err(format!("unknown penalty format: {other} (expected hms or ms)")),
        }
    }
}

impl fmt::Display for PenaltyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyDisplay::Hms => write!(f, "hms"),
            PenaltyDisplay::Ms => write!(f, "ms"),
        }
    }
}

/// Format whole seconds as `HH:MM:SS`.
///
/// Hours are not capped, so 100 hours renders as `100:00:00`.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format whole seconds as `MM:SS`
pub fn format_ms(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}
