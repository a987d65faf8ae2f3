use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating systems a client can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "ANDROID")]
    Android,
    #[serde(rename = "DESKTOP")]
    Desktop,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "ANDROID",
            Platform::Desktop => "DESKTOP",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Accepts the wire string as well as a lowercase spelling (`ios`, `android`, `desktop`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown platform: {s}"))
    }
}

/// How far along a client is. Declaration order is the display order, from
/// least to most mature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Maturity {
    #[default]
    #[serde(rename = "ALPHA")]
    Alpha,
    #[serde(rename = "LATE ALPHA")]
    LateAlpha,
    #[serde(rename = "BETA")]
    Beta,
    #[serde(rename = "LATE_BETA")]
    LateBeta,
    #[serde(rename = "STABLE")]
    Stable,
}

impl Maturity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Maturity::Alpha => "ALPHA",
            // The space (rather than an underscore) is the published value.
            Maturity::LateAlpha => "LATE ALPHA",
            Maturity::Beta => "BETA",
            Maturity::LateBeta => "LATE_BETA",
            Maturity::Stable => "STABLE",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
