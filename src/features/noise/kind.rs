//! Noise colors.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FlowtimeError;

/// Color of a background noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// Flat spectrum.
    White,
    /// Roughly 1/f spectrum.
    Pink,
    /// Roughly 1/f² spectrum.
    Brown,
}

impl NoiseKind {
    /// All noise colors, in menu order.
    pub const ALL: [Self; 3] = [Self::White, Self::Pink, Self::Brown];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Pink => "Pink",
            Self::Brown => "Brown",
        }
    }
}

impl std::fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for NoiseKind {
    type Err = FlowtimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Ok(Self::White),
            "pink" | "p" => Ok(Self::Pink),
            "brown" | "brownian" | "red" | "b" => Ok(Self::Brown),
            other => Err(FlowtimeError::Parse(format!("unknown noise kind '{other}'"))),
        }
    }
}
