//! Resolution of a d10 pool into a classified outcome.
//!
//! Each die at or above the difficulty scores a success, automatic
//! successes are added, and every 1 takes a success away. A specialty makes
//! a 10 count twice and willpower guarantees a success. See [`pool`] for the
//! exact order of operations.

pub mod pool;

pub use pool::{Tally, evaluate, tally};

use serde::{Deserialize, Serialize};

/// The outcome of scoring a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollOutcome {
    /// Ones outnumbered successes and nothing succeeded at all.
    Botch {
        /// Number of ones rolled.
        severity: u32,
    },
    /// No net successes.
    Failure,
    /// At least one net success.
    Success {
        /// Net successes.
        degree: u32,
    },
}

impl RollOutcome {
    /// Returns true for a botch.
    pub fn is_botch(&self) -> bool {
        matches!(self, Self::Botch { .. })
    }

    /// Returns true for any success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Botch { severity } => write!(f, "Botch ({severity})"),
            Self::Failure => write!(f, "Failure"),
            Self::Success { degree } => write!(f, "Success ({degree})"),
        }
    }
}
