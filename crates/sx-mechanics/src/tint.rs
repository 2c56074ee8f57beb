//! Per-die presentation categories.

use serde::{Deserialize, Serialize};

use crate::dice::DieValue;

/// How a single die should be shown next to the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieTint {
    /// A 1, which cancels a success.
    Botch,
    /// At or above the difficulty.
    Success,
    /// A 10 scored under a specialty.
    Exceptional,
    /// Neither a success nor a 1.
    Neutral,
}

impl DieTint {
    /// Pick the tint for one face.
    ///
    /// A 1 is always a botch tint, even at a difficulty of 1.
    pub fn of(value: DieValue, difficulty: u32, specialty: bool) -> Self {
        if value == DieValue::ONE {
            Self::Botch
        } else if value.get() >= difficulty {
            if specialty && value == DieValue::TEN {
                Self::Exceptional
            } else {
                Self::Success
            }
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for DieTint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Botch => write!(f, "botch"),
            Self::Success => write!(f, "success"),
            Self::Exceptional => write!(f, "exceptional"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}
