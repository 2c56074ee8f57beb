//! Roll parameters and session configuration.

use serde::{Deserialize, Serialize};

use crate::dice::SIDES;
use crate::error::{MechError, MechResult};

/// Difficulty used when nothing else is chosen.
pub const DEFAULT_DIFFICULTY: u32 = 6;

/// Largest pool [`RollParameters::validate`] accepts.
pub const MAX_POOL: u32 = 30;

/// The modifiers applied when scoring a draw.
///
/// Pool size is not part of this: it is fixed by the draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollParameters {
    /// Minimum face that counts as a success.
    pub difficulty: u32,
    /// A 10 counts as two successes.
    pub specialty: bool,
    /// Guarantee at least one net success, or add one.
    pub willpower: bool,
    /// Successes added before ones are subtracted.
    pub autos: u32,
}

impl Default for RollParameters {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            specialty: false,
            willpower: false,
            autos: 0,
        }
    }
}

impl RollParameters {
    /// Check the conventional ranges for a pool about to be rolled.
    ///
    /// The evaluator itself accepts anything; this is for front ends that
    /// take user input.
    pub fn validate(&self, pool_size: u32) -> MechResult<()> {
        if !(2..=SIDES).contains(&self.difficulty) {
            return Err(MechError::InvalidDifficulty(self.difficulty));
        }
        if pool_size > MAX_POOL {
            return Err(MechError::InvalidPool(format!(
                "{pool_size} dice requested, at most {MAX_POOL} allowed"
            )));
        }
        Ok(())
    }
}

/// Configuration for a roll session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Parameters in effect before the first change.
    pub parameters: RollParameters,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting difficulty (clamped to 1-10).
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.parameters.difficulty = difficulty.clamp(1, SIDES);
        self
    }

    /// Start with the specialty toggle on or off.
    pub fn with_specialty(mut self, specialty: bool) -> Self {
        self.parameters.specialty = specialty;
        self
    }

    /// Start with willpower spent or not.
    pub fn with_willpower(mut self, willpower: bool) -> Self {
        self.parameters.willpower = willpower;
        self
    }

    /// Set the starting automatic successes.
    pub fn with_autos(mut self, autos: u32) -> Self {
        self.parameters.autos = autos;
        self
    }
}
