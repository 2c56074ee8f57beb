//! d10 faces, draws, and rolling.
//!
//! Every pool is made of ten-sided dice. A [`DiceDraw`] is the ordered
//! result of rolling one pool and is never mutated once produced; re-rolling
//! replaces it with a new draw carrying a new [`DrawId`].

pub mod draw;
pub mod pool;

pub use draw::DiceDraw;
pub use pool::roll_pool;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Number of faces on every die in a pool.
pub const SIDES: u32 = 10;

/// The face shown by a single d10, always in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DieValue(u32);

impl DieValue {
    /// The lowest face, which subtracts a success.
    pub const ONE: Self = Self(1);
    /// The highest face, doubled under a specialty.
    pub const TEN: Self = Self(SIDES);

    /// Create a die value, rejecting faces outside `1..=10`.
    pub fn new(value: u32) -> MechResult<Self> {
        if (1..=SIDES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MechError::InvalidDieValue(value))
        }
    }

    /// The face as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DieValue {
    type Error = MechError;

    fn try_from(value: u32) -> MechResult<Self> {
        Self::new(value)
    }
}

impl From<DieValue> for u32 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one draw within a session.
///
/// Re-scoring keeps the id; only a new roll produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct DrawId(pub u64);

impl DrawId {
    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for DrawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
