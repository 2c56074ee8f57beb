//! Storyteller-style d10 pool mechanics for Successes.
//!
//! Provides d10 draws, the pool evaluator (difficulty, specialty, willpower
//! and automatic successes), per-die tints for presentation layers, and a
//! roll session that re-scores an existing draw and reports which part of a
//! display needs to be redrawn after every change.

pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod session;
pub mod tint;

pub use config::{RollParameters, SessionConfig};
pub use dice::{DiceDraw, DieValue, DrawId};
pub use error::{MechError, MechResult};
pub use resolution::{RollOutcome, Tally, evaluate};
pub use session::{ChangeKind, RollSession, SessionState, SessionUpdate};
pub use tint::DieTint;
