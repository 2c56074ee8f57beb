//! Roll session management.
//!
//! `RollSession` owns the current parameters, the current draw, and the last
//! outcome for one display surface. Every mutation re-scores the draw and
//! returns a [`SessionUpdate`] naming the single [`ChangeKind`] it caused, so
//! the caller can redraw only what changed.
//!
//! Setters called before the first roll store the new value and return
//! `None`: there is no pool to score yet.

pub mod change;

pub use change::{ChangeKind, SessionState, SessionUpdate};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::config::{RollParameters, SessionConfig};
use crate::dice::{DiceDraw, DrawId, roll_pool};
use crate::resolution::{RollOutcome, Tally, tally};
use crate::tint::DieTint;

/// A draw together with its latest score.
#[derive(Debug, Clone)]
struct Scored {
    draw: DiceDraw,
    tally: Tally,
    outcome: RollOutcome,
}

/// Roll state for one display surface.
#[derive(Debug)]
pub struct RollSession {
    parameters: RollParameters,
    current: Option<Scored>,
    last_id: DrawId,
    rng: StdRng,
}

impl RollSession {
    /// Create a session with no draw yet.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            parameters: config.parameters,
            current: None,
            last_id: DrawId::default(),
            rng,
        }
    }

    /// Current parameters.
    pub fn parameters(&self) -> &RollParameters {
        &self.parameters
    }

    /// The current draw, if anything has been rolled.
    pub fn draw(&self) -> Option<&DiceDraw> {
        self.current.as_ref().map(|s| &s.draw)
    }

    /// The last computed outcome.
    pub fn outcome(&self) -> Option<RollOutcome> {
        self.current.as_ref().map(|s| s.outcome)
    }

    /// Counts behind the last outcome.
    pub fn tally(&self) -> Option<Tally> {
        self.current.as_ref().map(|s| s.tally)
    }

    /// Tint of every die in the current draw; empty before the first roll.
    pub fn tints(&self) -> Vec<DieTint> {
        let p = &self.parameters;
        self.draw()
            .map(|draw| {
                draw.iter()
                    .map(|d| DieTint::of(d, p.difficulty, p.specialty))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The evaluator state, if a draw exists.
    pub fn snapshot(&self) -> Option<SessionState> {
        self.draw().map(|draw| SessionState {
            draw_id: draw.id(),
            parameters: self.parameters,
        })
    }

    /// Roll a fresh pool, replacing the current draw.
    pub fn roll(&mut self, pool_size: u32) -> SessionUpdate {
        let id = self.next_id();
        let draw = roll_pool(pool_size, id, &mut self.rng);
        debug!(%id, pool_size, %draw, "rolled pool");
        self.install(draw)
    }

    /// Install caller-supplied dice as a new draw.
    ///
    /// Counts as new dice, exactly like [`roll`](Self::roll).
    pub fn replace_draw(&mut self, draw: DiceDraw) -> SessionUpdate {
        let id = self.next_id();
        let draw = draw.with_id(id);
        debug!(%id, %draw, "installed draw");
        self.install(draw)
    }

    /// Change the difficulty and re-score the current dice.
    pub fn set_difficulty(&mut self, difficulty: u32) -> Option<SessionUpdate> {
        self.parameters.difficulty = difficulty;
        self.rescore(ChangeKind::DifficultyChanged)
    }

    /// Spend or release willpower and re-score the current dice.
    pub fn set_willpower(&mut self, willpower: bool) -> Option<SessionUpdate> {
        self.parameters.willpower = willpower;
        self.rescore(ChangeKind::WillpowerChanged)
    }

    /// Turn the specialty on or off and re-score the current dice.
    pub fn set_specialty(&mut self, specialty: bool) -> Option<SessionUpdate> {
        self.parameters.specialty = specialty;
        self.rescore(ChangeKind::SpecialtyChanged)
    }

    /// Change the automatic successes and re-score the current dice.
    pub fn set_autos(&mut self, autos: u32) -> Option<SessionUpdate> {
        self.parameters.autos = autos;
        self.rescore(ChangeKind::AutosChanged)
    }

    /// Flip willpower.
    pub fn toggle_willpower(&mut self) -> Option<SessionUpdate> {
        self.set_willpower(!self.parameters.willpower)
    }

    /// Flip the specialty.
    pub fn toggle_specialty(&mut self) -> Option<SessionUpdate> {
        self.set_specialty(!self.parameters.specialty)
    }

    fn next_id(&mut self) -> DrawId {
        self.last_id = self.last_id.next();
        self.last_id
    }

    fn install(&mut self, draw: DiceDraw) -> SessionUpdate {
        let tally = tally(&draw, &self.parameters);
        let outcome = tally.outcome();
        trace!(?tally, %outcome, "scored new draw");
        let update = SessionUpdate {
            kind: ChangeKind::Complete,
            outcome,
            tally,
            draw: draw.clone(),
            parameters: self.parameters,
        };
        self.current = Some(Scored {
            draw,
            tally,
            outcome,
        });
        update
    }

    fn rescore(&mut self, kind: ChangeKind) -> Option<SessionUpdate> {
        let Some(scored) = self.current.as_mut() else {
            debug!(%kind, "no draw yet, parameter stored");
            return None;
        };
        scored.tally = tally(&scored.draw, &self.parameters);
        scored.outcome = scored.tally.outcome();
        debug!(%kind, outcome = %scored.outcome, "re-scored draw");
        trace!(tally = ?scored.tally);
        Some(SessionUpdate {
            kind,
            outcome: scored.outcome,
            tally: scored.tally,
            draw: scored.draw.clone(),
            parameters: self.parameters,
        })
    }
}
