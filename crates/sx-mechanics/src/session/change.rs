//! Change classification for partial redraws.

use serde::{Deserialize, Serialize};

use crate::config::RollParameters;
use crate::dice::{DiceDraw, DrawId};
use crate::resolution::{RollOutcome, Tally};
use crate::tint::DieTint;

/// Which part of a roll changed since the previous evaluation.
///
/// Presentation layers use this to pick the cheapest correct redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// New dice were drawn; everything must be redrawn.
    Complete,
    /// The difficulty changed; outcome and die tints may differ.
    DifficultyChanged,
    /// Willpower was toggled; only the outcome may differ.
    WillpowerChanged,
    /// The specialty was toggled; outcome and the tint of 10s may differ.
    SpecialtyChanged,
    /// Automatic successes changed; only the outcome may differ.
    AutosChanged,
}

impl ChangeKind {
    /// Classify the transition between two evaluator states.
    ///
    /// Dice identity takes priority, then difficulty, willpower, specialty,
    /// and finally autos. Returns `None` when nothing differs.
    pub fn classify(old: &SessionState, new: &SessionState) -> Option<Self> {
        let (a, b) = (&old.parameters, &new.parameters);
        if old.draw_id != new.draw_id {
            Some(Self::Complete)
        } else if a.difficulty != b.difficulty {
            Some(Self::DifficultyChanged)
        } else if a.willpower != b.willpower {
            Some(Self::WillpowerChanged)
        } else if a.specialty != b.specialty {
            Some(Self::SpecialtyChanged)
        } else if a.autos != b.autos {
            Some(Self::AutosChanged)
        } else {
            None
        }
    }

    /// Returns true when the dice themselves must be rebuilt.
    pub fn requires_full_redraw(self) -> bool {
        self == Self::Complete
    }

    /// Returns true when per-die tints may have changed.
    pub fn recolors_dice(self) -> bool {
        matches!(
            self,
            Self::Complete | Self::DifficultyChanged | Self::SpecialtyChanged
        )
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::DifficultyChanged => write!(f, "difficulty changed"),
            Self::WillpowerChanged => write!(f, "willpower changed"),
            Self::SpecialtyChanged => write!(f, "specialty changed"),
            Self::AutosChanged => write!(f, "autos changed"),
        }
    }
}

/// The inputs an evaluation depends on: which dice, scored how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Identity of the scored draw.
    pub draw_id: DrawId,
    /// Parameters the draw was scored with.
    pub parameters: RollParameters,
}

/// An owned snapshot of one session mutation.
///
/// Holds everything needed to render the change, so deferred redraws never
/// have to look at the session again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    /// What changed.
    pub kind: ChangeKind,
    /// The new outcome.
    pub outcome: RollOutcome,
    /// Counts behind the outcome.
    pub tally: Tally,
    /// The scored dice.
    pub draw: DiceDraw,
    /// Parameters in effect after the change.
    pub parameters: RollParameters,
}

impl SessionUpdate {
    /// The tint of every die, in roll order.
    pub fn tints(&self) -> Vec<DieTint> {
        self.draw
            .iter()
            .map(|d| DieTint::of(d, self.parameters.difficulty, self.parameters.specialty))
            .collect()
    }

    /// The evaluator state this update was computed from.
    pub fn state(&self) -> SessionState {
        SessionState {
            draw_id: self.draw.id(),
            parameters: self.parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: u64, parameters: RollParameters) -> SessionState {
        SessionState {
            draw_id: DrawId(id),
            parameters,
        }
    }

    #[test]
    fn identical_states_have_no_change() {
        let p = RollParameters::default();
        assert_eq!(ChangeKind::classify(&state(1, p), &state(1, p)), None);
    }

    #[test]
    fn new_dice_win_over_everything() {
        let old = state(1, RollParameters::default());
        let new = state(
            2,
            RollParameters {
                difficulty: 9,
                specialty: true,
                willpower: true,
                autos: 3,
            },
        );
        assert_eq!(ChangeKind::classify(&old, &new), Some(ChangeKind::Complete));
    }

    #[test]
    fn priority_order() {
        let base = RollParameters::default();
        let old = state(1, base);

        let all = RollParameters {
            difficulty: 7,
            specialty: true,
            willpower: true,
            autos: 1,
        };
        assert_eq!(
            ChangeKind::classify(&old, &state(1, all)),
            Some(ChangeKind::DifficultyChanged)
        );

        let no_difficulty = RollParameters {
            difficulty: base.difficulty,
            ..all
        };
        assert_eq!(
            ChangeKind::classify(&old, &state(1, no_difficulty)),
            Some(ChangeKind::WillpowerChanged)
        );

        let specialty_and_autos = RollParameters {
            willpower: false,
            ..no_difficulty
        };
        assert_eq!(
            ChangeKind::classify(&old, &state(1, specialty_and_autos)),
            Some(ChangeKind::SpecialtyChanged)
        );

        let autos_only = RollParameters { autos: 4, ..base };
        assert_eq!(
            ChangeKind::classify(&old, &state(1, autos_only)),
            Some(ChangeKind::AutosChanged)
        );
    }

    #[test]
    fn redraw_scope() {
        assert!(ChangeKind::Complete.requires_full_redraw());
        assert!(!ChangeKind::DifficultyChanged.requires_full_redraw());
        assert!(ChangeKind::DifficultyChanged.recolors_dice());
        assert!(ChangeKind::SpecialtyChanged.recolors_dice());
        assert!(!ChangeKind::WillpowerChanged.recolors_dice());
        assert!(!ChangeKind::AutosChanged.recolors_dice());
    }

    #[test]
    fn update_tints_follow_parameters() {
        let update = SessionUpdate {
            kind: ChangeKind::Complete,
            outcome: RollOutcome::Success { degree: 2 },
            tally: Tally {
                raw_successes: 3,
                ones: 1,
                net: 2,
            },
            draw: DiceDraw::from_values(&[1, 4, 6, 10]).unwrap(),
            parameters: RollParameters {
                specialty: true,
                ..RollParameters::default()
            },
        };
        assert_eq!(
            update.tints(),
            vec![
                DieTint::Botch,
                DieTint::Neutral,
                DieTint::Success,
                DieTint::Exceptional
            ]
        );
    }
}
