//! Storyteller pool evaluation.
//!
//! 1. Raw successes: dice at or above the difficulty, plus autos.
//! 2. A specialty adds one more for every 10, so a 10 counts twice.
//! 3. Net successes: raw successes minus the number of ones.
//! 4. Willpower lifts a negative net to exactly 1, otherwise adds 1.
//! 5. A negative net with zero raw successes is a botch of severity equal to
//!    the ones; a negative net with some raw successes, or a net of zero, is
//!    a failure; anything above zero is a success of that degree.

use serde::{Deserialize, Serialize};

use crate::config::RollParameters;
use crate::dice::{DiceDraw, DieValue};
use crate::resolution::RollOutcome;

/// The intermediate counts of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Successes before ones are subtracted, autos and specialty included.
    pub raw_successes: u64,
    /// Dice showing 1.
    pub ones: u32,
    /// Net successes after ones and willpower.
    pub net: i64,
}

impl Tally {
    /// Classify the tally.
    pub fn outcome(&self) -> RollOutcome {
        match self.net {
            n if n < 0 => {
                if self.raw_successes == 0 {
                    RollOutcome::Botch {
                        severity: self.ones,
                    }
                } else {
                    RollOutcome::Failure
                }
            }
            0 => RollOutcome::Failure,
            n => RollOutcome::Success {
                degree: u32::try_from(n).unwrap_or(u32::MAX),
            },
        }
    }
}

/// Count successes and ones for a draw.
pub fn tally(draw: &DiceDraw, params: &RollParameters) -> Tally {
    // Widened so autos near u32::MAX cannot overflow.
    let mut raw_successes =
        u64::from(draw.count_at_or_above(params.difficulty)) + u64::from(params.autos);
    let ones = draw.count_equal(DieValue::ONE);

    if params.specialty {
        raw_successes += u64::from(draw.count_equal(DieValue::TEN));
    }

    let mut net = i64::try_from(raw_successes).unwrap_or(i64::MAX) - i64::from(ones);
    if params.willpower {
        net = if net < 0 { 1 } else { net + 1 };
    }

    Tally {
        raw_successes,
        ones,
        net,
    }
}

/// Score a draw against the given modifiers.
pub fn evaluate(
    draw: &DiceDraw,
    difficulty: u32,
    specialty: bool,
    willpower: bool,
    autos: u32,
) -> RollOutcome {
    let params = RollParameters {
        difficulty,
        specialty,
        willpower,
        autos,
    };
    tally(draw, &params).outcome()
}

impl RollParameters {
    /// Score a draw with these parameters.
    pub fn score(&self, draw: &DiceDraw) -> RollOutcome {
        tally(draw, self).outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draw(values: &[u32]) -> DiceDraw {
        DiceDraw::from_values(values).unwrap()
    }

    #[test]
    fn ones_cancel_successes() {
        let d = draw(&[1, 1, 3, 7, 10]);
        let t = tally(&d, &RollParameters::default());
        assert_eq!(t.raw_successes, 2);
        assert_eq!(t.ones, 2);
        assert_eq!(t.net, 0);
        assert_eq!(evaluate(&d, 6, false, false, 0), RollOutcome::Failure);
    }

    #[test]
    fn all_low_with_ones_botches() {
        let d = draw(&[1, 1, 1, 2, 3]);
        assert_eq!(
            evaluate(&d, 6, false, false, 0),
            RollOutcome::Botch { severity: 3 }
        );
    }

    #[test]
    fn willpower_rescues_a_botch() {
        let d = draw(&[1, 1, 1, 2, 3]);
        assert_eq!(
            evaluate(&d, 6, false, true, 0),
            RollOutcome::Success { degree: 1 }
        );
    }

    #[test]
    fn specialty_doubles_tens() {
        let d = draw(&[10, 10, 2]);
        let params = RollParameters {
            difficulty: 8,
            specialty: true,
            ..RollParameters::default()
        };
        assert_eq!(tally(&d, &params).raw_successes, 4);
        assert_eq!(params.score(&d), RollOutcome::Success { degree: 4 });
    }

    #[test]
    fn autos_without_dice() {
        let d = DiceDraw::default();
        assert_eq!(
            evaluate(&d, 6, false, false, 5),
            RollOutcome::Success { degree: 5 }
        );
    }

    #[test]
    fn empty_pool_is_plain_failure() {
        let d = DiceDraw::default();
        assert_eq!(evaluate(&d, 6, false, false, 0), RollOutcome::Failure);
        assert_eq!(evaluate(&d, 6, true, false, 0), RollOutcome::Failure);
    }

    #[test]
    fn negative_net_with_raw_successes_is_failure() {
        // One success against three ones.
        let d = draw(&[1, 1, 1, 8]);
        let t = tally(&d, &RollParameters::default());
        assert_eq!(t.net, -2);
        assert_eq!(t.outcome(), RollOutcome::Failure);
    }

    #[test]
    fn autos_suppress_botch() {
        let d = draw(&[1, 1, 1, 2]);
        assert_eq!(evaluate(&d, 6, false, false, 1), RollOutcome::Failure);
    }

    #[test]
    fn willpower_adds_one_when_not_negative() {
        let d = draw(&[6, 7, 2]);
        assert_eq!(
            evaluate(&d, 6, false, true, 0),
            RollOutcome::Success { degree: 3 }
        );
        // Zero net becomes one.
        let d = draw(&[1, 9]);
        assert_eq!(
            evaluate(&d, 6, false, true, 0),
            RollOutcome::Success { degree: 1 }
        );
    }

    #[test]
    fn ten_counts_at_difficulty_ten() {
        let d = draw(&[10, 9]);
        assert_eq!(
            evaluate(&d, 10, false, false, 0),
            RollOutcome::Success { degree: 1 }
        );
        assert_eq!(
            evaluate(&d, 10, true, false, 0),
            RollOutcome::Success { degree: 2 }
        );
    }

    #[test]
    fn huge_autos_do_not_overflow() {
        let d = draw(&[7, 10]);
        let t = tally(
            &d,
            &RollParameters {
                specialty: true,
                autos: u32::MAX,
                ..RollParameters::default()
            },
        );
        assert_eq!(t.raw_successes, u64::from(u32::MAX) + 3);
        assert_eq!(t.outcome(), RollOutcome::Success { degree: u32::MAX });
    }

    #[test]
    fn huge_autos_with_willpower_stay_positive() {
        let empty = DiceDraw::default();
        assert_eq!(
            evaluate(&empty, 6, false, false, u32::MAX),
            RollOutcome::Success { degree: u32::MAX }
        );
        assert_eq!(
            evaluate(&empty, 6, false, true, u32::MAX),
            RollOutcome::Success { degree: u32::MAX }
        );
        assert_eq!(
            evaluate(&draw(&[7]), 6, false, false, u32::MAX),
            RollOutcome::Success { degree: u32::MAX }
        );
    }

    fn arb_draw() -> impl Strategy<Value = DiceDraw> {
        prop::collection::vec(1u32..=10, 0..20)
            .prop_map(|values| DiceDraw::from_values(&values).unwrap())
    }

    fn arb_params() -> impl Strategy<Value = RollParameters> {
        let autos = prop_oneof![0u32..5, any::<u32>()];
        (2u32..=10, any::<bool>(), any::<bool>(), autos).prop_map(
            |(difficulty, specialty, willpower, autos)| RollParameters {
                difficulty,
                specialty,
                willpower,
                autos,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_empty_pool_never_botches(difficulty in 2u32..=10, specialty in any::<bool>()) {
            let outcome = evaluate(&DiceDraw::default(), difficulty, specialty, false, 0);
            prop_assert_eq!(outcome, RollOutcome::Failure);
        }

        #[test]
        fn prop_botch_requires_no_raw_successes(d in arb_draw(), p in arb_params()) {
            let t = tally(&d, &p);
            if let RollOutcome::Botch { severity } = t.outcome() {
                prop_assert_eq!(t.raw_successes, 0);
                prop_assert!(t.ones > 0);
                prop_assert_eq!(severity, t.ones);
            }
        }

        #[test]
        fn prop_willpower_never_hurts(d in arb_draw(), p in arb_params()) {
            let without = tally(&d, &RollParameters { willpower: false, ..p });
            let with = tally(&d, &RollParameters { willpower: true, ..p });
            prop_assert!(with.net >= without.net);
            prop_assert!(with.net >= 1);
        }

        #[test]
        fn prop_specialty_never_lowers_raw(d in arb_draw(), p in arb_params()) {
            let plain = tally(&d, &RollParameters { specialty: false, ..p });
            let special = tally(&d, &RollParameters { specialty: true, ..p });
            prop_assert!(special.raw_successes >= plain.raw_successes);
        }

        #[test]
        fn prop_autos_only_never_botches(autos in any::<u32>(), p in arb_params()) {
            let outcome = evaluate(&DiceDraw::default(), p.difficulty, p.specialty, p.willpower, autos);
            prop_assert!(!outcome.is_botch());
        }

        #[test]
        fn prop_success_degree_is_positive(d in arb_draw(), p in arb_params()) {
            if let RollOutcome::Success { degree } = p.score(&d) {
                prop_assert!(degree > 0);
            }
        }
    }
}
