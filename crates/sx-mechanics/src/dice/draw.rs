//! The ordered result of rolling one pool.

use serde::{Deserialize, Serialize};

use super::{DieValue, DrawId};
use crate::error::MechResult;

/// An immutable, ordered set of d10 faces produced by one roll action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiceDraw {
    id: DrawId,
    dice: Vec<DieValue>,
}

impl DiceDraw {
    /// Create a draw from already validated faces.
    pub fn new(id: DrawId, dice: Vec<DieValue>) -> Self {
        Self { id, dice }
    }

    /// Create a draw from raw faces, rejecting anything outside `1..=10`.
    ///
    /// The draw gets the default id; a session stamps its own id when the
    /// draw is installed.
    pub fn from_values(values: &[u32]) -> MechResult<Self> {
        let dice = values
            .iter()
            .map(|&v| DieValue::new(v))
            .collect::<MechResult<Vec<_>>>()?;
        Ok(Self::new(DrawId::default(), dice))
    }

    pub(crate) fn with_id(self, id: DrawId) -> Self {
        Self { id, ..self }
    }

    /// The identity of these dice.
    pub fn id(&self) -> DrawId {
        self.id
    }

    /// The faces in roll order.
    pub fn values(&self) -> &[DieValue] {
        &self.dice
    }

    /// Iterate over the faces in roll order.
    pub fn iter(&self) -> impl Iterator<Item = DieValue> + '_ {
        self.dice.iter().copied()
    }

    /// Number of dice in the draw.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true for a pool of zero dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Count dice showing `threshold` or more.
    pub fn count_at_or_above(&self, threshold: u32) -> u32 {
        self.dice.iter().filter(|d| d.get() >= threshold).count() as u32
    }

    /// Count dice showing exactly `face`.
    pub fn count_equal(&self, face: DieValue) -> u32 {
        self.dice.iter().filter(|&&d| d == face).count() as u32
    }
}

impl std::fmt::Display for DiceDraw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;

    #[test]
    fn from_values_validates() {
        let draw = DiceDraw::from_values(&[1, 5, 10]).unwrap();
        assert_eq!(draw.len(), 3);
        assert_eq!(draw.id(), DrawId::default());
        assert_eq!(
            DiceDraw::from_values(&[3, 0]),
            Err(MechError::InvalidDieValue(0))
        );
    }

    #[test]
    fn empty_draw() {
        let draw = DiceDraw::default();
        assert!(draw.is_empty());
        assert_eq!(draw.count_at_or_above(1), 0);
        assert_eq!(draw.count_equal(DieValue::ONE), 0);
        assert_eq!(draw.to_string(), "[]");
    }

    #[test]
    fn counts() {
        let draw = DiceDraw::from_values(&[1, 1, 3, 7, 10]).unwrap();
        assert_eq!(draw.count_at_or_above(6), 2);
        assert_eq!(draw.count_at_or_above(1), 5);
        assert_eq!(draw.count_equal(DieValue::ONE), 2);
        assert_eq!(draw.count_equal(DieValue::TEN), 1);
    }

    #[test]
    fn with_id_keeps_dice() {
        let draw = DiceDraw::from_values(&[4, 9]).unwrap();
        let stamped = draw.clone().with_id(DrawId(7));
        assert_eq!(stamped.id(), DrawId(7));
        assert_eq!(stamped.values(), draw.values());
    }

    #[test]
    fn display() {
        let draw = DiceDraw::from_values(&[2, 10, 6]).unwrap();
        assert_eq!(draw.to_string(), "[2, 10, 6]");
    }
}
