//! Rolling a pool of d10s.

use rand::Rng;

use super::draw::DiceDraw;
use super::{DieValue, DrawId, SIDES};

/// Roll `pool_size` independent d10s and tag the result with `id`.
pub fn roll_pool<R: Rng>(pool_size: u32, id: DrawId, rng: &mut R) -> DiceDraw {
    let dice = (0..pool_size)
        .map(|_| DieValue(rng.random_range(1..=SIDES)))
        .collect();
    DiceDraw::new(id, dice)
}
