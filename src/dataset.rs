use itertools::Itertools;
use rand::Rng;

use crate::types::Point;

/// Coordinates are drawn uniformly from this half-open range on both axes.
pub const COORDINATE_RANGE: std::ops::Range<f64> = -10.0..10.0;

pub fn generate_dataset(rng: &mut impl Rng, num_points: usize) -> Vec<Point> {
    (0..num_points)
        .map(|_| {
            Point::new(
                rng.gen_range(COORDINATE_RANGE),
                rng.gen_range(COORDINATE_RANGE),
            )
        })
        .collect_vec()
}
