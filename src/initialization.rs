use std::collections::HashSet;

use rand::Rng;
use rayon::prelude::*;

use crate::distance::{distance, squared_distance};
use crate::error::ClusterError;
use crate::types::Point;

pub fn validate_config(dataset_len: usize, k: usize) -> Result<(), ClusterError> {
    if k == 0 {
        return Err(ClusterError::InvalidConfiguration(
            "number of clusters must be at least 1".to_string(),
        ));
    }
    if k > dataset_len {
        return Err(ClusterError::InvalidConfiguration(format!(
            "number of clusters ({}) cannot be greater than the number of data points ({})",
            k, dataset_len
        )));
    }
    Ok(())
}

/// Uniformly random centroids drawn from k distinct dataset indices.
pub fn random_init(dataset: &[Point], k: usize, rng: &mut impl Rng) -> Vec<Point> {
    let mut selected = HashSet::new();
    let mut centroids = Vec::with_capacity(k);

    while centroids.len() < k {
        let index = rng.gen_range(0..dataset.len());
        if selected.insert(index) {
            centroids.push(dataset[index]);
        }
    }

    centroids
}

/// Greedy initializer maximizing the minimum distance of each new centroid
/// to all previously chosen ones. Deterministic given the first pick.
pub fn farthest_first_init(dataset: &[Point], k: usize, rng: &mut impl Rng) -> Vec<Point> {
    let mut centroids = Vec::with_capacity(k);

    // Randomly select the first centroid
    centroids.push(dataset[rng.gen_range(0..dataset.len())]);

    while centroids.len() < k {
        // Max-by-min-distance scan; ties keep the first index encountered
        let mut farthest = dataset[0];
        let mut farthest_dist = min_distance_to_centroids(dataset[0], &centroids);
        for &point in &dataset[1..] {
            let dist = min_distance_to_centroids(point, &centroids);
            if dist > farthest_dist {
                farthest = point;
                farthest_dist = dist;
            }
        }
        centroids.push(farthest);
    }

    centroids
}

/// Probability-proportional-to-squared-distance sampling of initial centroids.
pub fn kmeans_plusplus_init(dataset: &[Point], k: usize, rng: &mut impl Rng) -> Vec<Point> {
    let mut centroids = Vec::with_capacity(k);

    // Randomly select the first centroid
    centroids.push(dataset[rng.gen_range(0..dataset.len())]);

    // Select k-1 remaining centroids
    while centroids.len() < k {
        // Squared distance of every point to its nearest centroid, in parallel
        let weights: Vec<f64> = dataset
            .par_iter()
            .map(|&point| {
                centroids
                    .iter()
                    .map(|&centroid| squared_distance(point, centroid))
                    .fold(f64::MAX, f64::min)
            })
            .collect();

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        for weight in weights {
            total += weight;
            cumulative.push(total);
        }

        // A zero total (every point coincides with a centroid) draws r = 0,
        // which lands on the first point.
        let r = rng.gen::<f64>() * total;
        let next_idx = cumulative
            .iter()
            .position(|&cum| cum >= r)
            .unwrap_or(dataset.len() - 1);
        centroids.push(dataset[next_idx]);
    }

    centroids
}

fn min_distance_to_centroids(point: Point, centroids: &[Point]) -> f64 {
    centroids
        .iter()
        .map(|&centroid| distance(point, centroid))
        .fold(f64::MAX, f64::min)
}
