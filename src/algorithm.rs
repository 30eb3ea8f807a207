use itertools::Itertools;
use rand::Rng;
use rayon::prelude::*;

use crate::distance::{distance, mean};
use crate::error::ClusterError;
use crate::initialization::{
    farthest_first_init, kmeans_plusplus_init, random_init, validate_config,
};
use crate::types::{Method, Point, RunOutcome};

/// A centroid that moved less than this between consecutive updates is
/// considered stationary.
pub const CONVERGENCE_EPSILON: f64 = 0.01;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    AwaitingManualInput,
    Ready,
    Converged,
}

/// The full clustering state, passed explicitly through every operation.
/// The dataset itself is borrowed per call and never mutated.
#[derive(Debug, Clone)]
pub struct ClusteringState {
    k: usize,
    centroids: Vec<Point>,
    clusters: Vec<Vec<Point>>,
    phase: Phase,
}

impl Default for ClusteringState {
    fn default() -> Self {
        Self {
            k: 0,
            centroids: Vec::new(),
            clusters: Vec::new(),
            phase: Phase::Uninitialized,
        }
    }
}

impl ClusteringState {
    /// Builds a fresh state with k centroids produced by `method`. Manual
    /// mode instead enters `AwaitingManualInput` with no centroids; feed it
    /// with `add_manual_centroid` until k are collected.
    ///
    /// Also the reinitialization entry point: a converged run is discarded
    /// by building a new state from it.
    pub fn initialize(
        dataset: &[Point],
        k: usize,
        method: Method,
        rng: &mut impl Rng,
    ) -> Result<Self, ClusterError> {
        validate_config(dataset.len(), k)?;

        let (centroids, phase) = match method {
            Method::Random => (random_init(dataset, k, rng), Phase::Ready),
            Method::FarthestFirst => (farthest_first_init(dataset, k, rng), Phase::Ready),
            Method::KmeansPlusPlus => (kmeans_plusplus_init(dataset, k, rng), Phase::Ready),
            Method::Manual => (Vec::new(), Phase::AwaitingManualInput),
        };

        Ok(Self {
            k,
            centroids,
            clusters: Vec::new(),
            phase,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    pub fn clusters(&self) -> &[Vec<Point>] {
        &self.clusters
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn converged(&self) -> bool {
        self.phase == Phase::Converged
    }

    /// Appends an externally chosen centroid while manual collection is in
    /// progress. Inert in every other phase and once k are collected; the
    /// k-th point makes the state ready to step.
    pub fn add_manual_centroid(&mut self, point: Point) {
        if self.phase != Phase::AwaitingManualInput || self.centroids.len() >= self.k {
            return;
        }
        self.centroids.push(point);
        if self.centroids.len() == self.k {
            self.phase = Phase::Ready;
        }
    }

    /// One assignment + update round. A converged state is left untouched;
    /// stepping before initialization finished is an error.
    pub fn step(&mut self, dataset: &[Point]) -> Result<(), ClusterError> {
        match self.phase {
            Phase::Uninitialized | Phase::AwaitingManualInput => {
                return Err(ClusterError::PrematureStep)
            }
            Phase::Converged => return Ok(()),
            Phase::Ready => {}
        }

        self.clusters = assign_clusters(dataset, &self.centroids);
        let new_centroids = update_centroids(&self.centroids, &self.clusters);

        // Check for convergence
        let converged = self
            .centroids
            .iter()
            .zip(new_centroids.iter())
            .all(|(&old, &new)| distance(old, new) < CONVERGENCE_EPSILON);

        self.centroids = new_centroids;
        if converged {
            self.phase = Phase::Converged;
        }

        Ok(())
    }

    /// Steps until convergence or until the iteration cap is exhausted.
    /// Exhausting the cap is a reported outcome, not an error.
    pub fn run_to_convergence(
        &mut self,
        dataset: &[Point],
        max_iterations: usize,
    ) -> Result<RunOutcome, ClusterError> {
        if self.converged() {
            return Ok(RunOutcome {
                iterations: 0,
                converged: true,
            });
        }

        for iter in 0..max_iterations {
            self.step(dataset)?;
            if self.converged() {
                log::info!("Converged after {} iterations", iter + 1);
                return Ok(RunOutcome {
                    iterations: iter + 1,
                    converged: true,
                });
            }
            if iter > 0 && iter % 10 == 0 {
                log::info!("Finished iteration {}", iter);
            }
        }

        Ok(RunOutcome {
            iterations: max_iterations,
            converged: false,
        })
    }
}

/// Partitions the dataset into one cluster per centroid. Each point goes to
/// the centroid minimizing its distance; the scan runs in index order and
/// only replaces the running best on strict improvement, so ties resolve to
/// the lowest centroid index.
fn assign_clusters(dataset: &[Point], centroids: &[Point]) -> Vec<Vec<Point>> {
    let labels: Vec<usize> = dataset
        .par_iter()
        .map(|&point| {
            let mut closest = 0;
            let mut min_dist = distance(point, centroids[0]);
            for (idx, &centroid) in centroids.iter().enumerate().skip(1) {
                let dist = distance(point, centroid);
                if dist < min_dist {
                    min_dist = dist;
                    closest = idx;
                }
            }
            closest
        })
        .collect();

    let mut clusters = vec![Vec::new(); centroids.len()];
    for (&point, label) in dataset.iter().zip(labels) {
        clusters[label].push(point);
    }
    clusters
}

/// New centroid positions: the coordinate-wise mean of each non-empty
/// cluster. An empty cluster keeps its previous centroid, so no mean is
/// ever taken over nothing.
fn update_centroids(centroids: &[Point], clusters: &[Vec<Point>]) -> Vec<Point> {
    centroids
        .iter()
        .zip(clusters.iter())
        .map(|(&centroid, cluster)| {
            if cluster.is_empty() {
                centroid
            } else {
                Point::new(
                    mean(&cluster.iter().map(|p| p.x).collect_vec()),
                    mean(&cluster.iter().map(|p| p.y).collect_vec()),
                )
            }
        })
        .collect()
}
