mod logger;
mod types;
mod error;
mod distance;
mod dataset;
mod initialization;
mod algorithm;
mod inertia;

use algorithm::{ClusteringState, DEFAULT_MAX_ITERATIONS};
use dataset::generate_dataset;
use inertia::calculate_inertia;
use types::Method;

use crate::logger::init_logger;

fn main() {
    init_logger().expect("Failed to initialize logger");

    let mut rng = rand::thread_rng();
    let dataset = generate_dataset(&mut rng, 300);
    let k = 6;

    for method in [Method::Random, Method::FarthestFirst, Method::KmeansPlusPlus] {
        log::info!("Starting KMeans with {} initialization", method);
        let mut state = ClusteringState::initialize(&dataset, k, method, &mut rng)
            .expect("error during initialization");
        let outcome = state
            .run_to_convergence(&dataset, DEFAULT_MAX_ITERATIONS)
            .expect("error during kmeans");

        if !outcome.converged {
            log::info!(
                "Did not converge within {} iterations",
                DEFAULT_MAX_ITERATIONS
            );
        }
        log::info!(
            "Finished KMeans with {} initialization - {} iterations, inertia: {}",
            method,
            outcome.iterations,
            calculate_inertia(state.clusters(), state.centroids())
        );
    }

    // Manual collection: feed k externally chosen points, then run as usual.
    log::info!("Starting KMeans with manual initialization");
    let mut state = ClusteringState::initialize(&dataset, k, Method::Manual, &mut rng)
        .expect("error during initialization");
    for &point in dataset.iter().take(k) {
        state.add_manual_centroid(point);
    }
    let outcome = state
        .run_to_convergence(&dataset, DEFAULT_MAX_ITERATIONS)
        .expect("error during kmeans");
    log::info!(
        "Finished KMeans with manual initialization - {} iterations, inertia: {}",
        outcome.iterations,
        calculate_inertia(state.clusters(), state.centroids())
    );
}
