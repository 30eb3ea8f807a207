use crate::distance::distance;
use crate::types::Point;

pub fn calculate_inertia(clusters: &[Vec<Point>], centroids: &[Point]) -> f64 {
    return clusters
        .iter()
        .zip(centroids.iter())
        .map(|(cluster, &centroid)| {
            cluster
                .iter()
                .map(|&point| distance(point, centroid))
                .sum::<f64>()
        })
        .sum();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_distances_to_the_assigned_centroid() {
        let clusters = vec![
            vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)],
            vec![Point::new(10.0, 10.0)],
        ];
        let centroids = vec![Point::new(0.0, 0.5), Point::new(10.0, 10.0)];
        assert!((calculate_inertia(&clusters, &centroids) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_partition_has_zero_inertia() {
        assert_eq!(calculate_inertia(&[], &[]), 0.0);
    }
}
