use std::fmt;
use std::str::FromStr;

use crate::error::ClusterError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Centroid initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Random,
    FarthestFirst,
    KmeansPlusPlus,
    Manual,
}

impl FromStr for Method {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Method::Random),
            "farthest_first" => Ok(Method::FarthestFirst),
            "kmeans++" => Ok(Method::KmeansPlusPlus),
            "manual" => Ok(Method::Manual),
            other => Err(ClusterError::InvalidConfiguration(format!(
                "unknown initialization method: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Random => "random",
            Method::FarthestFirst => "farthest_first",
            Method::KmeansPlusPlus => "kmeans++",
            Method::Manual => "manual",
        };
        write!(f, "{}", name)
    }
}

/// Summary of a run-to-convergence loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub iterations: usize,
    pub converged: bool,
}
