//! Combining several paths into one centre of gravity.
//!
//! Each path is treated as a lamina of unit density: its mass is its
//! area and its moments add. The combined centroid is the summed
//! moments over the summed area.

use kurbo::{BezPath, Point};
use log::{debug, warn};
use rayon::prelude::*;

use crate::config::MomentConfig;
use crate::error::MomentError;
use crate::moments::{compute_moments, Moments};

/// Element-wise sum of moment triples. Fails on an empty input.
pub fn aggregate<I>(triples: I) -> Result<Moments, MomentError>
where
    I: IntoIterator<Item = Moments>,
{
    let mut iter = triples.into_iter();
    let first = iter.next().ok_or(MomentError::EmptyBatch)?;
    Ok(iter.fold(first, |acc, m| acc + m))
}

/// Result of measuring a batch of independent paths.
#[derive(Debug)]
pub struct BatchReport {
    /// Per-path moments, in input order. A failed path does not affect
    /// the others.
    pub paths: Vec<Result<Moments, MomentError>>,
    /// Sum over the successfully measured paths, when there are at
    /// least two of them.
    pub combined: Option<Moments>,
}

impl BatchReport {
    /// Build a report from per-path results, combining the successful ones.
    pub fn from_results(paths: Vec<Result<Moments, MomentError>>) -> Self {
        for (i, result) in paths.iter().enumerate() {
            if let Err(e) = result {
                warn!("path {}: {}", i + 1, e);
            }
        }

        let measured: Vec<Moments> = paths.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
        let count = measured.len();
        let combined = if count > 1 { aggregate(measured).ok() } else { None };
        if let Some(m) = &combined {
            debug!("combined area {:.6} over {} paths", m.area, count);
        }

        Self { paths, combined }
    }

    /// Centroid of each path, in input order.
    pub fn centroids(&self, tolerance: f64) -> Vec<Result<Point, MomentError>> {
        self.paths
            .iter()
            .map(|result| match result {
                Ok(m) => m.centroid_with_tolerance(tolerance),
                Err(e) => Err(e.clone()),
            })
            .collect()
    }

    /// Combined centroid of all measured paths, if there was more than one.
    pub fn combined_centroid(&self, tolerance: f64) -> Option<Result<Point, MomentError>> {
        self.combined.map(|m| m.centroid_with_tolerance(tolerance))
    }

    /// Number of paths that were measured successfully.
    pub fn measured(&self) -> usize {
        self.paths.iter().filter(|r| r.is_ok()).count()
    }
}

/// Measure every path and combine the successful ones.
///
/// Paths are independent, so the per-path integration runs in parallel
/// with rayon.
pub fn measure_batch(paths: &[BezPath], config: &MomentConfig) -> BatchReport {
    let results = paths
        .par_iter()
        .map(|path| compute_moments(path.elements(), config))
        .collect();
    BatchReport::from_results(results)
}
