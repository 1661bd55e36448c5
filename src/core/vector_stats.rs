//! Vector statistics over point sequences

use crate::types::{SpmError, SpmResult};

/// Component-wise mean of `points`.
///
/// Fails on an empty sequence or mismatched lengths.
pub fn centroid(points: &[Vec<f64>]) -> SpmResult<Vec<f64>> {
    let first = points.first().ok_or_else(|| {
        SpmError::InvalidInput("centroid of an empty point sequence".to_string())
    })?;
    let dim = first.len();

    let mut sum = vec![0.0; dim];
    for point in points {
        if point.len() != dim {
            return Err(SpmError::InvalidInput(format!(
                "point of length {} in a sequence of length-{dim} points",
                point.len()
            )));
        }
        for (acc, x) in sum.iter_mut().zip(point) {
            *acc += x;
        }
    }

    let n = points.len() as f64;
    Ok(sum.into_iter().map(|s| s / n).collect())
}

/// Mean squared Euclidean distance of `points` from `center`
pub fn mean_squared_distance(points: &[Vec<f64>], center: &[f64]) -> SpmResult<f64> {
    if points.is_empty() {
        return Err(SpmError::InvalidInput(
            "mean squared distance of an empty point sequence".to_string(),
        ));
    }

    let mut total = 0.0;
    for point in points {
        total += squared_distance(point, center)?;
    }
    Ok(total / points.len() as f64)
}

/// Squared Euclidean distance between two points of equal length
pub fn squared_distance(a: &[f64], b: &[f64]) -> SpmResult<f64> {
    if a.len() != b.len() {
        return Err(SpmError::InvalidInput(format!(
            "cannot measure distance between lengths {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum())
}
