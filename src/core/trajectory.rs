//! Trajectory mechanics: movement, stability and mass of a HyperToken
//!
//! Stability is inverse spatial variance of the recorded positions:
//! - 0 or 1 points → MAX_STABILITY (no observed movement)
//! - otherwise → 1 / (mean squared distance from centroid + ε)
//!
//! Scattered trajectories lose stability, and with it mass.

use tracing::trace;

use crate::core::calculations::semantic_mass_proxy;
use crate::core::vector_stats::{centroid, mean_squared_distance};
use crate::types::{HyperToken, SpmError, SpmResult};
use crate::{MAX_STABILITY, STABILITY_EPSILON};

/// Move `token` to `new_position`.
///
/// An empty trajectory first records the current embedding as the starting
/// point, so the first movement yields two points. The token is untouched
/// when the dimensionality does not match.
pub fn update_trajectory(token: &mut HyperToken, new_position: &[f64]) -> SpmResult<()> {
    let expected = token.dimension();
    if new_position.len() != expected {
        return Err(SpmError::DimensionMismatch {
            expected,
            actual: new_position.len(),
        });
    }

    if token.trajectory.is_empty() {
        token.trajectory.push(token.embedding.clone());
    }
    token.trajectory.push(new_position.to_vec());
    token.embedding = new_position.to_vec();
    Ok(())
}

/// Spatial variance of the trajectory around its centroid.
///
/// Zero for fewer than two points.
pub fn spatial_variance(token: &HyperToken) -> SpmResult<f64> {
    if token.trajectory.len() < 2 {
        return Ok(0.0);
    }
    let center = centroid(&token.trajectory)?;
    mean_squared_distance(&token.trajectory, &center)
}

/// Inverse-variance stability of the token's trajectory
pub fn calculate_stability(token: &HyperToken) -> SpmResult<f64> {
    if token.trajectory.len() < 2 {
        return Ok(MAX_STABILITY);
    }
    let variance = spatial_variance(token)?;
    let stability = 1.0 / (variance + STABILITY_EPSILON);
    trace!(points = token.trajectory.len(), variance, stability, "stability");
    Ok(stability)
}

/// Estimate and cache mass = α·centrality + β·stability
pub fn estimate_mass(
    token: &mut HyperToken,
    centrality: f64,
    alpha: f64,
    beta: f64,
) -> SpmResult<f64> {
    let stability = calculate_stability(token)?;
    let mass = semantic_mass_proxy(centrality, stability, alpha, beta);
    token.mass = mass;
    Ok(mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_ALPHA, DEFAULT_BETA};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_trajectory_records_start() {
        let mut token = HyperToken::new(vec![0.0, 0.0]);

        update_trajectory(&mut token, &[1.0, 0.0]).unwrap();
        assert_eq!(token.trajectory(), &[vec![0.0, 0.0], vec![1.0, 0.0]]);
        assert_eq!(token.embedding(), &[1.0, 0.0]);

        update_trajectory(&mut token, &[1.0, 1.0]).unwrap();
        assert_eq!(token.trajectory().len(), 3);
        assert_eq!(token.trajectory()[2], vec![1.0, 1.0]);
        assert_eq!(token.embedding(), &[1.0, 1.0]);
    }

    #[test]
    fn test_embedding_tracks_last_point() {
        let mut token = HyperToken::new(vec![0.0]);
        for x in [3.0, -2.0, 7.5] {
            update_trajectory(&mut token, &[x]).unwrap();
            assert_eq!(token.trajectory().last().unwrap().as_slice(), token.embedding());
        }
    }

    #[test]
    fn test_update_trajectory_dimension_mismatch_leaves_token() {
        let mut token = HyperToken::new(vec![0.0, 0.0]);
        let before = token.clone();

        let err = update_trajectory(&mut token, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SpmError::DimensionMismatch { expected: 2, actual: 3 }));
        assert_eq!(token, before);
    }

    #[test]
    fn test_stability_no_movement() {
        let mut token = HyperToken::new(vec![0.0, 0.0]);
        assert_eq!(calculate_stability(&token).unwrap(), MAX_STABILITY);

        update_trajectory(&mut token, &[0.0, 0.0]).unwrap();
        assert_eq!(calculate_stability(&token).unwrap(), MAX_STABILITY);
    }

    #[test]
    fn test_stability_single_recorded_point() {
        let token = HyperToken::from_trajectory(vec![vec![5.0, 5.0]]).unwrap();
        assert_eq!(calculate_stability(&token).unwrap(), MAX_STABILITY);
    }

    #[test]
    fn test_stability_two_points() {
        // (0,0), (2,0): centroid (1,0), variance 1
        let mut token = HyperToken::new(vec![0.0, 0.0]);
        update_trajectory(&mut token, &[2.0, 0.0]).unwrap();

        assert!((spatial_variance(&token).unwrap() - 1.0).abs() < 1e-12);
        assert!((calculate_stability(&token).unwrap() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_stability_drops_with_dispersion() {
        let mut tight = HyperToken::new(vec![0.0, 0.0]);
        let mut loose = HyperToken::new(vec![0.0, 0.0]);
        for step in [1.0, -1.0, 2.0] {
            update_trajectory(&mut tight, &[step, 0.0]).unwrap();
            update_trajectory(&mut loose, &[step * 10.0, 0.0]).unwrap();
        }
        assert!(calculate_stability(&loose).unwrap() < calculate_stability(&tight).unwrap());
    }

    #[test]
    fn test_estimate_mass_caches() {
        let mut token = HyperToken::new(vec![0.0, 0.0]);
        update_trajectory(&mut token, &[2.0, 0.0]).unwrap();

        // 1*10 + 1*~1
        let mass = estimate_mass(&mut token, 10.0, DEFAULT_ALPHA, DEFAULT_BETA).unwrap();
        assert!((mass - 11.0).abs() < 1e-4);
        assert_eq!(token.mass(), mass);
    }

    #[test]
    fn test_estimate_mass_weights() {
        let mut token = HyperToken::new(vec![0.0, 0.0]);
        update_trajectory(&mut token, &[2.0, 0.0]).unwrap();

        let mass = estimate_mass(&mut token, 10.0, 0.5, 2.0).unwrap();
        assert!((mass - 7.0).abs() < 1e-4);
    }
}
