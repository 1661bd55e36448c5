//! HyperToken: a tracked concept's position and its history
//!
//! Plain data. Movement, stability and mass live in `core::trajectory`.

use crate::types::{SpmError, SpmResult};

/// A concept's position in semantic space plus every position it has held
#[derive(Debug, Clone, PartialEq)]
pub struct HyperToken {
    /// Current position
    pub(crate) embedding: Vec<f64>,
    /// Past positions, oldest first, append-only
    pub(crate) trajectory: Vec<Vec<f64>>,
    /// Last estimated semantic mass (cache)
    pub(crate) mass: f64,
}

impl HyperToken {
    /// Seed a token at `embedding` with no recorded movement
    pub fn new(embedding: Vec<f64>) -> Self {
        Self {
            embedding,
            trajectory: Vec::new(),
            mass: 0.0,
        }
    }

    /// Rebuild a token from a recorded history.
    ///
    /// The embedding becomes the last point. Every point must share the
    /// dimensionality of the first.
    pub fn from_trajectory(trajectory: Vec<Vec<f64>>) -> SpmResult<Self> {
        let expected = match trajectory.first() {
            Some(first) => first.len(),
            None => {
                return Err(SpmError::InvalidInput(
                    "trajectory must contain at least one point".to_string(),
                ))
            }
        };
        if let Some(bad) = trajectory.iter().find(|p| p.len() != expected) {
            return Err(SpmError::DimensionMismatch {
                expected,
                actual: bad.len(),
            });
        }

        let embedding = trajectory.last().cloned().unwrap_or_default();
        Ok(Self {
            embedding,
            trajectory,
            mass: 0.0,
        })
    }

    /// Current position
    pub fn embedding(&self) -> &[f64] {
        &self.embedding
    }

    /// Recorded positions, oldest first
    pub fn trajectory(&self) -> &[Vec<f64>] {
        &self.trajectory
    }

    /// Last estimated mass (0.0 before the first estimate)
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Dimensionality fixed by the seeding embedding
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
