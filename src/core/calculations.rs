//! Force model: mass proxy, rhetorical force, ethos and acceleration
//!
//! |As| = η·|Fr| / Ms
//!
//! η passes through a circuit breaker: below the threshold it is exactly 0.0,
//! so a low-trust source moves nothing however hard it pushes.

use tracing::debug;

use crate::types::{RhetoricalForceVector, SpmError, SpmResult};

/// Standard logistic function
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Semantic mass Ms = α·centrality + β·stability
pub fn semantic_mass_proxy(centrality: f64, stability: f64, alpha: f64, beta: f64) -> f64 {
    alpha * centrality + beta * stability
}

/// Build the three-axis force vector
pub fn force_vector(logos: f64, pathos: f64, ethos_force: f64) -> RhetoricalForceVector {
    RhetoricalForceVector::new(logos, pathos, ethos_force)
}

/// Scalar force |Fr| = |V(I)| · (1 + λ_emotional) · (1 + λ_repetition)
///
/// For callers that only have an embedding magnitude plus sentiment and
/// repetition amplifiers instead of a logos/pathos/ethos breakdown.
pub fn rhetorical_force_magnitude(
    embedding_magnitude: f64,
    sentiment_intensity: f64,
    repetition_frequency: f64,
) -> f64 {
    embedding_magnitude * (1.0 + sentiment_intensity) * (1.0 + repetition_frequency)
}

/// Ethos coefficient η = sigmoid(reliability − bias), with circuit breaker.
///
/// η < threshold returns exactly 0.0; η == threshold passes unchanged.
/// A NaN η (from NaN reliability or bias) fails closed to 0.0.
pub fn ethos_coefficient(reliability_history: f64, bias_penalty: f64, threshold: f64) -> f64 {
    let eta = sigmoid(reliability_history - bias_penalty);
    if eta.is_nan() || eta < threshold {
        debug!(eta, threshold, "ethos circuit breaker tripped");
        return 0.0;
    }
    eta
}

/// Semantic acceleration |As| = ethos·|Fr| / mass.
///
/// Only exactly-zero mass is rejected; tiny masses give huge accelerations.
pub fn semantic_acceleration(force_magnitude: f64, mass: f64, ethos: f64) -> SpmResult<f64> {
    if mass == 0.0 {
        return Err(SpmError::ZeroMass);
    }
    Ok((ethos * force_magnitude) / mass)
}

// =============================================================================
// TESTS
// =============================================================================
