//! SPM Defense: Semantic Physics Model for concept drift
//!
//! Concepts carry mass, arguments exert rhetorical force, and a source's
//! ethos coefficient gates how much of that force is allowed to act.
//!
//! Pipeline: Observation → MonitorAgent → HyperToken + force model → SpmSignal → alert

pub mod core;
pub mod types;

// =============================================================================
// MASS WEIGHTS
// =============================================================================

/// Weight of network centrality in semantic mass (α)
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Weight of trajectory stability in semantic mass (β)
pub const DEFAULT_BETA: f64 = 1.0;

/// Centrality assumed when an observation does not carry one
pub const DEFAULT_CENTRALITY: f64 = 1.0;

// =============================================================================
// STABILITY
// =============================================================================

/// Variance floor, keeps 1/variance finite
pub const STABILITY_EPSILON: f64 = 1e-6;

/// Stability of a token with no observed movement (1/ε)
pub const MAX_STABILITY: f64 = 1.0 / STABILITY_EPSILON;

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Acceleration above this raises an alert
pub const DEFAULT_ACCELERATION_THRESHOLD: f64 = 10.0;

/// Ethos below this trips the circuit breaker (strict less-than)
pub const DEFAULT_ETHOS_THRESHOLD: f64 = 0.3;

/// Force magnitude considered "high" for low-ethos alerts
pub const HIGH_FORCE_MAGNITUDE: f64 = 5.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.3.0";
