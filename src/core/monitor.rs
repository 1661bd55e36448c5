//! Monitor Agent: per-concept drift tracking over a stream of observations
//!
//! Pipeline for one observation:
//! 1. look up or seed the concept's HyperToken
//! 2. record the new position (first observation → duplicated start point)
//! 3. mass from centrality + trajectory stability
//! 4. ethos from source reliability/bias, through the circuit breaker
//! 5. force vector from logos/pathos/ethos force
//! 6. acceleration = ethos·|force| / mass
//! 7. fresh SpmSignal
//!
//! The position update is committed before the acceleration division, so a
//! ZeroMass failure still leaves the recorded movement in place.

use std::collections::HashMap;

use tracing::debug;

use crate::core::calculations::{ethos_coefficient, force_vector, semantic_acceleration};
use crate::core::trajectory::{estimate_mass, update_trajectory};
use crate::types::{
    Alert, AlertReason, HyperToken, MonitorConfig, Observation, SpmError, SpmResult, SpmSignal,
};
use crate::HIGH_FORCE_MAGNITUDE;

/// Tracks semantic acceleration for every observed concept
#[derive(Debug, Clone, Default)]
pub struct MonitorAgent {
    /// Concept name → token
    concepts: HashMap<String, HyperToken>,
    /// Weights and thresholds, fixed at construction
    config: MonitorConfig,
}

impl MonitorAgent {
    /// Create agent with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create agent with a validated configuration
    pub fn with_config(config: MonitorConfig) -> SpmResult<Self> {
        config.validate()?;
        Ok(Self {
            concepts: HashMap::new(),
            config,
        })
    }

    /// Ingest one observation and compute its signal
    pub fn process_observation(&mut self, obs: &Observation) -> SpmResult<SpmSignal> {
        validate_observation(obs)?;

        let token = self.concepts.entry(obs.concept.clone()).or_insert_with(|| {
            debug!(concept = %obs.concept, dim = obs.embedding.len(), "tracking new concept");
            HyperToken::new(obs.embedding.clone())
        });

        update_trajectory(token, &obs.embedding)?;

        let mass = estimate_mass(token, obs.centrality, self.config.alpha, self.config.beta)?;
        let ethos = ethos_coefficient(
            obs.source_reliability,
            obs.source_bias,
            self.config.ethos_threshold,
        );
        let force = force_vector(obs.logos, obs.pathos, obs.ethos_force);
        let acceleration = semantic_acceleration(force.magnitude(), mass, ethos)?;

        debug!(
            concept = %obs.concept,
            source = %obs.source,
            points = token.trajectory().len(),
            mass,
            ethos,
            force = force.magnitude(),
            acceleration,
            "observation processed"
        );

        Ok(SpmSignal::new(
            obs.concept.clone(),
            mass,
            force,
            acceleration,
            ethos,
            obs.source.clone(),
        ))
    }

    /// Evaluate alert thresholds, returning the structured alert
    pub fn evaluate_alert(&self, signal: &SpmSignal) -> Option<Alert> {
        let mut reasons = Vec::new();

        if signal.acceleration > self.config.acceleration_threshold {
            reasons.push(AlertReason::HighAcceleration {
                acceleration: signal.acceleration,
                threshold: self.config.acceleration_threshold,
            });
        }

        // High force from a circuit-broken source: manipulation attempt
        if signal.ethos < self.config.ethos_threshold
            && signal.force_vector.magnitude() > HIGH_FORCE_MAGNITUDE
        {
            reasons.push(AlertReason::LowEthosHighForce);
        }

        if reasons.is_empty() {
            return None;
        }

        let alert = Alert::new(signal.concept.clone(), reasons);
        debug!(concept = %alert.concept, codes = %alert.codes(), "alert raised");
        Some(alert)
    }

    /// Evaluate alert thresholds, returning the composed warning message
    pub fn check_alert(&self, signal: &SpmSignal) -> Option<String> {
        self.evaluate_alert(signal).map(|alert| alert.to_string())
    }

    /// Get configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// All tracked concepts
    pub fn concepts(&self) -> &HashMap<String, HyperToken> {
        &self.concepts
    }

    /// Token for one concept
    pub fn token(&self, concept: &str) -> Option<&HyperToken> {
        self.concepts.get(concept)
    }

    /// Seed a concept with a recorded token, replacing any existing one
    pub fn insert_token(
        &mut self,
        concept: impl Into<String>,
        token: HyperToken,
    ) -> Option<HyperToken> {
        self.concepts.insert(concept.into(), token)
    }

    /// Stop tracking a concept
    pub fn evict(&mut self, concept: &str) -> Option<HyperToken> {
        self.concepts.remove(concept)
    }

    /// Number of tracked concepts
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Reject observations that cannot seed or move a token, or whose scalars
/// would push NaN or negative values into the signal
fn validate_observation(obs: &Observation) -> SpmResult<()> {
    if obs.embedding.is_empty() {
        return Err(SpmError::InvalidInput("embedding must not be empty".to_string()));
    }
    if let Some(i) = obs.embedding.iter().position(|x| !x.is_finite()) {
        return Err(SpmError::InvalidInput(format!(
            "embedding component {i} is not finite"
        )));
    }

    let scalars = [
        ("logos", obs.logos),
        ("pathos", obs.pathos),
        ("ethos_force", obs.ethos_force),
        ("source_reliability", obs.source_reliability),
        ("source_bias", obs.source_bias),
        ("centrality", obs.centrality),
    ];
    if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
        return Err(SpmError::InvalidInput(format!("{name} is not finite: {value}")));
    }
    if obs.centrality < 0.0 {
        return Err(SpmError::InvalidInput(format!(
            "centrality must be >= 0, got {}",
            obs.centrality
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
