//! SPM signal: one observation's mass, force, ethos and acceleration

use serde::{Deserialize, Serialize};

use crate::types::{RhetoricalForceVector, SpmResult};

/// Immutable per-observation record.
///
/// Serializes to the canonical wire form:
/// `{concept, mass, force_vector{logos,pathos,ethos}, acceleration, ethos, source}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpmSignal {
    /// Concept being monitored
    pub concept: String,
    /// Semantic mass (Ms) at the time of the observation
    pub mass: f64,
    /// Rhetorical force (Fr) of the observation
    pub force_vector: RhetoricalForceVector,
    /// Semantic acceleration |As|, >= 0
    pub acceleration: f64,
    /// Ethos coefficient (η) of the source, in [0, 1]
    pub ethos: f64,
    /// Source identifier
    pub source: String,
}

impl SpmSignal {
    pub fn new(
        concept: impl Into<String>,
        mass: f64,
        force_vector: RhetoricalForceVector,
        acceleration: f64,
        ethos: f64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            concept: concept.into(),
            mass,
            force_vector,
            acceleration,
            ethos,
            source: source.into(),
        }
    }

    /// Canonical nested form
    pub fn to_canonical_form(&self) -> serde_json::Value {
        serde_json::json!({
            "concept": self.concept,
            "mass": self.mass,
            "force_vector": {
                "logos": self.force_vector.logos,
                "pathos": self.force_vector.pathos,
                "ethos": self.force_vector.ethos_component,
            },
            "acceleration": self.acceleration,
            "ethos": self.ethos,
            "source": self.source,
        })
    }

    /// Canonical form as compact JSON
    pub fn to_json(&self) -> SpmResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the canonical form
    pub fn from_json(json: &str) -> SpmResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "concept={} | mass={:.4} | force={:.3} | ethos={:.3} | accel={:.4} | source={}",
            self.concept,
            self.mass,
            self.force_vector.magnitude(),
            self.ethos,
            self.acceleration,
            self.source
        )
    }
}
