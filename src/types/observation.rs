//! Observation: one already-scored piece of content about a concept

use serde::{Deserialize, Serialize};

use crate::DEFAULT_CENTRALITY;

fn default_centrality() -> f64 {
    DEFAULT_CENTRALITY
}

/// Input of `MonitorAgent::process_observation`.
///
/// Logos, pathos, ethos force, reliability and bias arrive precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Concept being observed
    pub concept: String,
    /// Semantic position of the content
    pub embedding: Vec<f64>,
    /// Logical force component
    pub logos: f64,
    /// Emotional force component
    pub pathos: f64,
    /// Authority signal carried in the content
    pub ethos_force: f64,
    /// Source identifier
    pub source: String,
    /// Historical reliability of the source
    pub source_reliability: f64,
    /// Detected bias penalty of the source
    pub source_bias: f64,
    /// Network centrality of the concept (default 1.0)
    #[serde(default = "default_centrality")]
    pub centrality: f64,
}

impl Observation {
    /// Observation with zero force from an anonymous, neutral source
    pub fn new(concept: impl Into<String>, embedding: Vec<f64>) -> Self {
        Self {
            concept: concept.into(),
            embedding,
            logos: 0.0,
            pathos: 0.0,
            ethos_force: 0.0,
            source: String::new(),
            source_reliability: 0.0,
            source_bias: 0.0,
            centrality: DEFAULT_CENTRALITY,
        }
    }

    pub fn with_force(mut self, logos: f64, pathos: f64, ethos_force: f64) -> Self {
        self.logos = logos;
        self.pathos = pathos;
        self.ethos_force = ethos_force;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>, reliability: f64, bias: f64) -> Self {
        self.source = source.into();
        self.source_reliability = reliability;
        self.source_bias = bias;
        self
    }

    pub fn with_centrality(mut self, centrality: f64) -> Self {
        self.centrality = centrality;
        self
    }
}
