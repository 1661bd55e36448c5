//! Rhetorical force vector

use serde::{Deserialize, Serialize};

/// Three-axis rhetorical force (Fr)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhetoricalForceVector {
    /// Logical force
    pub logos: f64,
    /// Emotional force
    pub pathos: f64,
    /// Authority signal carried in the content
    #[serde(rename = "ethos")]
    pub ethos_component: f64,
}

impl RhetoricalForceVector {
    pub fn new(logos: f64, pathos: f64, ethos_component: f64) -> Self {
        Self {
            logos,
            pathos,
            ethos_component,
        }
    }

    /// Euclidean norm |Fr|
    pub fn magnitude(&self) -> f64 {
        (self.logos * self.logos
            + self.pathos * self.pathos
            + self.ethos_component * self.ethos_component)
            .sqrt()
    }
}
