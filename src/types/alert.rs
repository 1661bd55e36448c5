//! Alert reasons and composed alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a signal raised an alert
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum AlertReason {
    /// Acceleration exceeded the configured threshold
    #[serde(rename = "A001_HIGH_ACCELERATION")]
    HighAcceleration { acceleration: f64, threshold: f64 },
    /// Circuit-broken source pushing a large force (manipulation attempt)
    #[serde(rename = "A002_LOW_ETHOS_HIGH_FORCE")]
    LowEthosHighForce,
}

impl AlertReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::HighAcceleration { .. } => "A001_HIGH_ACCELERATION",
            Self::LowEthosHighForce => "A002_LOW_ETHOS_HIGH_FORCE",
        }
    }
}

impl std::fmt::Display for AlertReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // threshold keeps its decimal point: 10 prints as "10.0"
            Self::HighAcceleration { acceleration, threshold } => {
                write!(f, "High Acceleration ({:.2} > {:?})", acceleration, threshold)
            }
            Self::LowEthosHighForce => write!(f, "Low Ethos Source attempting High Force"),
        }
    }
}

/// An alert raised for one signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Concept the signal was about
    pub concept: String,
    /// Reasons, in evaluation order; never empty
    pub reasons: Vec<AlertReason>,
    /// When the alert was evaluated
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(concept: impl Into<String>, reasons: Vec<AlertReason>) -> Self {
        Self {
            concept: concept.into(),
            reasons,
            raised_at: Utc::now(),
        }
    }

    /// Reason codes joined with ',' (for logging)
    pub fn codes(&self) -> String {
        self.reasons
            .iter()
            .map(AlertReason::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reasons = self
            .reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "ALERT [{}]: {}", self.concept, reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_high_acceleration_format() {
        let reason = AlertReason::HighAcceleration {
            acceleration: 12.3456,
            threshold: 10.0,
        };
        assert_eq!(reason.to_string(), "High Acceleration (12.35 > 10.0)");
    }

    #[test]
    fn test_composed_message() {
        let alert = Alert::new(
            "Democracy",
            vec![
                AlertReason::HighAcceleration {
                    acceleration: 20.0,
                    threshold: 5.5,
                },
                AlertReason::LowEthosHighForce,
            ],
        );
        assert_eq!(
            alert.to_string(),
            "ALERT [Democracy]: High Acceleration (20.00 > 5.5); Low Ethos Source attempting High Force"
        );
        assert_eq!(alert.codes(), "A001_HIGH_ACCELERATION,A002_LOW_ETHOS_HIGH_FORCE");
    }

    #[test]
    fn test_reason_serializes_with_code() {
        let json = serde_json::to_string(&AlertReason::LowEthosHighForce).unwrap();
        assert_eq!(json, r#"{"code":"A002_LOW_ETHOS_HIGH_FORCE"}"#);
    }
}
