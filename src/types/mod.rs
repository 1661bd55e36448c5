//! Core types for SPM Defense

mod error;
mod config;
mod token;
mod force;
mod signal;
mod observation;
mod alert;

pub use error::{SpmError, SpmResult};
pub use config::MonitorConfig;
pub use token::HyperToken;
pub use force::RhetoricalForceVector;
pub use signal::SpmSignal;
pub use observation::Observation;
pub use alert::{Alert, AlertReason};
