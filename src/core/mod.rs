//! Core modules for SPM Defense

pub mod vector_stats;
pub mod trajectory;
pub mod calculations;
pub mod monitor;

pub use vector_stats::{centroid, mean_squared_distance};
pub use trajectory::{update_trajectory, calculate_stability, estimate_mass, spatial_variance};
pub use calculations::{
    sigmoid, semantic_mass_proxy, force_vector, rhetorical_force_magnitude,
    ethos_coefficient, semantic_acceleration,
};
pub use monitor::MonitorAgent;
