pub mod client;

pub use crate::domain::model::{ClientConfig, HealthStatus, ServiceListResponse, ServiceRecord};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
