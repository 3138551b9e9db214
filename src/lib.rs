pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpTransport;
pub use config::resolve_client_config;
pub use core::client::{ServiceClient, SERVICES_PATH};
pub use domain::model::{ClientConfig, HealthStatus, ServiceListResponse, ServiceRecord};
pub use domain::ports::Transport;
pub use utils::error::{ClientError, Result};
