pub mod profile_api_client;
pub mod profile_api_config;

pub use profile_api_client::ProfileApiClient;
pub use profile_api_config::{ConfigError, ProfileApiConfig};
