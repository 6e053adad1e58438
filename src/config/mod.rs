mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV_VARS};
pub use loader::{ConfigError, MAX_PHILOSOPHER_COUNT};
pub use types::{Config, ContentConfig, ImageConfig, ServiceConfig};
