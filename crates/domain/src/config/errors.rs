#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// Zone data that cannot be served: relative names, duplicates, or an
    /// empty nameserver list.
    #[error("Invalid zone configuration: {0}")]
    InvalidZone(String),
}
