/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed: {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("config parse failed: {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}
