/// Corpus index subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus file read failed: {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("corpus file parse failed: {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}
