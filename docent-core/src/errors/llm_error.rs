/// Outbound LLM/embedding call errors.
///
/// These are soft failures per the degradation policy: callers map them to
/// the classifier fallback or the refusal string, never to a 5xx.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("transport failed: {reason}")]
    TransportFailed { reason: String },

    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("malformed reply: {reason}")]
    MalformedReply { reason: String },

    #[error("empty reply from model {model}")]
    EmptyReply { model: String },
}
