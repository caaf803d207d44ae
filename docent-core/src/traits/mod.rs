//! Seams between the pipeline and its external collaborators.

mod chat;
mod embedding;

pub use chat::IChatModel;
pub use embedding::IEmbeddingProvider;
