//! # docent-llm
//!
//! HTTP clients for the local Ollama instance: one chat client used for
//! classification, generation and the critic pass, and one embedding client
//! shared by room and query encoding. Both degrade to soft errors that the
//! pipeline maps to its fallback policies.

pub mod embedder;
pub mod ollama;

pub use embedder::OllamaEmbedder;
pub use ollama::OllamaChat;
