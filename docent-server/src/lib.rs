//! # docent-server
//!
//! The HTTP front of the docent museum guide: wire types, shared state,
//! the per-request orchestrator, and the axum router. The binary in
//! `main.rs` wires configuration, corpus loading, and the Ollama clients
//! together and serves this router.

pub mod handlers;
pub mod orchestrator;
pub mod state;
pub mod wire;

pub use handlers::router;
pub use state::AppState;
