//! # docent-core
//!
//! Foundation crate for the docent museum guide.
//! Defines the shared types, traits, errors, config, and language tables.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod language;
pub mod models;
pub mod traits;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use config::DocentConfig;
pub use errors::{DocentError, DocentResult};
pub use language::Language;
pub use models::{Citation, CorpusRecord, Role, Room, Turn};
