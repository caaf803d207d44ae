//! # docent-routing
//!
//! Decides which room a visitor question belongs to. Four pieces, applied
//! in order by the orchestrator:
//!
//! 1. language detection (cheap heuristics),
//! 2. off-topic routing (operational questions go straight to the
//!    synthetic info room),
//! 3. history fusion (follow-ups resolve to the same room as their
//!    antecedent),
//! 4. the two-stage room selector (generative classifier, then embedding
//!    similarity with a rejection threshold).

pub mod detector;
pub mod history;
pub mod offtopic;
pub mod selector;

pub use detector::detect_language;
pub use history::{build_history_block, build_selection_text};
pub use offtopic::is_operational_query;
pub use selector::{ClassifierReply, RoomEmbeddings, RoomSelector};
