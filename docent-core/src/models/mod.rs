//! Shared data model: corpus records, rooms, conversation turns, citations.

mod citation;
mod record;
mod room;
mod turn;

pub use citation::Citation;
pub use record::CorpusRecord;
pub use room::{truncate_chars, Room};
pub use turn::{Role, Turn};
