//! # docent-corpus
//!
//! Builds the in-memory room index from pre-ingested corpus records:
//! per-room text aggregation, the synthetic museum-info room, and the short
//! descriptors the room classifier chooses between. The index is built once
//! at startup and is read-only afterwards.

pub mod descriptions;
pub mod index;
pub mod info_room;
pub mod loader;

pub use index::RoomIndex;
pub use info_room::INFO_ROOM_ID;
pub use loader::load_records;
