//! Shared application state.

use docent_core::config::RoutingConfig;
use docent_corpus::RoomIndex;
use docent_generation::Generator;
use docent_routing::{RoomEmbeddings, RoomSelector};

/// Everything a request handler needs, constructed once at startup and
/// shared behind an `Arc`. All fields are read-only after construction;
/// concurrent requests never take a lock.
pub struct AppState {
    pub index: RoomIndex,
    pub embeddings: RoomEmbeddings,
    pub selector: RoomSelector,
    pub generator: Generator,
    pub routing: RoutingConfig,
}
