//! Room index construction.
//!
//! Aggregates room-level corpus records into one [`Room`] per scope_id,
//! injects the synthetic museum-info room, and fixes a deterministic sorted
//! identifier order used for index-aligned embedding lookups.

use std::collections::HashMap;

use docent_core::models::{truncate_chars, CorpusRecord, Room};
use tracing::{info, warn};

use crate::descriptions;
use crate::info_room;

/// Immutable table of all known rooms, in a stable sorted order.
#[derive(Debug, Clone)]
pub struct RoomIndex {
    /// Sorted room identifiers. Embedding matrices align with this order.
    ids: Vec<String>,
    rooms: HashMap<String, Room>,
}

/// Per-room accumulator used during aggregation.
#[derive(Default)]
struct RoomAccumulator {
    text_it: Vec<String>,
    text_en: Vec<String>,
    heading: Option<String>,
    url: Option<String>,
}

impl RoomIndex {
    /// Build the index from pre-ingested records.
    ///
    /// Only records with scope_type "room" participate. Text fragments are
    /// concatenated in encounter order; the first non-empty heading and URL
    /// per room win. Rooms whose records carry no text in either language
    /// are dropped. The synthetic info room is always present, so an empty
    /// corpus still yields a usable index.
    pub fn build(records: &[CorpusRecord]) -> Self {
        let mut accumulators: HashMap<String, RoomAccumulator> = HashMap::new();
        // Insertion order of room ids, so text aggregation stays
        // deterministic before the final sort.
        let mut seen: Vec<String> = Vec::new();

        for rec in records {
            if rec.scope_type != "room" {
                continue;
            }
            if rec.scope_id.is_empty() {
                warn!(chunk_id = %rec.chunk_id, "record without scope_id, skipping");
                continue;
            }

            let acc = accumulators.entry(rec.scope_id.clone()).or_insert_with(|| {
                seen.push(rec.scope_id.clone());
                RoomAccumulator::default()
            });

            let text_it = rec.text_it.trim();
            if !text_it.is_empty() {
                acc.text_it.push(text_it.to_string());
            }
            if let Some(text_en) = rec.text_en.as_deref() {
                let text_en = text_en.trim();
                if !text_en.is_empty() {
                    acc.text_en.push(text_en.to_string());
                }
            }

            if acc.heading.is_none() && !rec.heading.is_empty() {
                acc.heading = Some(rec.heading.clone());
            }
            if acc.url.is_none() && !rec.url.is_empty() {
                acc.url = Some(rec.url.clone());
            }
        }

        let mut rooms: HashMap<String, Room> = HashMap::new();
        for rid in &seen {
            let acc = &accumulators[rid];
            if acc.text_it.is_empty() && acc.text_en.is_empty() {
                warn!(room_id = %rid, "room has no text in either language, skipping");
                continue;
            }
            let heading = acc
                .heading
                .clone()
                .unwrap_or_else(|| format!("Room {rid}"));
            let text_it = acc.text_it.join(" ");
            let text_en = acc.text_en.join(" ");
            let descriptor = match descriptions::descriptor_for(rid) {
                Some(desc) => desc.to_string(),
                None => fallback_descriptor(&heading, &text_en, &text_it),
            };
            rooms.insert(
                rid.clone(),
                Room {
                    room_id: rid.clone(),
                    heading,
                    url: acc.url.clone().unwrap_or_default(),
                    text_it,
                    text_en,
                    descriptor,
                },
            );
        }

        // The synthetic info room is injected last and always exists,
        // with both language texts populated from static content.
        rooms.insert(
            info_room::INFO_ROOM_ID.to_string(),
            Room {
                room_id: info_room::INFO_ROOM_ID.to_string(),
                heading: info_room::INFO_HEADING.to_string(),
                url: String::new(),
                text_it: info_room::INFO_TEXT_IT.to_string(),
                text_en: info_room::INFO_TEXT_EN.to_string(),
                descriptor: info_room::INFO_DESCRIPTOR.to_string(),
            },
        );

        let mut ids: Vec<String> = rooms.keys().cloned().collect();
        ids.sort();

        info!(rooms = ids.len(), "room index built");
        Self { ids, rooms }
    }

    /// Sorted room identifiers. Index-aligned with any embedding matrix
    /// computed over [`RoomIndex::iter`].
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn contains(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    /// Rooms in sorted-identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.ids.iter().map(move |rid| &self.rooms[rid])
    }
}

/// Heading plus the leading characters of the best available text.
fn fallback_descriptor(heading: &str, text_en: &str, text_it: &str) -> String {
    let text = if text_en.is_empty() { text_it } else { text_en };
    let lead = truncate_chars(text.trim(), descriptions::FALLBACK_DESC_CHARS);
    format!("{heading}: {lead}")
}
