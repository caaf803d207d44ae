//! Room index construction tests.

use docent_core::models::CorpusRecord;
use docent_corpus::{load_records, RoomIndex, INFO_ROOM_ID};

fn record(chunk_id: &str, scope_id: &str, heading: &str, url: &str, text_it: &str) -> CorpusRecord {
    CorpusRecord {
        chunk_id: chunk_id.to_string(),
        scope_type: "room".to_string(),
        scope_id: scope_id.to_string(),
        url: url.to_string(),
        heading: heading.to_string(),
        text_it: text_it.to_string(),
        text_en: None,
    }
}

#[test]
fn aggregates_records_in_encounter_order() {
    let records = vec![
        record("c1", "GDA-Sala-5", "Il tholos", "https://example.it/sala5", "prima parte."),
        record("c2", "GDA-Sala-5", "", "", "seconda parte."),
    ];
    let index = RoomIndex::build(&records);
    let room = index.get("GDA-Sala-5").expect("room exists");
    assert_eq!(room.text_it, "prima parte. seconda parte.");
    assert_eq!(room.heading, "Il tholos");
    assert_eq!(room.url, "https://example.it/sala5");
}

#[test]
fn first_nonempty_heading_and_url_win() {
    let records = vec![
        record("c1", "GDA-Sala-7", "", "", "uno."),
        record("c2", "GDA-Sala-7", "Il grano", "https://example.it/a", "due."),
        record("c3", "GDA-Sala-7", "Altro titolo", "https://example.it/b", "tre."),
    ];
    let index = RoomIndex::build(&records);
    let room = index.get("GDA-Sala-7").expect("room exists");
    assert_eq!(room.heading, "Il grano");
    assert_eq!(room.url, "https://example.it/a");
}

#[test]
fn non_room_records_are_ignored() {
    let mut rec = record("c1", "GDA-Oggetto-1", "Un vaso", "", "testo.");
    rec.scope_type = "object".to_string();
    let index = RoomIndex::build(&[rec]);
    assert!(!index.contains("GDA-Oggetto-1"));
}

#[test]
fn info_room_always_exists_with_both_languages() {
    let index = RoomIndex::build(&[]);
    assert_eq!(index.len(), 1);
    let info = index.get(INFO_ROOM_ID).expect("synthetic room");
    assert!(!info.text_it.is_empty());
    assert!(!info.text_en.is_empty());
    assert!(info.text_it.contains("BIGLIETTI"));
    assert!(info.text_en.contains("TICKETS"));
    assert!(info.url.is_empty());
}

#[test]
fn ids_are_sorted_and_unique() {
    let records = vec![
        record("c1", "GDA-Sala-9", "Vino", "", "a."),
        record("c2", "GDA-Sala-1", "Preistoria", "", "b."),
        record("c3", "GDA-Sala-9", "", "", "c."),
    ];
    let index = RoomIndex::build(&records);
    let ids: Vec<&str> = index.ids().iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["GDA-Info-Museo", "GDA-Sala-1", "GDA-Sala-9"]);
    // iter() follows the same order.
    let iter_ids: Vec<&str> = index.iter().map(|r| r.room_id.as_str()).collect();
    assert_eq!(iter_ids, ids);
}

#[test]
fn textless_rooms_are_not_materialized() {
    let records = vec![
        record("c1", "GDA-Sala-Vuota", "Sala vuota", "https://example.it/vuota", "   "),
        record("c2", "GDA-Sala-2", "Grotte", "", "culto delle grotte."),
    ];
    let index = RoomIndex::build(&records);
    assert!(!index.contains("GDA-Sala-Vuota"));
    assert!(index.contains("GDA-Sala-2"));
    // A room with only English text still materializes.
    let mut rec = record("c3", "GDA-Sala-EN", "English only", "", "");
    rec.text_en = Some("english text only.".to_string());
    let index = RoomIndex::build(&[rec]);
    let room = index.get("GDA-Sala-EN").expect("room exists");
    assert!(room.text_it.is_empty());
    assert_eq!(room.text_en, "english text only.");
}

#[test]
fn every_corpus_room_has_nonempty_primary_text() {
    let records = vec![
        record("c1", "GDA-Sala-4", "Pastori", "", "abbigliamento dei pastori."),
        record("c2", "GDA-Sala-13", "Maiolica", "", "ceramica abruzzese."),
    ];
    let index = RoomIndex::build(&records);
    for room in index.iter() {
        assert!(!room.text_it.is_empty(), "room {} has empty text_it", room.room_id);
        assert!(!room.descriptor.is_empty());
    }
}

#[test]
fn curated_descriptor_used_when_available() {
    let records = vec![record("c1", "GDA-Sala-6", "La capanna", "", "interno.")];
    let index = RoomIndex::build(&records);
    let room = index.get("GDA-Sala-6").expect("room exists");
    assert!(room.descriptor.contains("tholos"));
    // Unknown room falls back to heading + leading text.
    let records = vec![record("c1", "GDA-Sala-X", "Nuova sala", "", "contenuto nuovo.")];
    let index = RoomIndex::build(&records);
    let room = index.get("GDA-Sala-X").expect("room exists");
    assert!(room.descriptor.starts_with("Nuova sala: contenuto nuovo."));
}

#[test]
fn loads_records_from_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"{"records": [
            {"chunk_id": "c1", "scope_id": "GDA-Sala-1", "heading": "Preistoria",
             "url": "https://example.it/sala1", "text_it": "testo", "text_en": "text"}
        ]}"#,
    )
    .expect("write corpus");
    let records = load_records(&path).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].scope_type, "room");
    assert_eq!(records[0].text_en.as_deref(), Some("text"));

    let missing = load_records(&dir.path().join("nope.json"));
    assert!(missing.is_err());
}
