//! Per-request orchestration.
//!
//! The full pipeline for one question: empty-question short circuit,
//! language resolution, off-topic routing, room pinning or two-stage
//! selection, grounded generation, and citation assembly. Every path ends
//! in a well-formed response; upstream failures never surface to the
//! caller.

use docent_core::models::Citation;
use docent_core::Language;
use docent_corpus::INFO_ROOM_ID;
use docent_routing::{build_history_block, build_selection_text, detect_language, is_operational_query};
use tracing::{debug, info, warn};

use crate::state::AppState;
use crate::wire::{AskRequest, AskResponse};

/// Answer one visitor question end to end.
pub async fn answer_question(state: &AppState, req: &AskRequest) -> AskResponse {
    let question = req.q.trim();
    let lang = resolve_language(question, req.lang.as_deref());
    let lang_tag = response_tag(lang, req.lang.as_deref());

    if question.is_empty() {
        debug!("empty question, terminal response");
        return terminal(lang.empty_question_message(), lang_tag);
    }

    // Operational questions always go to the synthetic info room, ahead of
    // any caller pin.
    if is_operational_query(question) {
        info!(lang = lang.tag(), "operational question, routing to info room");
        return generate_for_room(state, INFO_ROOM_ID, question, lang, lang_tag, None).await;
    }

    let room_id = match pinned_room(state, req) {
        Pin::Valid(rid) => Some(rid),
        Pin::Unknown => {
            return terminal(lang.unresolved_room_message(), lang_tag);
        }
        Pin::None => {
            let selection_text =
                build_selection_text(question, &req.history, state.routing.history_max_turns);
            state
                .selector
                .select(&state.index, &state.embeddings, &selection_text, lang)
                .await
        }
    };

    let Some(room_id) = room_id else {
        info!("no room resolved, terminal response");
        return terminal(lang.unresolved_room_message(), lang_tag);
    };

    // The info room answers from static operational text only; visitor
    // history never feeds its prompt, however the room was reached
    // (regex, caller pin, or selection).
    let history_block = if room_id == INFO_ROOM_ID {
        None
    } else {
        let block = build_history_block(
            &req.history,
            state.routing.history_max_turns,
            state.routing.history_max_chars,
        );
        (!block.is_empty()).then_some(block)
    };

    generate_for_room(state, &room_id, question, lang, lang_tag, history_block.as_deref()).await
}

/// Resolve the answer language. Detection from the question text wins over
/// a disagreeing caller tag; for an empty question the tag is all there is.
fn resolve_language(question: &str, tag: Option<&str>) -> Language {
    let tagged = tag.and_then(Language::from_tag);
    if question.is_empty() {
        return tagged.unwrap_or_default();
    }
    let detected = detect_language(question);
    if let Some(tagged) = tagged {
        if tagged != detected {
            debug!(
                tag = tagged.tag(),
                detected = detected.tag(),
                "language tag disagrees with detection, using detected"
            );
        }
    }
    detected
}

/// Wire tag echoed in the response. The caller's raw tag (e.g. "en-GB")
/// comes back unchanged when it names the resolved language; otherwise the
/// canonical tag of the resolved language is used.
fn response_tag(lang: Language, raw_tag: Option<&str>) -> String {
    match raw_tag {
        Some(raw) if Language::from_tag(raw) == Some(lang) => raw.to_string(),
        _ => lang.tag().to_string(),
    }
}

enum Pin {
    Valid(String),
    Unknown,
    None,
}

/// Validate a caller-supplied room pin against the known room set.
fn pinned_room(state: &AppState, req: &AskRequest) -> Pin {
    match req.room_id.as_deref().map(str::trim) {
        Some(rid) if rid.is_empty() => Pin::None,
        Some(rid) if state.index.contains(rid) => {
            info!(room_id = %rid, "caller pinned room");
            Pin::Valid(rid.to_string())
        }
        Some(rid) => {
            warn!(room_id = %rid, "caller pinned unknown room, rejecting");
            Pin::Unknown
        }
        None => Pin::None,
    }
}

async fn generate_for_room(
    state: &AppState,
    room_id: &str,
    question: &str,
    lang: Language,
    lang_tag: String,
    history_block: Option<&str>,
) -> AskResponse {
    // Selection and pinning only ever yield known identifiers, and the
    // index is immutable, so a missing room here is a bug upstream.
    let Some(room) = state.index.get(room_id) else {
        warn!(room_id = %room_id, "resolved room missing from index");
        return terminal(lang.unresolved_room_message(), lang_tag);
    };

    let answer = state
        .generator
        .answer(room.context_text(lang), question, lang, history_block)
        .await;

    let citations = if room.url.is_empty() {
        Vec::new()
    } else {
        vec![Citation {
            url: room.url.clone(),
            heading: room.heading.clone(),
            score: 1.0,
        }]
    };

    info!(room_id = %room.room_id, lang = lang.tag(), "answered");
    AskResponse {
        answer,
        citations,
        lang: lang_tag,
    }
}

fn terminal(message: &str, lang_tag: String) -> AskResponse {
    AskResponse {
        answer: message.to_string(),
        citations: Vec::new(),
        lang: lang_tag,
    }
}
