//! Room selector integration tests with mock collaborators.

use std::sync::Arc;

use docent_core::errors::{DocentResult, LlmError};
use docent_core::models::CorpusRecord;
use docent_core::traits::{IChatModel, IEmbeddingProvider};
use docent_core::Language;
use docent_corpus::{RoomIndex, INFO_ROOM_ID};
use docent_routing::{ClassifierReply, RoomEmbeddings, RoomSelector};

// ---------------------------------------------------------------------------
// Mocks
// ---------------------------------------------------------------------------

/// Chat model with a canned reply, or a transport failure when `None`.
struct MockChat {
    reply: Option<String>,
}

#[async_trait::async_trait]
impl IChatModel for MockChat {
    async fn chat(
        &self,
        _model: &str,
        _system_prompt: &str,
        _user_msg: &str,
        _temperature: f32,
    ) -> DocentResult<String> {
        match &self.reply {
            Some(r) => Ok(r.clone()),
            None => Err(LlmError::TransportFailed {
                reason: "connection refused".to_string(),
            }
            .into()),
        }
    }
}

/// Embedder returning one fixed vector for every single-text query.
struct MockEmbedder {
    query_vector: Vec<f32>,
}

#[async_trait::async_trait]
impl IEmbeddingProvider for MockEmbedder {
    async fn embed(&self, _text: &str) -> DocentResult<Vec<f32>> {
        Ok(self.query_vector.clone())
    }

    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| self.query_vector.clone()).collect())
    }

    fn name(&self) -> &str {
        "mock-embedder"
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn record(scope_id: &str, heading: &str, text_it: &str) -> CorpusRecord {
    CorpusRecord {
        chunk_id: format!("{scope_id}-c1"),
        scope_type: "room".to_string(),
        scope_id: scope_id.to_string(),
        url: String::new(),
        heading: heading.to_string(),
        text_it: text_it.to_string(),
        text_en: None,
    }
}

/// Index with three rooms plus the synthetic info room.
/// Sorted order: GDA-Info-Museo, GDA-Sala-4, GDA-Sala-5, GDA-Sala-6.
fn test_index() -> RoomIndex {
    RoomIndex::build(&[
        record("GDA-Sala-4", "Abbigliamento dei pastori", "vesti e attrezzi."),
        record("GDA-Sala-5", "Le capanne a tholos", "capanne in pietra a secco."),
        record("GDA-Sala-6", "Dentro la capanna", "ricostruzione a grandezza naturale."),
    ])
}

fn selector(chat: MockChat, embedder: MockEmbedder, min_similarity: f32) -> RoomSelector {
    RoomSelector::new(Arc::new(chat), Arc::new(embedder), "test-model", min_similarity)
}

/// One orthonormal basis vector per room, aligned with sorted room order.
fn basis_embeddings(n: usize) -> RoomEmbeddings {
    let vectors = (0..n)
        .map(|i| {
            let mut v = vec![0.0; n];
            v[i] = 1.0;
            v
        })
        .collect();
    RoomEmbeddings::from_vectors(vectors)
}

fn unit(idx: usize, n: usize, scale: f32) -> Vec<f32> {
    let mut v = vec![0.0; n];
    v[idx] = scale;
    v
}

// ---------------------------------------------------------------------------
// Classifier stage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn classifier_json_reply_wins() {
    let index = test_index();
    let sel = selector(
        MockChat {
            reply: Some(r#"{"room_id": "GDA-Sala-5"}"#.to_string()),
        },
        // Embeddings would point elsewhere; classifier takes priority.
        MockEmbedder {
            query_vector: unit(3, 4, 1.0),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "le capanne di pietra", Language::Italian)
        .await;
    assert_eq!(chosen.as_deref(), Some("GDA-Sala-5"));
}

#[tokio::test]
async fn classifier_substring_fallback_parses() {
    let index = test_index();
    let sel = selector(
        MockChat {
            reply: Some("The best room is GDA-Sala-6, of course.".to_string()),
        },
        MockEmbedder {
            query_vector: unit(0, 4, 1.0),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "inside the hut", Language::English)
        .await;
    assert_eq!(chosen.as_deref(), Some("GDA-Sala-6"));
}

#[tokio::test]
async fn unknown_identifier_falls_back_to_embeddings() {
    let index = test_index();
    // Sorted index: [Info-Museo, Sala-4, Sala-5, Sala-6]; query points to Sala-5.
    let sel = selector(
        MockChat {
            reply: Some(r#"{"room_id": "GDA-Sala-99"}"#.to_string()),
        },
        MockEmbedder {
            query_vector: unit(2, 4, 1.0),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "tholos walls", Language::English)
        .await;
    assert_eq!(chosen.as_deref(), Some("GDA-Sala-5"));
}

#[tokio::test]
async fn transport_failure_falls_back_to_embeddings() {
    let index = test_index();
    let sel = selector(
        MockChat { reply: None },
        MockEmbedder {
            query_vector: unit(1, 4, 1.0),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "vesti dei pastori", Language::Italian)
        .await;
    assert_eq!(chosen.as_deref(), Some("GDA-Sala-4"));
}

// ---------------------------------------------------------------------------
// Embedding stage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn below_threshold_abstains() {
    let index = test_index();
    // Best similarity is 0.3, threshold 0.4: abstain, never guess.
    let sel = selector(
        MockChat { reply: None },
        MockEmbedder {
            query_vector: unit(2, 4, 0.3),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "qualcosa di vago", Language::Italian)
        .await;
    assert_eq!(chosen, None);
}

#[tokio::test]
async fn similarity_tie_resolves_to_first_sorted_room() {
    let index = test_index();
    // Equal similarity against every room.
    let n = 4;
    let sel = selector(
        MockChat { reply: None },
        MockEmbedder {
            query_vector: vec![0.5; n],
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(n), "ambiguous", Language::English)
        .await;
    assert_eq!(chosen.as_deref(), Some(INFO_ROOM_ID));
}

#[tokio::test]
async fn empty_selection_text_abstains_without_calls() {
    let index = test_index();
    let sel = selector(
        MockChat {
            reply: Some(r#"{"room_id": "GDA-Sala-5"}"#.to_string()),
        },
        MockEmbedder {
            query_vector: unit(2, 4, 1.0),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "   ", Language::Italian)
        .await;
    assert_eq!(chosen, None);
}

#[tokio::test]
async fn selection_never_returns_unknown_room() {
    let index = test_index();
    let sel = selector(
        MockChat {
            reply: Some("no idea".to_string()),
        },
        MockEmbedder {
            query_vector: unit(3, 4, 0.9),
        },
        0.4,
    );
    let chosen = sel
        .select(&index, &basis_embeddings(4), "question", Language::English)
        .await;
    if let Some(rid) = chosen {
        assert!(index.contains(&rid));
    }
}

// ---------------------------------------------------------------------------
// Reply parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_reply_variants() {
    let index = test_index();
    assert_eq!(
        docent_routing::selector::parse_classifier_reply(r#"{"room_id": "GDA-Sala-4"}"#, &index),
        ClassifierReply::Parsed("GDA-Sala-4".to_string())
    );
    assert_eq!(
        docent_routing::selector::parse_classifier_reply(r#"{"room_id": "GDA-Sala-42"}"#, &index),
        ClassifierReply::UnknownRoom("GDA-Sala-42".to_string())
    );
    assert_eq!(
        docent_routing::selector::parse_classifier_reply("garbage reply", &index),
        ClassifierReply::Unparseable
    );
    // JSON wrapped in prose still resolves via substring search.
    assert_eq!(
        docent_routing::selector::parse_classifier_reply(
            "Sure! ```json\n{\"room_id\": \"GDA-Sala-5\"}\n```",
            &index
        ),
        ClassifierReply::Parsed("GDA-Sala-5".to_string())
    );
}
