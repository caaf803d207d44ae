//! Two-stage room selection.
//!
//! Stage 1 presents every room with its descriptor to the generative model
//! as a closed-choice task. Stage 2 falls back to embedding similarity with
//! a rejection threshold. The classifier always wins when it names a known
//! room; embeddings are a fallback, not a voter. When neither stage clears,
//! the selector abstains: declining beats guessing.

use std::sync::Arc;

use docent_core::errors::DocentResult;
use docent_core::traits::{IChatModel, IEmbeddingProvider};
use docent_core::vector::dot;
use docent_core::Language;
use docent_corpus::RoomIndex;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Classification temperature: deterministic.
const CLASSIFIER_TEMPERATURE: f32 = 0.0;

/// Outcome of parsing the classifier's loosely-structured reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierReply {
    /// A known room identifier.
    Parsed(String),
    /// Syntactically valid but not a member of the room set.
    UnknownRoom(String),
    /// Nothing usable in the reply.
    Unparseable,
}

#[derive(Deserialize)]
struct ClassifierJson {
    room_id: String,
}

/// Parse the classifier reply permissively: strict JSON first, then a
/// substring search for any known identifier. Only members of the known
/// room set count as answers.
pub fn parse_classifier_reply(raw: &str, index: &RoomIndex) -> ClassifierReply {
    if let Ok(obj) = serde_json::from_str::<ClassifierJson>(raw.trim()) {
        if index.contains(&obj.room_id) {
            return ClassifierReply::Parsed(obj.room_id);
        }
        return ClassifierReply::UnknownRoom(obj.room_id);
    }

    // Longest identifiers first, so "GDA-Sala-13" is never shadowed by its
    // prefix "GDA-Sala-1".
    let mut ids: Vec<&String> = index.ids().iter().collect();
    ids.sort_by_key(|rid| std::cmp::Reverse(rid.len()));
    for rid in ids {
        if raw.contains(rid.as_str()) {
            return ClassifierReply::Parsed(rid.clone());
        }
    }

    ClassifierReply::Unparseable
}

/// Pre-computed room embedding matrix, index-aligned with
/// [`RoomIndex::ids`]. Write-once at startup, read-only afterwards.
pub struct RoomEmbeddings {
    vectors: Vec<Vec<f32>>,
}

impl RoomEmbeddings {
    /// Embed every room (heading + truncated text) with the shared encoder.
    pub async fn compute(
        index: &RoomIndex,
        embedder: &dyn IEmbeddingProvider,
        embed_text_chars: usize,
    ) -> DocentResult<Self> {
        let texts: Vec<String> = index
            .iter()
            .map(|room| room.embedding_text(embed_text_chars))
            .collect();
        let vectors = embedder.embed_batch(&texts).await?;
        info!(rooms = vectors.len(), model = embedder.name(), "room embeddings computed");
        Ok(Self { vectors })
    }

    /// Build from pre-computed vectors (index-aligned with the room order).
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Self {
        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Arg-max cosine similarity against the query vector.
    ///
    /// Strictly-greater comparison over the sorted room order, so ties
    /// resolve to the lexicographically first identifier.
    pub fn best_match(&self, query: &[f32]) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (idx, room_vec) in self.vectors.iter().enumerate() {
            let sim = dot(room_vec, query);
            match best {
                Some((_, best_sim)) if sim <= best_sim => {}
                _ => best = Some((idx, sim)),
            }
        }
        best
    }
}

/// The two-stage selector. Holds the shared collaborators; stateless per
/// query.
pub struct RoomSelector {
    chat: Arc<dyn IChatModel>,
    embedder: Arc<dyn IEmbeddingProvider>,
    /// Model used for the classifier stage.
    chat_model: String,
    /// Rejection threshold for the embedding fallback.
    min_similarity: f32,
}

impl RoomSelector {
    pub fn new(
        chat: Arc<dyn IChatModel>,
        embedder: Arc<dyn IEmbeddingProvider>,
        chat_model: impl Into<String>,
        min_similarity: f32,
    ) -> Self {
        Self {
            chat,
            embedder,
            chat_model: chat_model.into(),
            min_similarity,
        }
    }

    /// Pick a room for the selection text, or abstain.
    pub async fn select(
        &self,
        index: &RoomIndex,
        embeddings: &RoomEmbeddings,
        selection_text: &str,
        lang: Language,
    ) -> Option<String> {
        let selection_text = selection_text.trim();
        if selection_text.is_empty() {
            return None;
        }

        // Stage 1: closed-choice generative classification over all rooms.
        match self.classify(index, selection_text, lang).await {
            ClassifierReply::Parsed(rid) => {
                info!(room_id = %rid, "classifier chose room");
                return Some(rid);
            }
            ClassifierReply::UnknownRoom(rid) => {
                warn!(room_id = %rid, "classifier named unknown room, trying embeddings");
            }
            ClassifierReply::Unparseable => {
                debug!("classifier reply unusable, trying embeddings");
            }
        }

        // Stage 2: embedding similarity on the same selection text.
        if embeddings.is_empty() {
            return None;
        }
        let query = match self.embedder.embed(selection_text).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "query embedding failed, abstaining");
                return None;
            }
        };

        let (best_idx, best_sim) = embeddings.best_match(&query)?;
        let best_rid = index.ids().get(best_idx)?;
        debug!(room_id = %best_rid, similarity = best_sim, "embedding best match");

        if best_sim < self.min_similarity {
            info!(
                similarity = best_sim,
                threshold = self.min_similarity,
                "best match below threshold, abstaining"
            );
            return None;
        }
        Some(best_rid.clone())
    }

    /// Run the classifier stage. Any failure (transport, empty, malformed,
    /// unknown identifier) is a classifier failure, not an answer.
    async fn classify(
        &self,
        index: &RoomIndex,
        selection_text: &str,
        lang: Language,
    ) -> ClassifierReply {
        let rooms_block: String = index
            .iter()
            .map(|room| format!("- \"{}\": {}\n", room.room_id, room.descriptor))
            .collect();

        let (system_prompt, user_msg) = classifier_prompts(lang, selection_text, &rooms_block);

        match self
            .chat
            .chat(&self.chat_model, &system_prompt, &user_msg, CLASSIFIER_TEMPERATURE)
            .await
        {
            Ok(reply) => parse_classifier_reply(&reply, index),
            Err(e) => {
                warn!(error = %e, "classifier call failed");
                ClassifierReply::Unparseable
            }
        }
    }
}

fn classifier_prompts(lang: Language, question: &str, rooms_block: &str) -> (String, String) {
    match lang {
        Language::English => (
            "You are a classifier for a museum chatbot.\n\
             Your task is to choose which room best matches the visitor question.\n\
             You must reply ONLY with a JSON object of the form:\n\
             {\"room_id\": \"<ID>\"}\n\
             where <ID> is exactly one of the IDs listed in the candidate rooms."
                .to_string(),
            format!(
                "Visitor question:\n{question}\n\nCandidate rooms:\n{rooms_block}\n\
                 Choose the single best room_id and return only the JSON."
            ),
        ),
        Language::Italian => (
            "Sei un classificatore per una guida museale.\n\
             Devi scegliere quale sala corrisponde meglio alla domanda del visitatore.\n\
             Devi rispondere SOLO con un oggetto JSON del tipo:\n\
             {\"room_id\": \"<ID>\"}\n\
             dove <ID> è esattamente uno degli ID elencati nelle sale candidate."
                .to_string(),
            format!(
                "Domanda del visitatore:\n{question}\n\nSale candidate:\n{rooms_block}\n\
                 Scegli un solo room_id e restituisci solo il JSON."
            ),
        ),
    }
}
