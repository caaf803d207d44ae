use serde::{Deserialize, Serialize};

/// Source citation attached to an answer. At most one per response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    pub heading: String,
    pub score: f32,
}
