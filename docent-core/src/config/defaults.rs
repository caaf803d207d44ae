// Single source of truth for all default values.

// --- Server ---
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CORPUS_PATH: &str = "./index/records.json";

// --- LLM ---
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_CHAT_MODEL: &str = "qwen2.5:7b-instruct-q4_0";
pub const DEFAULT_EMBED_MODEL: &str = "paraphrase-multilingual";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

// --- Routing ---
pub const DEFAULT_ROOM_MIN_SIMILARITY: f32 = 0.40;
pub const DEFAULT_HISTORY_MAX_TURNS: usize = 10;
pub const DEFAULT_HISTORY_MAX_CHARS: usize = 3_000;
/// Character budget for each room text sent to the embedding encoder.
pub const DEFAULT_EMBED_TEXT_CHARS: usize = 1_000;

// --- Generation ---
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 8_000;
pub const DEFAULT_CRITIC_ENABLED: bool = false;
