// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_RESULT_LIMIT: usize = 20;
pub const DEFAULT_MAX_RESULT_LIMIT: usize = 100;
pub const DEFAULT_INTENT_TYPE_BOOST: f64 = 1.15;
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

// --- Traversal ---
pub const DEFAULT_TRAVERSAL_DEPTH: u32 = 1;
pub const DEFAULT_TRAVERSAL_MAX_RESULTS: usize = 100;

// --- Expansion ---
pub const DEFAULT_EXPANSION_ENABLED: bool = false;
pub const DEFAULT_EXPANSION_SEED_COUNT: usize = 5;
pub const DEFAULT_EXPANSION_DECAY: f64 = 0.5;
pub const DEFAULT_EXPANSION_DEPTH: u32 = 1;

// --- Feedback ---
pub const DEFAULT_FEEDBACK_ENABLED: bool = true;
pub const DEFAULT_FEEDBACK_BATCH_LOAD: bool = true;
pub const DEFAULT_FEEDBACK_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_FEEDBACK_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_FEEDBACK_BOOST_PER_VOTE: f64 = 0.05;
pub const DEFAULT_FEEDBACK_MAX_BOOST: f64 = 0.25;
pub const DEFAULT_FEEDBACK_MAX_PENALTY: f64 = 0.5;

// --- Cross-encoder ---
pub const DEFAULT_CROSS_ENCODER_ENABLED: bool = false;
pub const DEFAULT_CROSS_ENCODER_TOP_K: usize = 15;
pub const DEFAULT_CROSS_ENCODER_ALPHA: f64 = 0.6;
pub const DEFAULT_CROSS_ENCODER_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_CROSS_ENCODER_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CROSS_ENCODER_CONCURRENCY: usize = 5;
pub const DEFAULT_CROSS_ENCODER_MAX_BATCH_SIZE: usize = 20;
pub const DEFAULT_CROSS_ENCODER_ENTITY_AWARE: bool = false;

// --- LLM ---
pub const DEFAULT_LLM_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_LLM_MODEL: &str = "qwen2.5:7b";
pub const DEFAULT_LLM_API_KEY_ENV: &str = "MEMEX_LLM_API_KEY";

// --- Extraction ---
pub const DEFAULT_FUZZY_VARIANTS: bool = true;
pub const DEFAULT_CONFIDENCE_SCORING: bool = true;
pub const DEFAULT_SEMANTIC_TYPES: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
