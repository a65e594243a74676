mod config_error;
mod llm_error;
mod memex_error;
mod retrieval_error;
mod storage_error;
mod validation_error;

pub use config_error::ConfigError;
pub use llm_error::LlmError;
pub use memex_error::{MemexError, MemexResult};
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
