mod error;
pub use error::{AppError, ErrorKind};

mod env;
pub use env::{
  AppEnv, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL,
  DEFAULT_SIMILARITY_EMBEDDING_MODEL,
};

mod message;
pub use message::{ChatMessage, MessageRole};

#[doc(hidden)]
pub mod test_support;
