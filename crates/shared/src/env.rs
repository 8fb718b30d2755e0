use anyhow::anyhow;

use crate::AppError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_SIMILARITY_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

#[derive(Clone)]
pub struct AppEnv {
  pub api_key: String,
  pub base_url: String,
  pub chat_model: String,
  pub embedding_model: String,
  pub similarity_embedding_model: String,
}

impl AppEnv {
  /// Build the configuration from an arbitrary variable lookup.
  ///
  /// Fails with a `Config` error when `OPENROUTER_API_KEY` is unset or blank.
  /// Optional variables that are unset or blank take their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let non_empty = |key: &str| {
      lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
    };
    let or_default = |key: &str, default: &str| non_empty(key).unwrap_or_else(|| default.to_owned());

    let api_key = non_empty("OPENROUTER_API_KEY")
      .ok_or_else(|| AppError::config(anyhow!("missing OPENROUTER_API_KEY")))?;

    Ok(Self {
      api_key,
      base_url: or_default("OPENROUTER_BASE_URL", DEFAULT_BASE_URL),
      chat_model: or_default("CHAT_MODEL", DEFAULT_CHAT_MODEL),
      embedding_model: or_default("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
      similarity_embedding_model: or_default(
        "SIMILARITY_EMBEDDING_MODEL",
        DEFAULT_SIMILARITY_EMBEDDING_MODEL,
      ),
    })
  }
}

// The key stays out of logs.
impl std::fmt::Debug for AppEnv {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppEnv")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("chat_model", &self.chat_model)
      .field("embedding_model", &self.embedding_model)
      .field("similarity_embedding_model", &self.similarity_embedding_model)
      .finish()
  }
}
