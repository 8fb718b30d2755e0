//! Helpers shared by the mock-gateway tests of the workspace crates.

use crate::{
  AppEnv, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL, DEFAULT_SIMILARITY_EMBEDDING_MODEL,
};

pub fn should_skip_httpmock() -> bool {
  if can_bind_localhost() {
    return false;
  }
  eprintln!("skipping httpmock test: sandbox forbids binding to localhost");
  true
}

fn can_bind_localhost() -> bool {
  match std::net::TcpListener::bind(("127.0.0.1", 0)) {
    Ok(listener) => {
      drop(listener);
      true
    }
    Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => false,
    Err(err) => panic!("failed to bind localhost for httpmock tests: {err}"),
  }
}

/// Configuration pointing at a mock gateway, with key `sk-test`.
pub fn mock_env(base_url: &str) -> AppEnv {
  AppEnv {
    api_key: "sk-test".to_owned(),
    base_url: base_url.to_owned(),
    chat_model: DEFAULT_CHAT_MODEL.to_owned(),
    embedding_model: DEFAULT_EMBEDDING_MODEL.to_owned(),
    similarity_embedding_model: DEFAULT_SIMILARITY_EMBEDDING_MODEL.to_owned(),
  }
}
