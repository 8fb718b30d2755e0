use anyhow::Context;
use async_openai::{
  Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs,
};
use embedsim_shared::AppError;

use crate::embed_shared::{EmbeddingBatch, process_response};

/// Embed multiple texts in a single API call.
///
/// Returns one vector per input, in the same order.
#[tracing::instrument(skip(client, inputs), fields(inputs = inputs.len()))]
pub async fn embed_many(
  client: &Client<OpenAIConfig>,
  model: &str,
  inputs: &[String],
) -> Result<EmbeddingBatch, AppError> {
  if inputs.is_empty() {
    return Ok(EmbeddingBatch {
      vectors: vec![],
      prompt_tokens: 0,
      total_tokens: 0,
    });
  }

  let request = CreateEmbeddingRequestArgs::default()
    .model(model)
    .input(inputs.to_vec())
    .build()?;

  tracing::debug!("requesting embeddings");

  let response = client
    .embeddings()
    .create(request)
    .await
    .context("embeddings request failed")
    .map_err(AppError::remote)?;

  process_response(model, response, inputs.len())
}

#[cfg(test)]
mod tests {
  use embedsim_shared::{
    ErrorKind,
    test_support::{mock_env, should_skip_httpmock},
  };
  use httpmock::{Method::POST, MockServer};

  use super::*;
  use crate::client;

  type Result<T = ()> = std::result::Result<T, embedsim_shared::AppError>;

  fn embedding(index: u32, first: f32, dim: usize) -> serde_json::Value {
    let mut values = vec![0.0_f32; dim];
    values[0] = first;
    serde_json::json!({ "object": "embedding", "index": index, "embedding": values })
  }

  fn response(model: &str, data: Vec<serde_json::Value>, tokens: u32) -> String {
    serde_json::json!({
      "object": "list",
      "data": data,
      "model": model,
      "usage": { "prompt_tokens": tokens, "total_tokens": tokens }
    })
    .to_string()
  }

  fn inputs() -> Vec<String> {
    vec![
      "The quick brown fox jumps over the lazy dog".to_owned(),
      "Embedding models are useful for search and clustering".to_owned(),
    ]
  }

  #[tokio::test]
  async fn empty_input_skips_the_request() -> Result<()> {
    // Unroutable base url: any request would fail.
    let client = client(&mock_env("http://127.0.0.1:9/v1"));
    let batch = embed_many(&client, "text-embedding-3-large", &[]).await?;
    assert!(batch.vectors.is_empty());
    assert_eq!(batch.total_tokens, 0);
    Ok(())
  }

  #[tokio::test]
  async fn two_inputs_yield_two_vectors_in_input_order() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response(
      "text-embedding-3-large",
      vec![embedding(1, 0.5, 3072), embedding(0, 0.25, 3072)],
      19,
    );
    let mock = server
      .mock_async(|when, then| {
        when
          .method(POST)
          .path("/api/v1/embeddings")
          .header("authorization", "Bearer sk-test")
          .body_includes("\"model\":\"text-embedding-3-large\"")
          .body_includes("The quick brown fox jumps over the lazy dog");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let batch = embed_many(&client, "text-embedding-3-large", &inputs()).await?;

    mock.assert_async().await;
    assert_eq!(batch.vectors.len(), 2);
    assert_eq!(batch.total_tokens, 19);
    assert_eq!(batch.prompt_tokens, 19);
    assert_eq!(batch.vectors[0].index, 0);
    assert_eq!(batch.vectors[0].values[0], 0.25);
    assert_eq!(batch.vectors[1].index, 1);
    assert!(batch.vectors.iter().all(|v| v.values.len() == 3072));
    Ok(())
  }

  #[tokio::test]
  async fn count_mismatch_is_a_remote_error() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response("text-embedding-3-large", vec![embedding(0, 0.5, 3072)], 10);
    server
      .mock_async(|when, then| {
        when.method(POST).path("/api/v1/embeddings");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let err = embed_many(&client, "text-embedding-3-large", &inputs())
      .await
      .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.to_string().contains("expected 2, got 1"));
    Ok(())
  }

  #[tokio::test]
  async fn duplicate_index_is_a_remote_error() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response(
      "text-embedding-3-large",
      vec![embedding(0, 0.5, 3072), embedding(0, 0.25, 3072)],
      10,
    );
    server
      .mock_async(|when, then| {
        when.method(POST).path("/api/v1/embeddings");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let err = embed_many(&client, "text-embedding-3-large", &inputs())
      .await
      .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.to_string().contains("index mismatch: expected 1, got 0"));
    Ok(())
  }

  #[tokio::test]
  async fn out_of_range_index_is_a_remote_error() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response(
      "text-embedding-3-large",
      vec![embedding(0, 0.5, 3072), embedding(5, 0.25, 3072)],
      10,
    );
    server
      .mock_async(|when, then| {
        when.method(POST).path("/api/v1/embeddings");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let err = embed_many(&client, "text-embedding-3-large", &inputs())
      .await
      .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.to_string().contains("expected 1, got 5"));
    Ok(())
  }

  #[tokio::test]
  async fn wrong_dimension_for_known_model_is_rejected() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response(
      "text-embedding-3-large",
      vec![embedding(0, 0.5, 3072), embedding(1, 0.5, 1024)],
      10,
    );
    server
      .mock_async(|when, then| {
        when.method(POST).path("/api/v1/embeddings");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let err = embed_many(&client, "text-embedding-3-large", &inputs())
      .await
      .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Dimension);
    Ok(())
  }

  #[tokio::test]
  async fn unknown_model_accepts_any_dimension() -> Result<()> {
    if should_skip_httpmock() {
      return Ok(());
    }
    let server = MockServer::start_async().await;
    let body = response(
      "BAAI/bge-m3",
      vec![embedding(0, 0.5, 4), embedding(1, 0.5, 4)],
      10,
    );
    server
      .mock_async(|when, then| {
        when.method(POST).path("/api/v1/embeddings");
        then
          .status(200)
          .header("content-type", "application/json")
          .body(body.clone());
      })
      .await;

    let client = client(&mock_env(&server.url("/api/v1")));
    let batch = embed_many(&client, "BAAI/bge-m3", &inputs()).await?;

    assert!(batch.vectors.iter().all(|v| v.values.len() == 4));
    Ok(())
  }
}
