use anyhow::anyhow;
use async_openai::types::embeddings::CreateEmbeddingResponse;
use embedsim_shared::AppError;

use crate::known_dimensions;

/// One vector returned by the embeddings endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector {
  /// Position of the matching input in the request.
  pub index: u32,
  pub values: Vec<f32>,
}

/// Vectors of one embeddings request, ordered like the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingBatch {
  pub vectors: Vec<EmbeddingVector>,
  pub prompt_tokens: u32,
  pub total_tokens: u32,
}

/// Turn a raw response into a batch with one vector per input.
///
/// - Data is sorted by index
/// - A count other than `expected` is a remote error
/// - Indices must be exactly `0..expected`, otherwise a remote error
/// - A length other than the model's known dimensionality is a dimension error
pub fn process_response(
  model: &str,
  response: CreateEmbeddingResponse,
  expected: usize,
) -> Result<EmbeddingBatch, AppError> {
  let mut data = response.data;
  data.sort_by_key(|e| e.index);

  if data.len() != expected {
    return Err(AppError::remote(anyhow!(
      "embedding count mismatch: expected {}, got {}",
      expected,
      data.len()
    )));
  }

  if let Some((position, e)) = data
    .iter()
    .enumerate()
    .find(|(position, e)| e.index as usize != *position)
  {
    return Err(AppError::remote(anyhow!(
      "embedding index mismatch: expected {}, got {}",
      position,
      e.index
    )));
  }

  if let Some(dim) = known_dimensions(model)
    && let Some(bad) = data.iter().find(|e| e.embedding.len() != dim)
  {
    return Err(AppError::dimension(anyhow!(
      "embedding {} from {} has dimension {}, expected {}",
      bad.index,
      model,
      bad.embedding.len(),
      dim
    )));
  }

  Ok(EmbeddingBatch {
    vectors: data
      .into_iter()
      .map(|e| EmbeddingVector {
        index: e.index,
        values: e.embedding,
      })
      .collect(),
    prompt_tokens: response.usage.prompt_tokens,
    total_tokens: response.usage.total_tokens,
  })
}
