use anyhow::anyhow;
use async_openai::{Client, config::OpenAIConfig};
use embedsim_shared::AppError;

use crate::{EmbeddingVector, embed_many};

pub async fn embed(
  client: &Client<OpenAIConfig>,
  model: &str,
  input: &str,
) -> Result<EmbeddingVector, AppError> {
  embed_many(client, model, &[input.to_owned()])
    .await?
    .vectors
    .into_iter()
    .next()
    .ok_or_else(|| AppError::remote(anyhow!("empty embedding")))
}
