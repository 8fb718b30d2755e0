use std::io::Write;

use embedsim_ai::{client, cosine_similarity, dot_product, embed, embed_many, generate_text};
use embedsim_shared::{AppEnv, AppError, ChatMessage};

use crate::report;

const GREETING: &str = "Hello!";
const BATCH_INPUTS: [&str; 2] = [
  "The quick brown fox jumps over the lazy dog",
  "Embedding models are useful for search and clustering",
];
const QUERY: &str = "How many chucks would a woodchuck chuck";
const TARGET: &str = "How many chucks would a woodchuck chuck if the woodchuck could chuck wood";

/// Chat once, embed a batch, then score the query against the target.
///
/// A failed chat completion is logged and ends the run early with `Ok`.
/// Any embedding or similarity failure is returned to the caller.
#[tracing::instrument(skip_all)]
pub async fn run<W: Write>(env: &AppEnv, out: &mut W) -> Result<(), AppError> {
  let client = client(env);

  let reply = match generate_text(&client, &env.chat_model, &[ChatMessage::user(GREETING)]).await
  {
    Ok(reply) => reply,
    Err(err) => {
      tracing::error!(error = %err, "chat completion failed");
      return Ok(());
    }
  };
  report::reply(out, &reply)?;

  let inputs = BATCH_INPUTS.map(str::to_owned);
  let batch = embed_many(&client, &env.embedding_model, &inputs).await?;
  tracing::info!(
    vectors = batch.vectors.len(),
    prompt_tokens = batch.prompt_tokens,
    "embedded batch"
  );
  report::usage(out, batch.total_tokens)?;
  for (position, vector) in batch.vectors.iter().enumerate() {
    report::vector(out, position, vector)?;
  }

  let query = embed(&client, &env.similarity_embedding_model, QUERY).await?;
  let target = embed(&client, &env.similarity_embedding_model, TARGET).await?;

  let score = dot_product(&query.values, &target.values)?;
  let cosine = cosine_similarity(&query.values, &target.values)?;
  tracing::info!(score, cosine, "computed similarity");
  report::similarity(out, score)?;
  report::cosine(out, cosine)?;

  Ok(())
}
