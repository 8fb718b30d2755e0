use anyhow::{Context, anyhow};
use async_openai::{
  Client,
  config::OpenAIConfig,
  error::OpenAIError,
  types::chat::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
  },
};
use embedsim_shared::{AppError, ChatMessage, MessageRole};

fn to_request_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage, OpenAIError> {
  let content = message.content.clone();
  let message = match message.role {
    MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
      .content(content)
      .build()?
      .into(),
    MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
      .content(content)
      .build()?
      .into(),
    MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
      .content(content)
      .build()?
      .into(),
  };
  Ok(message)
}

/// Request one chat completion and return the first choice's content as is.
#[tracing::instrument(skip(client, messages), fields(messages = messages.len()))]
pub async fn generate_text(
  client: &Client<OpenAIConfig>,
  model: &str,
  messages: &[ChatMessage],
) -> Result<String, AppError> {
  let messages = messages
    .iter()
    .map(to_request_message)
    .collect::<Result<Vec<_>, _>>()?;

  let request = CreateChatCompletionRequestArgs::default()
    .model(model)
    .messages(messages)
    .build()?;

  tracing::debug!("requesting chat completion");

  client
    .chat()
    .create(request)
    .await
    .context("chat completion request failed")
    .map_err(AppError::remote)?
    .choices
    .into_iter()
    .next()
    .and_then(|c| c.message.content)
    .ok_or_else(|| AppError::remote(anyhow!("empty message content")))
}
