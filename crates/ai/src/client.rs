use async_openai::{Client, config::OpenAIConfig};
use embedsim_shared::AppEnv;

/// Build a client bound to the configured gateway.
pub fn client(env: &AppEnv) -> Client<OpenAIConfig> {
  let config = OpenAIConfig::new()
    .with_api_key(&env.api_key)
    .with_api_base(&env.base_url);

  Client::with_config(config)
}
