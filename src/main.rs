use std::{env, io::Write, process::ExitCode};

use embedsim_shared::AppEnv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;
mod report;

/// Load configuration, run the demo, and map the outcome to an exit status.
///
/// A missing credential fails before any client exists.
async fn bootstrap<F, W>(lookup: F, out: &mut W) -> ExitCode
where
  F: Fn(&str) -> Option<String>,
  W: Write,
{
  let env = match AppEnv::from_lookup(lookup) {
    Ok(env) => env,
    Err(err) => {
      tracing::error!("{}", err.report());
      return ExitCode::FAILURE;
    }
  };
  tracing::debug!(?env, "loaded configuration");

  match demo::run(&env, out).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!(kind = err.kind().as_str(), "{}", err.report());
      ExitCode::FAILURE
    }
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  // Optional: variables may come from the real environment instead.
  dotenvy::dotenv().ok();
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_error::ErrorLayer::default())
    .init();

  bootstrap(|key| env::var(key).ok(), &mut std::io::stdout()).await
}
