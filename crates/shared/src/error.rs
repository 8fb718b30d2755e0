use std::{
  backtrace::BacktraceStatus,
  fmt::Display,
};

use tracing_error::{SpanTrace, SpanTraceStatus};

/// Broad category of a failure, used by the binary to pick an exit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Missing or invalid configuration.
  Config,
  /// The gateway failed or answered with something unusable.
  Remote,
  /// Vector lengths do not line up.
  Dimension,
  Internal,
}

impl ErrorKind {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Config => "config",
      Self::Remote => "remote",
      Self::Dimension => "dimension",
      Self::Internal => "internal",
    }
  }
}

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
  kind: ErrorKind,
  span_trace: SpanTrace,
}

impl AppError {
  /// Create with `Internal` kind
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::with_kind(ErrorKind::Internal, err)
  }

  /// Create with custom kind
  pub fn with_kind<E: Into<anyhow::Error>>(kind: ErrorKind, err: E) -> Self {
    Self {
      err: err.into(),
      kind,
      span_trace: SpanTrace::capture(),
    }
  }

  pub fn config<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::with_kind(ErrorKind::Config, err)
  }

  pub fn remote<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::with_kind(ErrorKind::Remote, err)
  }

  pub fn dimension<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::with_kind(ErrorKind::Dimension, err)
  }

  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    self.kind
  }

  /// Message for logs.
  ///
  /// Appends the spans active when the error was created (needs
  /// `tracing_error::ErrorLayer` installed), and in debug builds the
  /// backtrace (requires `RUST_BACKTRACE=1` to capture).
  pub fn report(&self) -> String {
    let mut report = self.to_string();
    if self.span_trace.status() == SpanTraceStatus::CAPTURED {
      report.push_str(&format!("\nSpan trace:\n{}", self.span_trace));
    }
    if cfg!(debug_assertions) {
      let bt = self.err.backtrace();
      if bt.status() == BacktraceStatus::Captured {
        report.push_str(&format!("\nBacktrace:\n{bt}"));
      }
    }
    report
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {:#}", self.kind.as_str(), self.err)
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}
