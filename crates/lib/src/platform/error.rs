use thiserror::Error;

/// Failures of individual host queries.
///
/// Queries in [`super::info`] never return these to callers; they log them
/// and fall back to a default value.
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("failed to determine home directory")]
  NoHomeDirectory,

  #[error("failed to get hostname: {0}")]
  Hostname(String),

  #[error("failed to get user: {0}")]
  Username(String),

  #[error("{what} is unavailable: {reason}")]
  Unavailable { what: &'static str, reason: String },
}
