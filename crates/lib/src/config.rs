//! Runtime configuration: which grammar to speak and which directory
//! relative paths resolve against.
//!
//! Values come from the environment (`PATHOS_PATH_STYLE`, `PATHOS_CWD`) and
//! can be overridden by the caller, usually from command-line flags.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::{CWD_ENV, STYLE_ENV};
use crate::path::{PathEngine, PathError, PathStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Path(#[from] PathError),

  #[error("cannot read the current directory: {0}")]
  CurrentDir(#[from] std::io::Error),
}

/// Grammar selection plus an optional working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  pub style: PathStyle,
  pub cwd: Option<String>,
}

impl Config {
  /// Read configuration from the environment.
  ///
  /// An unrecognized style falls back to `native`; an empty cwd is ignored.
  pub fn from_env() -> Self {
    let style = match std::env::var(STYLE_ENV) {
      Ok(raw) => raw.parse::<PathStyle>().unwrap_or_else(|e| {
        warn!(variable = STYLE_ENV, "{e}; using native");
        PathStyle::Native
      }),
      Err(_) => PathStyle::Native,
    };

    let cwd = std::env::var(CWD_ENV).ok().filter(|cwd| !cwd.is_empty());

    debug!(style = %style, cwd = ?cwd, "loaded configuration from environment");
    Self { style, cwd }
  }

  /// Apply explicit overrides on top of this configuration.
  pub fn with_overrides(mut self, style: Option<PathStyle>, cwd: Option<String>) -> Self {
    if let Some(style) = style {
      self.style = style;
    }
    if let Some(cwd) = cwd {
      self.cwd = Some(cwd);
    }
    self
  }

  /// Build the path engine this configuration describes.
  ///
  /// A configured cwd must be absolute in the selected grammar. Without one,
  /// the process working directory is used, or the grammar's root when the
  /// process directory cannot be expressed in that grammar.
  pub fn engine(&self) -> Result<PathEngine, ConfigError> {
    if let Some(cwd) = &self.cwd {
      return Ok(PathEngine::new(self.style, cwd.clone())?);
    }

    let process_cwd = std::env::current_dir()?.to_string_lossy().into_owned();
    let grammar = self.style.grammar();
    if grammar.is_absolute(&process_cwd) {
      return Ok(PathEngine::new(self.style, process_cwd)?);
    }

    let root = match self.style.concrete() {
      PathStyle::Windows => r"C:\",
      _ => "/",
    };
    warn!(
      cwd = %process_cwd,
      style = %self.style,
      "process directory is not absolute in this grammar; resolving against {root}"
    );
    Ok(PathEngine::new(self.style, root)?)
  }
}
