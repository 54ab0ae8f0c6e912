use thiserror::Error;

/// Errors raised at the edges of the path engine.
///
/// The grammar operations themselves are total over string input; these
/// variants come from dynamically typed callers and from facade setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
  #[error("the \"{name}\" argument must be of type {expected}, received {received}")]
  InvalidArgument {
    name: String,
    expected: &'static str,
    received: String,
  },

  #[error("unknown path style '{0}', expected posix, windows or native")]
  UnknownStyle(String),

  #[error("working directory '{cwd}' is not absolute in the {style} grammar")]
  RelativeCwd { cwd: String, style: &'static str },
}

impl PathError {
  /// Shorthand for an argument that should have been a string.
  pub fn expected_string(name: impl Into<String>, received: impl Into<String>) -> Self {
    Self::InvalidArgument {
      name: name.into(),
      expected: "string",
      received: received.into(),
    }
  }
}
