//! Read-only host information.
//!
//! [`Platform`] identifies the compilation target; [`info`] answers runtime
//! queries about the host (kernel, user, directories, uptime). None of this is
//! used by the path engine.

pub mod arch;
mod error;
pub mod info;
pub mod os;

use arch::Arch;
use os::Os;
use std::fmt;

pub use error::PlatformError;
pub use info::{PlatformInfo, UserInfo};

/// Platform identifier combining architecture and OS (e.g., "aarch64-darwin")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
  pub arch: Arch,
  pub os: Os,
}

impl Platform {
  pub fn new(arch: Arch, os: Os) -> Self {
    Self { arch, os }
  }

  /// Detect the current platform
  ///
  /// Returns `None` if the OS or architecture has no typed variant
  pub fn current() -> Option<Self> {
    Some(Self {
      arch: Arch::current()?,
      os: Os::current()?,
    })
  }

  /// Returns the platform triple string (e.g., "aarch64-darwin")
  pub fn triple(&self) -> String {
    format!("{}-{}", self.arch, self.os)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.triple())
  }
}

/// Returns the platform triple for the current system, falling back to the
/// raw target names when either half has no typed variant.
pub fn platform_triple() -> String {
  match Platform::current() {
    Some(platform) => platform.triple(),
    None => format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
  }
}
