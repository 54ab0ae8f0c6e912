//! Host queries.
//!
//! Every query answers with a value. When the underlying source fails the
//! failure is logged at `warn` and a documented default is returned instead:
//! usually an empty string, or `-1` for numeric ids.

use std::path::Path;

#[cfg(unix)]
use nix::sys::utsname::UtsName;
use serde::{Deserialize, Serialize};
use sysinfo::System;
use tracing::{debug, warn};

use super::PlatformError;
use super::arch::Arch;
use super::os::Os;

/// The account the process runs as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
  pub username: String,
  /// `-1` where the platform has no numeric user id.
  pub uid: i64,
  /// `-1` where the platform has no numeric group id.
  pub gid: i64,
  pub shell: Option<String>,
  pub homedir: String,
}

/// A snapshot of every host query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
  pub platform: String,
  pub arch: String,
  pub os_type: String,
  pub release: String,
  pub version: String,
  pub machine: String,
  pub hostname: String,
  pub eol: String,
  pub dev_null: String,
  pub endianness: String,
  pub available_parallelism: usize,
  pub home_dir: String,
  pub tmp_dir: String,
  pub uptime: u64,
  pub user: UserInfo,
}

impl PlatformInfo {
  /// Run every query once.
  pub fn gather() -> Self {
    let info = Self {
      platform: platform().to_string(),
      arch: arch().to_string(),
      os_type: os_type(),
      release: release(),
      version: version(),
      machine: machine(),
      hostname: hostname(),
      eol: eol().to_string(),
      dev_null: dev_null().to_string(),
      endianness: endianness().to_string(),
      available_parallelism: available_parallelism(),
      home_dir: home_dir(),
      tmp_dir: tmp_dir(),
      uptime: uptime(),
      user: user_info(),
    };
    debug!(platform = %info.platform, arch = %info.arch, "gathered host information");
    info
  }
}

fn or_default<T>(query: &'static str, result: Result<T, PlatformError>, default: T) -> T {
  match result {
    Ok(value) => value,
    Err(err) => {
      warn!(query, "{err}");
      default
    }
  }
}

fn lossy(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}

/// Line terminator of the host: `\r\n` on Windows, `\n` elsewhere.
pub fn eol() -> &'static str {
  if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Null device path.
pub fn dev_null() -> &'static str {
  if cfg!(windows) { r"\\.\nul" } else { "/dev/null" }
}

/// `"LE"` or `"BE"`.
pub fn endianness() -> &'static str {
  if cfg!(target_endian = "big") { "BE" } else { "LE" }
}

/// OS identifier, e.g. `linux`, `darwin`, `windows`.
pub fn platform() -> &'static str {
  Os::current().map(|os| os.as_str()).unwrap_or(std::env::consts::OS)
}

/// CPU architecture the binary was built for.
pub fn arch() -> &'static str {
  Arch::current().map(|arch| arch.as_str()).unwrap_or(std::env::consts::ARCH)
}

/// Estimate of the parallelism available to the process, at least 1.
pub fn available_parallelism() -> usize {
  let result = std::thread::available_parallelism()
    .map(usize::from)
    .map_err(|e| PlatformError::Unavailable {
      what: "available parallelism",
      reason: e.to_string(),
    });
  or_default("available_parallelism", result, 1)
}

fn try_home_dir() -> Result<String, PlatformError> {
  dirs::home_dir().map(|dir| lossy(&dir)).ok_or(PlatformError::NoHomeDirectory)
}

/// Home directory of the current user, `""` when unknown.
pub fn home_dir() -> String {
  or_default("home_dir", try_home_dir(), String::new())
}

/// Temporary directory without a trailing separator, unless it is a root.
pub fn tmp_dir() -> String {
  let mut dir = lossy(&std::env::temp_dir());
  while dir.len() > 1 && (dir.ends_with('/') || dir.ends_with('\\')) && !dir.ends_with(":\\") {
    dir.pop();
  }
  dir
}

fn try_hostname() -> Result<String, PlatformError> {
  match System::host_name() {
    Some(name) if !name.is_empty() => Ok(name),
    _ => whoami::fallible::hostname().map_err(|e| PlatformError::Hostname(e.to_string())),
  }
}

/// Network host name, `unknown` when it cannot be read.
pub fn hostname() -> String {
  or_default("hostname", try_hostname(), "unknown".to_string())
}

/// Seconds since boot.
pub fn uptime() -> u64 {
  System::uptime()
}

#[cfg(unix)]
mod uname {
  use nix::sys::utsname::{UtsName, uname};

  use super::PlatformError;

  pub(super) fn field(what: &'static str, pick: fn(&UtsName) -> &std::ffi::OsStr) -> Result<String, PlatformError> {
    let names = uname().map_err(|e| PlatformError::Unavailable {
      what,
      reason: e.to_string(),
    })?;
    Ok(pick(&names).to_string_lossy().into_owned())
  }
}

/// Kernel name, e.g. `Linux`, `Darwin`, `Windows_NT`.
pub fn os_type() -> String {
  let kernel = Os::current().map(|os| os.kernel_name()).unwrap_or_default().to_string();
  #[cfg(unix)]
  let kernel = or_default("os_type", uname::field("kernel name", UtsName::sysname), kernel);
  kernel
}

fn kernel_version() -> Result<String, PlatformError> {
  System::kernel_version().ok_or(PlatformError::Unavailable {
    what: "kernel version",
    reason: "not reported by the host".to_string(),
  })
}

/// Kernel release string.
pub fn release() -> String {
  #[cfg(unix)]
  let result = uname::field("kernel release", UtsName::release).or_else(|_| kernel_version());
  #[cfg(not(unix))]
  let result = kernel_version();

  or_default("release", result, String::new())
}

/// Kernel version string.
pub fn version() -> String {
  #[cfg(unix)]
  let result = uname::field("kernel version", UtsName::version);
  #[cfg(not(unix))]
  let result = System::long_os_version().ok_or(PlatformError::Unavailable {
    what: "OS version",
    reason: "not reported by the host".to_string(),
  });

  or_default("version", result, String::new())
}

/// Machine hardware name, e.g. `x86_64`, `arm64`.
pub fn machine() -> String {
  let machine = std::env::consts::ARCH.to_string();
  #[cfg(unix)]
  let machine = or_default("machine", uname::field("machine", UtsName::machine), machine);
  machine
}

#[cfg(unix)]
fn try_user_info() -> Result<UserInfo, PlatformError> {
  use nix::unistd::{Uid, User};

  let uid = Uid::effective();
  let user = User::from_uid(uid)
    .map_err(|e| PlatformError::Username(e.to_string()))?
    .ok_or_else(|| PlatformError::Username(format!("no passwd entry for uid {uid}")))?;

  Ok(UserInfo {
    username: user.name,
    uid: i64::from(user.uid.as_raw()),
    gid: i64::from(user.gid.as_raw()),
    shell: Some(lossy(&user.shell)).filter(|shell| !shell.is_empty()),
    homedir: lossy(&user.dir),
  })
}

#[cfg(not(unix))]
fn try_user_info() -> Result<UserInfo, PlatformError> {
  Ok(UserInfo {
    username: whoami::username(),
    uid: -1,
    gid: -1,
    shell: None,
    homedir: try_home_dir()?,
  })
}

/// The account the process runs as.
///
/// Falls back to the login name from the environment with `-1` ids when the
/// account database cannot be read.
pub fn user_info() -> UserInfo {
  match try_user_info() {
    Ok(user) => user,
    Err(err) => {
      warn!(query = "user_info", "{err}");
      UserInfo {
        username: whoami::username(),
        uid: -1,
        gid: -1,
        shell: None,
        homedir: home_dir(),
      }
    }
  }
}
