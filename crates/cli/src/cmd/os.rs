//! Host information report.

use anyhow::Result;
use pathos_lib::platform::PlatformInfo;

use crate::output::{OutputFormat, format_uptime, print_json, print_stat};

pub fn cmd_os(format: OutputFormat) -> Result<()> {
  let info = PlatformInfo::gather();

  if format.is_json() {
    return print_json(&info);
  }

  print_report(&info);
  Ok(())
}

pub fn print_report(info: &PlatformInfo) {
  print_stat("Platform", &info.platform);
  print_stat("Arch", &info.arch);
  print_stat("Type", &info.os_type);
  print_stat("Release", &info.release);
  print_stat("Version", &info.version);
  print_stat("Machine", &info.machine);
  print_stat("Hostname", &info.hostname);
  print_stat("EOL", &format!("{:?}", info.eol));
  print_stat("Null device", &info.dev_null);
  print_stat("Endianness", &info.endianness);
  print_stat("Parallelism", &info.available_parallelism.to_string());
  print_stat("Home", &info.home_dir);
  print_stat("Temp", &info.tmp_dir);
  print_stat("Uptime", &format_uptime(info.uptime));

  let user = &info.user;
  print_stat("User", &format!("{} (uid {}, gid {})", user.username, user.uid, user.gid));
  if let Some(shell) = &user.shell {
    print_stat("Shell", shell);
  }
}
