//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, section headers and human-readable durations.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const ARROW: &str = "→";
}

/// Render seconds as the two largest units, e.g. `3d 4h`, `5m 12s`.
pub fn format_uptime(secs: u64) -> String {
  const MINUTE: u64 = 60;
  const HOUR: u64 = MINUTE * 60;
  const DAY: u64 = HOUR * 24;

  if secs >= DAY {
    format!("{}d {}h", secs / DAY, (secs % DAY) / HOUR)
  } else if secs >= HOUR {
    format!("{}h {}m", secs / HOUR, (secs % HOUR) / MINUTE)
  } else if secs >= MINUTE {
    format!("{}m {}s", secs / MINUTE, secs % MINUTE)
  } else {
    format!("{}s", secs)
  }
}

pub fn print_header(title: &str) {
  println!();
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
