//! Evaluate a Lua script.

use std::path::Path;

use anyhow::{Result, anyhow};
use pathos_lib::config::Config;
use pathos_lib::lua::runtime::{create_runtime, load_file};
use tracing::info;

pub fn cmd_run(config: &Config, script: &Path) -> Result<()> {
  if !script.exists() {
    return Err(anyhow!("script not found: {}", script.display()));
  }

  let lua = create_runtime(config).map_err(|e| anyhow!("{e}"))?;
  info!(script = %script.display(), "running script");
  let value = load_file(&lua, script).map_err(|e| anyhow!("{e}"))?;

  if !value.is_nil() {
    let text = value.to_string().map_err(|e| anyhow!("{e}"))?;
    println!("{text}");
  }
  Ok(())
}
