use anyhow::Result;
use pathos_lib::config::Config;
use pathos_lib::consts::{CWD_ENV, STYLE_ENV};
use pathos_lib::platform::platform_triple;

use crate::output::{OutputFormat, print_json, print_stat, print_warning};

pub fn cmd_info(config: &Config, format: OutputFormat) -> Result<()> {
  let engine = config.engine();
  let triple = platform_triple();

  if format.is_json() {
    let (style, cwd) = match &engine {
      Ok(engine) => (engine.style().concrete().as_str(), Some(engine.cwd())),
      Err(_) => (config.style.concrete().as_str(), None),
    };
    return print_json(&serde_json::json!({
      "version": env!("CARGO_PKG_VERSION"),
      "platform": triple,
      "style": style,
      "cwd": cwd,
    }));
  }

  println!("pathos v{}", env!("CARGO_PKG_VERSION"));
  print_stat("Platform", &triple);
  print_stat("Style", &format!("{} ({})", config.style, config.style.concrete()));
  match &engine {
    Ok(engine) => print_stat("Cwd", engine.cwd()),
    Err(err) => print_warning(&format!("Cwd: {err}")),
  }
  print_stat("Environment", &format!("{STYLE_ENV}, {CWD_ENV}"));
  Ok(())
}
