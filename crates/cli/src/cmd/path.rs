//! Path subcommands, one per engine operation.

use anyhow::Result;
use clap::Subcommand;
use pathos_lib::path::{ParsedPath, PathEngine};

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Debug, Subcommand)]
pub enum PathOp {
  /// Final segment of a path
  Basename {
    #[arg(allow_hyphen_values = true)]
    path: String,
    /// Strip this suffix when it matches exactly
    suffix: Option<String>,
  },

  /// Directory part of a path
  Dirname {
    #[arg(allow_hyphen_values = true)]
    path: String,
  },

  /// Extension of the final segment
  Extname {
    #[arg(allow_hyphen_values = true)]
    path: String,
  },

  /// Assemble a path from its parts
  Format {
    #[arg(long, default_value = "")]
    root: String,
    #[arg(long, default_value = "")]
    dir: String,
    #[arg(long, default_value = "")]
    base: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    ext: String,
  },

  /// Split a path into root, dir, base, name and ext
  Parse {
    #[arg(allow_hyphen_values = true)]
    path: String,
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Whether a path is absolute
  IsAbsolute {
    #[arg(allow_hyphen_values = true)]
    path: String,
  },

  /// Join segments and normalize the result
  Join {
    #[arg(allow_hyphen_values = true)]
    segments: Vec<String>,
  },

  /// Resolve `.` and `..` and collapse separators
  Normalize {
    #[arg(allow_hyphen_values = true)]
    path: String,
  },

  /// Relative route from one path to another
  Relative {
    #[arg(allow_hyphen_values = true)]
    from: String,
    #[arg(allow_hyphen_values = true)]
    to: String,
  },

  /// Resolve segments into an absolute path
  Resolve {
    #[arg(allow_hyphen_values = true)]
    segments: Vec<String>,
  },

  /// Namespace-prefixed form of a path (Windows only)
  ToNamespacedPath {
    #[arg(allow_hyphen_values = true)]
    path: String,
  },

  /// Segment separator of the active grammar
  Sep,

  /// PATH list delimiter of the active grammar
  Delimiter,
}

pub fn cmd_path(engine: &PathEngine, op: PathOp) -> Result<()> {
  let result = match op {
    PathOp::Basename { path, suffix } => engine.basename(&path, suffix.as_deref()),
    PathOp::Dirname { path } => engine.dirname(&path),
    PathOp::Extname { path } => engine.extname(&path),
    PathOp::Format {
      root,
      dir,
      base,
      name,
      ext,
    } => engine.format(&ParsedPath {
      root,
      dir,
      base,
      name,
      ext,
    }),
    PathOp::Parse { path, format } => return print_parsed(&engine.parse(&path), format),
    PathOp::IsAbsolute { path } => engine.is_absolute(&path).to_string(),
    PathOp::Join { segments } => engine.join(&as_strs(&segments)),
    PathOp::Normalize { path } => engine.normalize(&path),
    PathOp::Relative { from, to } => engine.relative(&from, &to),
    PathOp::Resolve { segments } => engine.resolve(&as_strs(&segments)),
    PathOp::ToNamespacedPath { path } => engine.to_namespaced_path(&path),
    PathOp::Sep => engine.sep().to_string(),
    PathOp::Delimiter => engine.delimiter().to_string(),
  };

  println!("{result}");
  Ok(())
}

fn as_strs(segments: &[String]) -> Vec<&str> {
  segments.iter().map(String::as_str).collect()
}

fn print_parsed(parsed: &ParsedPath, format: OutputFormat) -> Result<()> {
  if format.is_json() {
    return print_json(parsed);
  }

  print_stat("root", &parsed.root);
  print_stat("dir", &parsed.dir);
  print_stat("base", &parsed.base);
  print_stat("name", &parsed.name);
  print_stat("ext", &parsed.ext);
  Ok(())
}
