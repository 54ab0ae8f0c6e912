//! Windows path grammar.
//!
//! Both `\` and `/` separate segments on input; `\` is emitted. Roots come in
//! three shapes: a leading separator (`\foo`), a drive (`C:` or `C:\`), and a
//! UNC share (`\\server\share`).

use std::ops::Range;

use super::PathGrammar;
use super::common::{final_segment, normalize_segments, split_extension, strip_suffix, trim_dir};
use super::parsed::{ParsedPath, format_with};

/// Segment separator emitted on output.
pub const SEP: char = '\\';

/// `PATH` list delimiter.
pub const DELIMITER: char = ';';

fn is_sep(b: u8) -> bool {
  b == b'\\' || b == b'/'
}

fn is_drive_letter(b: u8) -> bool {
  b.is_ascii_alphabetic()
}

fn has_drive(bytes: &[u8]) -> bool {
  bytes.len() >= 2 && is_drive_letter(bytes[0]) && bytes[1] == b':'
}

/// How a Windows path is rooted.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Root {
  /// No root: `foo\bar`.
  None,
  /// Leading separator without a complete UNC share: `\foo`, `\\server`.
  Separator,
  /// Drive letter, optionally followed by a separator.
  Drive { absolute: bool },
  /// `\\server\share`, with byte ranges of both names.
  Unc { server: Range<usize>, share: Range<usize> },
}

fn scan_root(path: &str) -> Root {
  let bytes = path.as_bytes();
  let len = bytes.len();
  if len == 0 {
    return Root::None;
  }

  if is_sep(bytes[0]) {
    if len > 1 && is_sep(bytes[1]) {
      let skip_name = |mut j: usize| {
        while j < len && !is_sep(bytes[j]) {
          j += 1;
        }
        j
      };
      let skip_seps = |mut j: usize| {
        while j < len && is_sep(bytes[j]) {
          j += 1;
        }
        j
      };

      let server_end = skip_name(2);
      if server_end < len && server_end != 2 {
        let share_start = skip_seps(server_end);
        if share_start < len && share_start != server_end {
          let share_end = skip_name(share_start);
          return Root::Unc {
            server: 2..server_end,
            share: share_start..share_end,
          };
        }
      }
    }
    return Root::Separator;
  }

  if has_drive(bytes) {
    return Root::Drive {
      absolute: len > 2 && is_sep(bytes[2]),
    };
  }

  Root::None
}

/// Device prefix, root length and absoluteness of a path, as used by
/// `normalize` and `resolve`. UNC devices are rebuilt with `\` separators.
fn device_of(path: &str) -> (String, usize, bool) {
  match scan_root(path) {
    Root::None => (String::new(), 0, false),
    Root::Separator => (String::new(), 1, true),
    Root::Drive { absolute } => (path[..2].to_string(), if absolute { 3 } else { 2 }, absolute),
    Root::Unc { server, share } => (
      format!(r"\\{}\{}", &path[server], &path[share.clone()]),
      share.end,
      true,
    ),
  }
}

/// The Windows grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Windows;

impl Windows {
  /// Length of the root as `parse` reports it, including one trailing
  /// separator when present.
  fn parse_root_len(path: &str) -> usize {
    match scan_root(path) {
      Root::None => 0,
      Root::Separator => 1,
      Root::Drive { absolute } => {
        if absolute {
          3
        } else {
          2
        }
      }
      Root::Unc { share, .. } => {
        if share.end == path.len() {
          share.end
        } else {
          share.end + 1
        }
      }
    }
  }
}

impl PathGrammar for Windows {
  fn sep(&self) -> char {
    SEP
  }

  fn delimiter(&self) -> char {
    DELIMITER
  }

  fn basename(&self, path: &str, suffix: Option<&str>) -> String {
    // A drive prefix is never part of the final segment.
    let start = if has_drive(path.as_bytes()) { 2 } else { 0 };
    match final_segment(path, start, is_sep) {
      Some((seg_start, seg_end)) => strip_suffix(path, &path[seg_start..seg_end], suffix).to_string(),
      None => String::new(),
    }
  }

  fn dirname(&self, path: &str) -> String {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
      return ".".to_string();
    }
    if len == 1 {
      return if is_sep(bytes[0]) { path.to_string() } else { ".".to_string() };
    }

    let (root_end, offset) = match scan_root(path) {
      Root::None => (None, 0),
      Root::Separator => (Some(1), 1),
      Root::Drive { absolute } => {
        let end = if absolute { 3 } else { 2 };
        (Some(end), end)
      }
      Root::Unc { share, .. } => {
        if share.end == len {
          // Only the UNC root itself.
          return path.to_string();
        }
        (Some(share.end + 1), share.end + 1)
      }
    };

    let mut end = None;
    let mut matched_slash = true;
    for i in (offset..len).rev() {
      if is_sep(bytes[i]) {
        if !matched_slash {
          end = Some(i);
          break;
        }
      } else {
        matched_slash = false;
      }
    }

    match end.or(root_end) {
      Some(end) => path[..end].to_string(),
      None => ".".to_string(),
    }
  }

  fn extname(&self, path: &str) -> String {
    let start = if has_drive(path.as_bytes()) { 2 } else { 0 };
    match final_segment(path, start, is_sep) {
      Some((seg_start, seg_end)) => split_extension(&path[seg_start..seg_end]).1.to_string(),
      None => String::new(),
    }
  }

  fn format(&self, parsed: &ParsedPath) -> String {
    format_with(SEP, is_sep, parsed)
  }

  fn parse(&self, path: &str) -> ParsedPath {
    let mut parsed = ParsedPath::default();
    if path.is_empty() {
      return parsed;
    }

    let root_end = Self::parse_root_len(path);
    parsed.root = path[..root_end].to_string();

    match final_segment(path, root_end, is_sep) {
      Some((start, end)) => {
        let base = &path[start..end];
        let (name, ext) = split_extension(base);
        parsed.base = base.to_string();
        parsed.name = name.to_string();
        parsed.ext = ext.to_string();
        parsed.dir = if start > root_end {
          trim_dir(&path[..start - 1], root_end, is_sep).to_string()
        } else {
          parsed.root.clone()
        };
      }
      None => parsed.dir = parsed.root.clone(),
    }

    parsed
  }

  fn is_absolute(&self, path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes.first() {
      None => false,
      Some(&first) if is_sep(first) => true,
      Some(_) => bytes.len() > 2 && has_drive(bytes) && is_sep(bytes[2]),
    }
  }

  fn join(&self, segments: &[&str]) -> String {
    let mut parts = segments.iter().copied().filter(|segment| !segment.is_empty());
    let Some(first) = parts.next() else {
      return ".".to_string();
    };

    let mut joined = first.to_string();
    for part in parts {
      joined.push(SEP);
      joined.push_str(part);
    }

    // Only the first segment may introduce a UNC root. When separators from
    // later segments would create one, squash the leading run to a single
    // separator.
    let first_bytes = first.as_bytes();
    let mut needs_replace = true;
    let mut slash_count = 0;
    if first_bytes.first().is_some_and(|b| is_sep(*b)) {
      slash_count += 1;
      if first_bytes.len() > 1 && is_sep(first_bytes[1]) {
        slash_count += 1;
        if first_bytes.len() > 2 {
          if is_sep(first_bytes[2]) {
            slash_count += 1;
          } else {
            needs_replace = false;
          }
        }
      }
    }

    if needs_replace {
      let joined_bytes = joined.as_bytes();
      while slash_count < joined_bytes.len() && is_sep(joined_bytes[slash_count]) {
        slash_count += 1;
      }
      if slash_count >= 2 {
        joined = format!("{SEP}{}", &joined[slash_count..]);
      }
    }

    self.normalize(&joined)
  }

  fn normalize(&self, path: &str) -> String {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
      return ".".to_string();
    }
    if len == 1 {
      return if is_sep(bytes[0]) { SEP.to_string() } else { path.to_string() };
    }

    if let Root::Unc { server, share } = scan_root(path) {
      if share.end == len {
        // Only the UNC root; make sure it ends in a separator.
        return format!(r"\\{}\{}\", &path[server], &path[share]);
      }
    }

    let (device, root_end, is_absolute) = device_of(path);
    let mut tail = if root_end < len {
      normalize_segments(&path[root_end..], !is_absolute, SEP, is_sep)
    } else {
      String::new()
    };
    if tail.is_empty() && !is_absolute {
      tail.push('.');
    }
    if !tail.is_empty() && is_sep(bytes[len - 1]) {
      tail.push(SEP);
    }

    if is_absolute {
      format!("{device}{SEP}{tail}")
    } else {
      format!("{device}{tail}")
    }
  }

  fn relative(&self, from: &str, to: &str, cwd: &str) -> String {
    if from == to {
      return String::new();
    }

    let from_orig = self.resolve(&[from], cwd);
    let to_orig = self.resolve(&[to], cwd);
    if from_orig == to_orig || from_orig.eq_ignore_ascii_case(&to_orig) {
      return String::new();
    }

    let from_bytes = from_orig.as_bytes();
    let to_bytes = to_orig.as_bytes();
    let same = |a: u8, b: u8| a.eq_ignore_ascii_case(&b);

    let trim = |bytes: &[u8]| {
      let mut start = 0;
      while start < bytes.len() && bytes[start] == b'\\' {
        start += 1;
      }
      let mut end = bytes.len();
      while end > start + 1 && bytes[end - 1] == b'\\' {
        end -= 1;
      }
      (start, end)
    };
    let (from_start, from_end) = trim(from_bytes);
    let (mut to_start, to_end) = trim(to_bytes);
    let from_len = from_end - from_start;
    let to_len = to_end - to_start;

    let length = from_len.min(to_len);
    let mut last_common_sep: isize = -1;
    let mut i = 0;
    while i < length {
      let from_code = from_bytes[from_start + i];
      if !same(from_code, to_bytes[to_start + i]) {
        break;
      } else if from_code == b'\\' {
        last_common_sep = i as isize;
      }
      i += 1;
    }

    if i != length {
      if last_common_sep == -1 {
        // Different devices share no relative route.
        return to_orig;
      }
    } else {
      if to_len > length {
        if to_bytes[to_start + i] == b'\\' {
          // `from` is an exact prefix directory of `to`
          return to_orig[to_start + i + 1..].to_string();
        }
        if i == 2 {
          // `from` is a drive root such as `C:\`
          return to_orig[to_start + i..].to_string();
        }
      }
      if from_len > length {
        if from_bytes[from_start + i] == b'\\' {
          last_common_sep = i as isize;
        } else if i == 2 {
          last_common_sep = 3;
        }
      }
      if last_common_sep == -1 {
        last_common_sep = 0;
      }
    }

    let mut out = String::new();
    let walk_start = (from_start as isize + last_common_sep + 1) as usize;
    for j in walk_start..=from_end {
      if j == from_end || from_bytes[j] == b'\\' {
        if !out.is_empty() {
          out.push(SEP);
        }
        out.push_str("..");
      }
    }

    to_start = (to_start as isize + last_common_sep) as usize;
    if !out.is_empty() {
      return format!("{out}{}", &to_orig[to_start..to_end]);
    }
    if to_bytes.get(to_start) == Some(&b'\\') {
      to_start += 1;
    }
    to_orig[to_start..to_end].to_string()
  }

  fn resolve(&self, segments: &[&str], cwd: &str) -> String {
    let mut resolved_device = String::new();
    let mut resolved_tail = String::new();
    let mut resolved_absolute = false;

    let mut index = segments.len() as isize - 1;
    while index >= -1 {
      let path: String = if index >= 0 {
        segments[index as usize].to_string()
      } else if resolved_device.is_empty() {
        cwd.to_string()
      } else {
        // The working directory only applies when it sits on the same device.
        if device_of(cwd).0.eq_ignore_ascii_case(&resolved_device) {
          cwd.to_string()
        } else {
          format!("{resolved_device}{SEP}")
        }
      };
      index -= 1;

      if path.is_empty() {
        continue;
      }

      let (device, root_end, is_absolute) = device_of(&path);

      if !device.is_empty() {
        if !resolved_device.is_empty() {
          if !device.eq_ignore_ascii_case(&resolved_device) {
            // Belongs to another device.
            continue;
          }
        } else {
          resolved_device = device;
        }
      }

      if resolved_absolute {
        if !resolved_device.is_empty() {
          break;
        }
      } else {
        resolved_tail = format!("{}{SEP}{resolved_tail}", &path[root_end..]);
        resolved_absolute = is_absolute;
        if is_absolute && !resolved_device.is_empty() {
          break;
        }
      }
    }

    // A relative cwd counts as rooted, so the result is always absolute.
    let tail = normalize_segments(&resolved_tail, false, SEP, is_sep);
    format!("{resolved_device}{SEP}{tail}")
  }

  fn to_namespaced_path(&self, path: &str, cwd: &str) -> String {
    if path.is_empty() {
      return String::new();
    }

    let resolved = self.resolve(&[path], cwd);
    let bytes = resolved.as_bytes();
    if bytes.len() <= 2 {
      return path.to_string();
    }

    if bytes[0] == b'\\' {
      if bytes[1] == b'\\' && bytes[2] != b'?' && bytes[2] != b'.' {
        return format!(r"\\?\UNC\{}", &resolved[2..]);
      }
    } else if has_drive(bytes) && bytes[2] == b'\\' {
      return format!(r"\\?\{resolved}");
    }

    path.to_string()
  }
}
