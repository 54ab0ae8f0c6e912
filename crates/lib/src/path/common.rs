//! Scanning helpers shared by both grammars.
//!
//! Every separator, dot and colon the grammars care about is ASCII, so the
//! helpers scan bytes and slice the input `&str` at the byte offsets they
//! find. Those offsets always fall on character boundaries.

/// Byte predicate identifying a separator in a grammar.
pub(crate) type IsSep = fn(u8) -> bool;

/// Resolve `.` and `..` segments and collapse separator runs.
///
/// Works on the part of a path after its root. When `allow_above_root` is
/// set, `..` segments that cannot be cancelled are kept as literal leading
/// `..` segments; otherwise they are dropped.
pub(crate) fn normalize_segments(path: &str, allow_above_root: bool, separator: char, is_sep: IsSep) -> String {
  let bytes = path.as_bytes();
  let mut res = String::with_capacity(path.len());
  let mut last_segment_length = 0usize;
  let mut last_slash: isize = -1;
  let mut dots: i32 = 0;
  let mut code: u8 = 0;

  for i in 0..=bytes.len() {
    if i < bytes.len() {
      code = bytes[i];
    } else if is_sep(code) {
      break;
    } else {
      code = b'/';
    }

    if is_sep(code) {
      let i = i as isize;
      if last_slash == i - 1 || dots == 1 {
        // empty segment or `.`
      } else if dots == 2 {
        let ends_in_parent = res.len() >= 2 && last_segment_length == 2 && res.ends_with("..");
        if !ends_in_parent {
          if res.len() > 2 {
            match res.rfind(separator) {
              Some(idx) => {
                res.truncate(idx);
                last_segment_length = match res.rfind(separator) {
                  Some(p) => res.len() - 1 - p,
                  None => res.len(),
                };
              }
              None => {
                res.clear();
                last_segment_length = 0;
              }
            }
            last_slash = i;
            dots = 0;
            continue;
          } else if !res.is_empty() {
            res.clear();
            last_segment_length = 0;
            last_slash = i;
            dots = 0;
            continue;
          }
        }
        if allow_above_root {
          if !res.is_empty() {
            res.push(separator);
          }
          res.push_str("..");
          last_segment_length = 2;
        }
      } else {
        let segment = &path[(last_slash + 1) as usize..i as usize];
        if !res.is_empty() {
          res.push(separator);
        }
        res.push_str(segment);
        last_segment_length = segment.len();
      }
      last_slash = i;
      dots = 0;
    } else if code == b'.' && dots != -1 {
      dots += 1;
    } else {
      dots = -1;
    }
  }

  res
}

/// Locate the final segment of `path`, ignoring trailing separators and
/// anything before `start`.
///
/// Returns `(segment_start, segment_end)` as byte offsets. `segment_start`
/// equals `start` when no separator precedes the segment. Returns `None`
/// when `path[start..]` holds nothing but separators.
pub(crate) fn final_segment(path: &str, start: usize, is_sep: IsSep) -> Option<(usize, usize)> {
  let bytes = path.as_bytes();
  let mut end = None;

  for i in (start..bytes.len()).rev() {
    if is_sep(bytes[i]) {
      if let Some(end) = end {
        return Some((i + 1, end));
      }
    } else if end.is_none() {
      end = Some(i + 1);
    }
  }

  end.map(|end| (start, end))
}

/// Split a final segment into `(name, ext)`.
///
/// Leading dots belong to the name. The extension runs from the last `.`
/// after the first non-dot character to the end of the segment.
pub(crate) fn split_extension(base: &str) -> (&str, &str) {
  let Some(stem_start) = base.bytes().position(|b| b != b'.') else {
    return (base, "");
  };

  match base[stem_start..].rfind('.') {
    Some(offset) => base.split_at(stem_start + offset),
    None => (base, ""),
  }
}

/// Strip `suffix` from the final segment of `path`.
///
/// Matching is case-sensitive in both grammars. A suffix covering the whole
/// segment is kept, unless it covers the whole input, which yields `""`.
pub(crate) fn strip_suffix<'a>(path: &str, base: &'a str, suffix: Option<&str>) -> &'a str {
  match suffix {
    Some(suffix) if !suffix.is_empty() && suffix.len() <= path.len() => {
      if suffix == path {
        return "";
      }
      match base.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem,
        _ => base,
      }
    }
    _ => base,
  }
}

/// Trim trailing separators from `dir` without eating into the root.
pub(crate) fn trim_dir(dir: &str, root_len: usize, is_sep: IsSep) -> &str {
  let bytes = dir.as_bytes();
  let mut end = bytes.len();
  while end > root_len && is_sep(bytes[end - 1]) {
    end -= 1;
  }
  &dir[..end]
}
