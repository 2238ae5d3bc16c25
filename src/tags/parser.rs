//! Line grammar for ctags index files.
//!
//! ```text
//! <tag>\t<file>\t<ex_cmd>[;"[\t<ext_fields>]]
//! ```
//!
//! `ex_cmd` is a bare line number or a `/pattern/` (`?pattern?`) search
//! command. Search patterns may contain tabs and escaped delimiters, so the
//! closing delimiter is located before looking for the `;"` terminator.

use super::{Locator, TagEntry};
use std::path::{Path, PathBuf};

/// Parse one index line into a [`TagEntry`].
///
/// Relative file paths are joined onto `index_dir`. Returns `None` for lines
/// that do not have the tab-separated shape (they are skipped by callers).
pub fn parse_line(line: &str, index_dir: &Path) -> Option<TagEntry> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut fields = line.splitn(3, '\t');
    let name = fields.next().filter(|name| !name.is_empty())?;
    let file = fields.next().filter(|file| !file.is_empty())?;
    let rest = fields.next()?;

    let (ex_cmd, extra) = split_ex_cmd(rest);
    if ex_cmd.is_empty() {
        return None;
    }

    let location = if is_rooted(file) {
        PathBuf::from(file)
    } else {
        index_dir.join(file)
    };

    Some(TagEntry {
        name: name.to_string(),
        location,
        locator: parse_locator(ex_cmd),
        extra: extra.to_string(),
    })
}

/// Whether a raw index path is already rooted.
///
/// Rooted means an optional single-letter drive prefix followed by `/` or
/// `\`, or a leading `/` or `\`.
pub fn is_rooted(path: &str) -> bool {
    matches!(
        path.as_bytes(),
        [b'/' | b'\\', ..] | [b'A'..=b'Z' | b'a'..=b'z', b':', b'/' | b'\\', ..]
    )
}

/// Normalize an ex command into a [`Locator`].
pub fn parse_locator(ex_cmd: &str) -> Locator {
    if let Some(body) = search_body(ex_cmd) {
        return Locator::Pattern(body);
    }

    match ex_cmd.trim().parse::<u32>() {
        Ok(line) => Locator::Line(line),
        Err(_) => Locator::Pattern(ex_cmd.to_string()),
    }
}

/// Strip search delimiters and anchors from `/^text$/`, unescaping `\/`.
fn search_body(ex_cmd: &str) -> Option<String> {
    let delimiter = match ex_cmd.chars().next()? {
        d @ ('/' | '?') => d,
        _ => return None,
    };

    let inner = &ex_cmd[1..];
    let inner = match closing_delimiter(ex_cmd, delimiter) {
        Some(end) => &ex_cmd[1..end],
        None => inner,
    };

    let inner = inner.strip_prefix('^').unwrap_or(inner);
    let inner = match inner.strip_suffix('$') {
        Some(stripped) if !stripped.ends_with('\\') => stripped,
        _ => inner,
    };

    Some(unescape(inner, delimiter))
}

/// Byte offset of the first unescaped `delimiter` after the opening one.
fn closing_delimiter(ex_cmd: &str, delimiter: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in ex_cmd.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == delimiter => return Some(idx),
            _ => {}
        }
    }
    None
}

fn unescape(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some(&next) if next == delimiter || next == '\\' => {
                    out.push(next);
                    chars.next();
                    continue;
                }
                _ => {}
            }
        }
        out.push(ch);
    }
    out
}

/// Split the remainder after `<file>\t` into `(ex_cmd, ext_fields)`.
fn split_ex_cmd(rest: &str) -> (&str, &str) {
    let search_end = match rest.chars().next() {
        Some(d @ ('/' | '?')) => closing_delimiter(rest, d).map(|idx| idx + 1),
        _ => None,
    };

    let from = search_end.unwrap_or(0);
    if let Some(offset) = rest[from..].find(";\"") {
        let cut = from + offset;
        let extra = rest[cut + 2..].trim_start_matches('\t');
        return (&rest[..cut], extra);
    }

    // Old-style lines without the `;"` terminator
    match search_end {
        Some(end) => (&rest[..end], rest[end..].trim_start_matches('\t')),
        None => match rest.split_once('\t') {
            Some((ex_cmd, extra)) => (ex_cmd, extra),
            None => (rest, ""),
        },
    }
}
