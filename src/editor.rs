//! Host editor collaborator.

use crate::error::{TagError, TagResult};
use std::path::{Path, PathBuf};

/// The slice of the host editor the navigator relies on.
pub trait Editor {
    /// Path of the buffer being edited, if it is backed by a file.
    fn current_file(&self) -> Option<PathBuf>;

    /// Opaque cursor offset in the current buffer.
    fn cursor_position(&self) -> usize;

    /// Identifier under the caret.
    fn word_at_caret(&self) -> Option<String>;

    fn open_file(&mut self, path: &Path) -> TagResult<()>;

    /// Move to a 1-based line of the current buffer.
    fn goto_line(&mut self, line: u32);

    fn goto_position(&mut self, position: usize);

    /// Lines of the current buffer, used for pattern locators.
    fn buffer_lines(&self) -> Vec<String>;

    /// Standard error-reporting channel of the host.
    fn report_error(&mut self, error: &TagError);
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Byte range of the identifier touching `offset` in `text`.
///
/// A caret directly after a word still selects that word.
pub fn word_bounds(text: &str, offset: usize) -> Option<(usize, usize)> {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let start = text[..offset]
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_word_char(*ch))
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(offset);
    let end = text[offset..]
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map(|(idx, _)| offset + idx)
        .unwrap_or(text.len());

    (start < end).then_some((start, end))
}
