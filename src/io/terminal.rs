//! Terminal host for interactive use.
//!
//! [`TerminalEditor`] keeps one file in memory with a byte-offset cursor.
//! [`TerminalPrompt`] renders choice lists as tables and reads the answer from
//! the same input stream the session reads its commands from.

use crate::commands::Command;
use crate::disambiguate::{ChoiceList, ChoicePrompt};
use crate::display::{THEME, choice_table, history_table};
use crate::editor::{Editor, word_bounds};
use crate::error::{TagError, TagResult};
use crate::navigator::{JumpOutcome, Navigator};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub struct TerminalEditor {
    file: Option<PathBuf>,
    content: String,
    cursor: usize,
    errors: Box<dyn Write>,
}

impl Default for TerminalEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEditor {
    pub fn new() -> Self {
        Self::with_error_writer(Box::new(io::stderr()))
    }

    pub fn with_error_writer(errors: Box<dyn Write>) -> Self {
        Self {
            file: None,
            content: String::new(),
            cursor: 0,
            errors,
        }
    }

    /// 1-based line of the cursor.
    pub fn current_line(&self) -> u32 {
        self.content[..self.cursor].matches('\n').count() as u32 + 1
    }

    pub fn line_text(&self) -> &str {
        let start = self.content[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let end = self.content[self.cursor..]
            .find('\n')
            .map(|idx| self.cursor + idx)
            .unwrap_or(self.content.len());
        &self.content[start..end]
    }

    /// Place the cursor on `column` (byte offset) of the current line.
    pub fn move_to_column(&mut self, column: usize) {
        let line_start = self.content[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let line_len = self.line_text().len();
        self.goto_position(line_start + column.min(line_len));
    }

    fn line_offset(&self, line: u32) -> usize {
        if line <= 1 {
            return 0;
        }
        self.content
            .match_indices('\n')
            .nth(line as usize - 2)
            .map(|(idx, _)| idx + 1)
            .unwrap_or(self.content.len())
    }
}

impl Editor for TerminalEditor {
    fn current_file(&self) -> Option<PathBuf> {
        self.file.clone()
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn word_at_caret(&self) -> Option<String> {
        word_bounds(&self.content, self.cursor)
            .map(|(start, end)| self.content[start..end].to_string())
    }

    fn open_file(&mut self, path: &Path) -> TagResult<()> {
        let bytes = std::fs::read(path).map_err(|e| TagError::open_file(path, e.to_string()))?;
        self.content = String::from_utf8_lossy(&bytes).into_owned();
        self.file = Some(path.to_path_buf());
        self.cursor = 0;
        Ok(())
    }

    fn goto_line(&mut self, line: u32) {
        self.cursor = self.line_offset(line);
    }

    fn goto_position(&mut self, position: usize) {
        let mut position = position.min(self.content.len());
        while !self.content.is_char_boundary(position) {
            position -= 1;
        }
        self.cursor = position;
    }

    fn buffer_lines(&self) -> Vec<String> {
        self.content.lines().map(String::from).collect()
    }

    fn report_error(&mut self, error: &TagError) {
        let _ = writeln!(self.errors, "{}", THEME.error_with_icon(&error.to_string()));
    }
}

pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator, `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, list: &ChoiceList) -> io::Result<Option<usize>> {
        let mut visible: Vec<usize> = (0..list.rows.len()).collect();
        loop {
            writeln!(self.output, "{}", THEME.apply(&THEME.header, &list.title))?;
            writeln!(self.output, "{}", choice_table(list, &visible))?;
            write!(
                self.output,
                "Select 1-{} (/text filters by file, empty cancels): ",
                visible.len()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            if let Some(filter) = answer.strip_prefix('/') {
                visible = list.filter(filter);
                if visible.is_empty() {
                    writeln!(self.output, "No file matches '{filter}'")?;
                    visible = (0..list.rows.len()).collect();
                }
                continue;
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=visible.len()).contains(&n) => return Ok(Some(visible[n - 1])),
                _ => writeln!(self.output, "Invalid choice '{answer}'")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ChoicePrompt for TerminalPrompt<R, W> {
    fn choose(&mut self, list: &ChoiceList) -> Option<usize> {
        self.ask(list).unwrap_or_else(|e| {
            tracing::warn!("choice prompt failed: {e}");
            None
        })
    }
}

const SESSION_HELP: &str = "\
Commands:
  tag NAME     jump to the definition of NAME
  word         jump to the definition of the word under the cursor
  back         jump back
  forward      jump forward
  open FILE    open FILE at line 1
  line N       move to line N
  col N        move to column N of the current line
  where        show the current position
  history      show the jump history
  help         show this message
  quit         leave the session";

/// Drive `navigator` from line commands until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    navigator: &mut Navigator,
    editor: &mut TerminalEditor,
    terminal: &mut TerminalPrompt<R, W>,
) -> io::Result<()> {
    writeln!(terminal.output(), "{SESSION_HELP}")?;
    loop {
        write!(terminal.output(), "> ")?;
        terminal.output().flush()?;
        let Some(line) = terminal.read_line()? else {
            return Ok(());
        };
        let (verb, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, Some(arg.trim())),
            None => (line.trim(), None),
        };

        let result = match (verb, arg) {
            ("", _) => continue,
            ("quit" | "exit" | "q", _) => return Ok(()),
            ("help", _) => {
                writeln!(terminal.output(), "{SESSION_HELP}")?;
                continue;
            }
            ("tag", Some(name)) => {
                navigator.execute(Command::GotoTag, editor, terminal, Some(name))
            }
            ("word", _) => navigator.execute(Command::GotoTag, editor, terminal, None),
            ("back", _) => navigator.execute(Command::JumpBack, editor, terminal, None),
            ("forward", _) => navigator.execute(Command::JumpForward, editor, terminal, None),
            ("open", Some(path)) => editor
                .open_file(Path::new(path))
                .map(|_| JumpOutcome::NoQuery),
            ("line", Some(n)) => {
                match n.parse::<u32>() {
                    Ok(line) => editor.goto_line(line),
                    Err(_) => writeln!(terminal.output(), "Invalid line '{n}'")?,
                }
                Ok(JumpOutcome::NoQuery)
            }
            ("col", Some(n)) => {
                match n.parse::<usize>() {
                    Ok(column) => editor.move_to_column(column),
                    Err(_) => writeln!(terminal.output(), "Invalid column '{n}'")?,
                }
                Ok(JumpOutcome::NoQuery)
            }
            ("where", _) => Ok(JumpOutcome::NoQuery),
            ("history", _) => {
                writeln!(terminal.output(), "{}", history_table(navigator.history()))?;
                continue;
            }
            _ => {
                writeln!(terminal.output(), "Unknown command '{}'; try 'help'", line.trim())?;
                continue;
            }
        };

        match result {
            Ok(JumpOutcome::NotFound) => writeln!(terminal.output(), "No definition found")?,
            Ok(JumpOutcome::Boundary) => writeln!(terminal.output(), "No further history")?,
            Ok(JumpOutcome::Cancelled) => writeln!(terminal.output(), "Cancelled")?,
            Ok(JumpOutcome::Jumped { entry, .. }) => writeln!(
                terminal.output(),
                "{} ({})",
                THEME.apply(&THEME.tag, &entry.name),
                entry.extra.replace('\t', " ")
            )?,
            Ok(_) => {}
            Err(e) => editor.report_error(&e),
        }
        print_position(terminal.output(), editor)?;
    }
}

fn print_position<W: Write>(out: &mut W, editor: &TerminalEditor) -> io::Result<()> {
    match editor.current_file() {
        Some(file) => writeln!(
            out,
            "{}  {}",
            THEME.location(&file, editor.current_line()),
            THEME.apply(&THEME.dim, editor.line_text().trim())
        ),
        None => writeln!(out, "(no file)"),
    }
}
