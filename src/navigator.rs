//! Go-to-definition and back/forward navigation.
//!
//! A tag jump runs resolve -> disambiguate -> record departure -> move ->
//! record arrival. Back/forward only touch the history and the editor.

use crate::commands::{Command, CommandRegistry};
use crate::config::Settings;
use crate::disambiguate::{ChoicePrompt, disambiguate};
use crate::editor::Editor;
use crate::error::TagResult;
use crate::history::{JumpHistory, JumpRecord};
use crate::project_resolver::MarkerRootProvider;
use crate::tags::{IndexResolver, Locator, TagEntry};
use std::sync::Arc;
use tracing::debug;

/// What a navigation request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Moved to a tag definition
    Jumped {
        from: Option<JumpRecord>,
        to: JumpRecord,
        entry: TagEntry,
    },
    /// Moved to a history record
    Moved(JumpRecord),
    /// No query: no explicit tag and no identifier under the caret
    NoQuery,
    NotFound,
    /// The user declined to pick among several candidates
    Cancelled,
    /// Already at the oldest or newest history record
    Boundary,
}

impl JumpOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Jumped { .. } | Self::Moved(_))
    }
}

pub struct Navigator {
    resolver: IndexResolver,
    history: JumpHistory,
    commands_registered: bool,
}

impl Navigator {
    pub fn new(resolver: IndexResolver, history: JumpHistory) -> Self {
        Self {
            resolver,
            history,
            commands_registered: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let roots = Arc::new(MarkerRootProvider::new(settings.project.markers.clone()));
        let resolver = IndexResolver::new(settings.registry(), roots)
            .with_index_name(settings.tags.file_name.clone());
        Self::new(resolver, JumpHistory::with_capacity(settings.history.capacity))
    }

    pub fn resolver(&self) -> &IndexResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut IndexResolver {
        &mut self.resolver
    }

    pub fn history(&self) -> &JumpHistory {
        &self.history
    }

    /// Second startup phase: expose commands once the host is ready.
    ///
    /// Returns `false` if the commands were already registered.
    pub fn register_commands(&mut self, registry: &mut dyn CommandRegistry) -> bool {
        if self.commands_registered {
            return false;
        }
        for command in Command::ALL {
            registry.register(command);
        }
        self.commands_registered = true;
        true
    }

    pub fn commands_registered(&self) -> bool {
        self.commands_registered
    }

    pub fn execute(
        &mut self,
        command: Command,
        editor: &mut dyn Editor,
        prompt: &mut dyn ChoicePrompt,
        tag: Option<&str>,
    ) -> TagResult<JumpOutcome> {
        match command {
            Command::GotoTag => self.goto_tag(editor, prompt, tag),
            Command::JumpBack => self.jump_back(editor),
            Command::JumpForward => self.jump_forward(editor),
        }
    }

    /// Jump to the definition of `tag`, or of the identifier under the caret.
    ///
    /// Unreadable index files are reported through the editor and do not
    /// stop the jump. Failing to open the target is returned as an error.
    pub fn goto_tag(
        &mut self,
        editor: &mut dyn Editor,
        prompt: &mut dyn ChoicePrompt,
        tag: Option<&str>,
    ) -> TagResult<JumpOutcome> {
        let query = match tag {
            Some(tag) => Some(tag.to_string()),
            None => editor.word_at_caret(),
        };
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(JumpOutcome::NoQuery);
        };

        let current_file = editor.current_file();
        debug!("resolving '{query}'");
        let resolution = self.resolver.resolve(current_file.as_deref(), &query);
        for failure in &resolution.failures {
            editor.report_error(failure);
        }
        if resolution.is_empty() {
            debug!("no definition for '{query}'");
            return Ok(JumpOutcome::NotFound);
        }

        debug!("{} candidates for '{query}'", resolution.entries.len());
        let Some(entry) = disambiguate(&query, resolution.entries, prompt) else {
            return Ok(JumpOutcome::Cancelled);
        };

        let from = current_file.map(|file| JumpRecord::new(file, editor.cursor_position()));
        if let Some(from) = &from {
            self.history.push(from.location.clone(), from.position);
        }

        debug!("jumping to {entry}");
        editor.open_file(&entry.location)?;
        match &entry.locator {
            Locator::Line(line) => editor.goto_line(*line),
            pattern @ Locator::Pattern(_) => {
                if let Some(line) = pattern.find_in(editor.buffer_lines()) {
                    editor.goto_line(line);
                }
            }
        }

        let to = JumpRecord::new(
            editor
                .current_file()
                .unwrap_or_else(|| entry.location.clone()),
            editor.cursor_position(),
        );
        self.history.push(to.location.clone(), to.position);

        Ok(JumpOutcome::Jumped { from, to, entry })
    }

    pub fn jump_back(&mut self, editor: &mut dyn Editor) -> TagResult<JumpOutcome> {
        let record = self.history.step_back().cloned();
        Self::move_to(editor, record)
    }

    pub fn jump_forward(&mut self, editor: &mut dyn Editor) -> TagResult<JumpOutcome> {
        let record = self.history.step_forward().cloned();
        Self::move_to(editor, record)
    }

    fn move_to(editor: &mut dyn Editor, record: Option<JumpRecord>) -> TagResult<JumpOutcome> {
        let Some(record) = record else {
            return Ok(JumpOutcome::Boundary);
        };
        editor.open_file(&record.location)?;
        editor.goto_position(record.position);
        Ok(JumpOutcome::Moved(record))
    }
}
