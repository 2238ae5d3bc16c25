#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tagjump::{
    ChoiceList, ChoicePrompt, Command, CommandRegistry, Editor, IndexResolver, JumpHistory,
    Navigator, ProjectRootProvider, TagError, TagRegistry, TagResult,
};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Navigator whose project root is always this directory.
    pub fn navigator(&self) -> Navigator {
        self.navigator_with(TagRegistry::new())
    }

    pub fn navigator_with(&self, registry: TagRegistry) -> Navigator {
        let roots = Arc::new(FixedRoot(Some(self.path().to_path_buf())));
        Navigator::new(IndexResolver::new(registry, roots), JumpHistory::new())
    }

    pub fn resolver(&self, registry: TagRegistry) -> IndexResolver {
        IndexResolver::new(registry, Arc::new(FixedRoot(Some(self.path().to_path_buf()))))
    }
}

pub struct FixedRoot(pub Option<PathBuf>);

impl ProjectRootProvider for FixedRoot {
    fn project_root(&self, _path: &Path) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Editor that reads real files and tracks the cursor as a byte offset.
#[derive(Default)]
pub struct MockEditor {
    pub file: Option<PathBuf>,
    pub content: String,
    pub position: usize,
    pub word: Option<String>,
    pub errors: Vec<String>,
}

impl MockEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(path: &Path) -> Self {
        let mut editor = Self::new();
        editor.open_file(path).expect("Failed to open file");
        editor
    }

    pub fn line(&self) -> usize {
        self.content[..self.position].matches('\n').count() + 1
    }
}

impl Editor for MockEditor {
    fn current_file(&self) -> Option<PathBuf> {
        self.file.clone()
    }

    fn cursor_position(&self) -> usize {
        self.position
    }

    fn word_at_caret(&self) -> Option<String> {
        self.word.clone()
    }

    fn open_file(&mut self, path: &Path) -> TagResult<()> {
        self.content =
            fs::read_to_string(path).map_err(|e| TagError::open_file(path, e.to_string()))?;
        self.file = Some(path.to_path_buf());
        self.position = 0;
        Ok(())
    }

    fn goto_line(&mut self, line: u32) {
        self.position = if line <= 1 {
            0
        } else {
            self.content
                .match_indices('\n')
                .nth(line as usize - 2)
                .map(|(idx, _)| idx + 1)
                .unwrap_or(self.content.len())
        };
    }

    fn goto_position(&mut self, position: usize) {
        self.position = position.min(self.content.len());
    }

    fn buffer_lines(&self) -> Vec<String> {
        self.content.lines().map(String::from).collect()
    }

    fn report_error(&mut self, error: &TagError) {
        self.errors.push(error.to_string());
    }
}

/// Prompt that answers from a script and remembers what it was shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answers: Vec<Option<usize>>,
    pub shown: Vec<ChoiceList>,
}

impl ScriptedPrompt {
    pub fn answering(answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        let mut answers: Vec<_> = answers.into_iter().collect();
        answers.reverse();
        Self {
            answers,
            shown: Vec::new(),
        }
    }
}

impl ChoicePrompt for ScriptedPrompt {
    fn choose(&mut self, list: &ChoiceList) -> Option<usize> {
        self.shown.push(list.clone());
        self.answers.pop().flatten()
    }
}

#[derive(Default)]
pub struct RecordingRegistry {
    pub commands: Vec<Command>,
}

impl CommandRegistry for RecordingRegistry {
    fn register(&mut self, command: Command) {
        self.commands.push(command);
    }
}

pub mod sample_index {
    pub const BASIC: &str = "foo\tsrc/a.c\t10;\"\tf\nbar\tsrc/b.c\t/^int bar(void)$/;\"\tf\n";

    pub const SORTED: &str = "\
!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted/
alpha\tsrc/alpha.c\t1;\"\tf
bar\tsrc/b.c\t/^int bar(void)$/;\"\tf
bar_init\tsrc/b.c\t/^void bar_init(void)$/;\"\tf
baz\tsrc/z.c\t4;\"\tv
foo\tsrc/a.c\t10;\"\tf
foo\tsrc/c.c\t/^static int foo;$/;\"\tv
zeta\tsrc/zeta.c\t2;\"\tf
";

    pub const A_C: &str = "#include \"a.h\"\n\n\n\n\n\n\n\n\nint foo(void)\n{\n    return bar();\n}\n";

    pub const B_C: &str = "#include \"b.h\"\n\nint bar(void)\n{\n    return 0;\n}\n";

    pub const C_C: &str = "// c\nstatic int foo;\n";
}
