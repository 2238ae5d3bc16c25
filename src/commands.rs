//! Commands exposed to the host's command surface.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Jump to the tag under the caret, or to an explicit tag name
    GotoTag,
    JumpBack,
    JumpForward,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::GotoTag, Command::JumpBack, Command::JumpForward];

    /// Stable identifier used for key bindings.
    pub fn id(&self) -> &'static str {
        match self {
            Self::GotoTag => "tagjump.goto_tag",
            Self::JumpBack => "tagjump.jump_back",
            Self::JumpForward => "tagjump.jump_forward",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::GotoTag => "Go to Tag",
            Self::JumpBack => "Jump Back",
            Self::JumpForward => "Jump Forward",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Host command surface. Registration happens once the host reports it is
/// initialized, so key-binding hints are already in place.
pub trait CommandRegistry {
    fn register(&mut self, command: Command);
}
