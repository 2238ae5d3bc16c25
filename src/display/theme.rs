//! Consistent color theme and styling for terminal output.

use console::Style;
use owo_colors::OwoColorize;
use std::sync::LazyLock;

/// Global theme instance for consistent styling across the application.
pub static THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

#[derive(Debug, Clone)]
pub struct Theme {
    pub error: Style,
    pub warning: Style,
    pub header: Style,
    /// Tag names
    pub tag: Style,
    /// File paths
    pub path: Style,
    /// Line numbers and search patterns
    pub locator: Style,
    /// Secondary text
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            error: Style::new().red().bright(),
            warning: Style::new().yellow().bright(),
            header: Style::new().cyan().bold(),
            tag: Style::new().yellow(),
            path: Style::new().magenta(),
            locator: Style::new().cyan(),
            dim: Style::new().dim(),
        }
    }
}

impl Theme {
    /// Format an error message with X mark.
    pub fn error_with_icon(&self, text: &str) -> String {
        if Self::should_disable_colors() {
            format!("✗ {text}")
        } else {
            format!("{} {}", "✗".red(), self.error.apply_to(text))
        }
    }

    /// Format a warning message with warning sign.
    pub fn warning_with_icon(&self, text: &str) -> String {
        if Self::should_disable_colors() {
            format!("⚠ {text}")
        } else {
            format!("{} {}", "⚠".yellow(), self.warning.apply_to(text))
        }
    }

    /// `path:line` with path and line styled separately.
    pub fn location(&self, path: &std::path::Path, line: u32) -> String {
        format!(
            "{}:{}",
            self.apply(&self.path, path.display()),
            self.apply(&self.locator, line)
        )
    }

    /// Check if color output should be disabled.
    pub fn should_disable_colors() -> bool {
        use is_terminal::IsTerminal;
        std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal()
    }

    /// Apply theme styling conditionally based on terminal support.
    pub fn apply<T: std::fmt::Display>(&self, style: &Style, text: T) -> String {
        if Self::should_disable_colors() {
            text.to_string()
        } else {
            style.apply_to(text).to_string()
        }
    }
}
