//! CLI entry point for tag navigation.
//!
//! Provides commands for inspecting index discovery, listing tag candidates,
//! resolving a single definition, and an interactive navigation session.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use serde::Serialize;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tagjump::config::{CONFIG_DIR, CONFIG_FILE};
use tagjump::display::{THEME, TableBuilder};
use tagjump::io::{
    ExitCode, OutputFormat, OutputManager, TerminalEditor, TerminalPrompt, run_session,
};
use tagjump::{Editor, Locator, Navigator, Settings, TagEntry, TagError, disambiguate};
use tracing::{Level, debug};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Jump to tag definitions using ctags index files
#[derive(Parser)]
#[command(
    name = "tagjump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Jump to tag definitions using ctags index files",
    long_about = "Resolve symbol names through directory, project, registered and global ctags index files.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .tagjump directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(
        about = "Display active settings from .tagjump/settings.toml",
        after_help = "Examples:\n  tagjump config\n  TJ_HISTORY__CAPACITY=50 tagjump config --save .tagjump/settings.toml"
    )]
    Config {
        /// Write the effective settings, env overrides included, to this file
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },

    /// List the index files consulted for a source file
    #[command(
        about = "List index files in lookup order",
        after_help = "Examples:\n  tagjump sources\n  tagjump sources --file src/main.c"
    )]
    Sources {
        /// Source file the lookup starts from (defaults to the current directory)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List every candidate definition of a tag
    #[command(
        about = "List all definitions whose name starts with TAG",
        after_help = "Examples:\n  tagjump find parse_args\n  tagjump find parse --file src/main.c --json | jq '.data[].location'"
    )]
    Find {
        /// Tag name or prefix
        tag: String,

        /// Source file the lookup starts from
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Pick one definition and print its position
    #[command(
        about = "Resolve TAG to a single definition and print path:line",
        after_help = "Several candidates open a numbered choice list on the terminal."
    )]
    Show {
        /// Tag name or prefix
        tag: String,

        /// Source file the lookup starts from
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Interactive navigation session
    #[command(
        about = "Navigate definitions interactively with back/forward history",
        after_help = "Type 'help' inside the session for the command list."
    )]
    Session {
        /// File to open when the session starts
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct ShownDefinition {
    #[serde(flatten)]
    entry: TagEntry,
    line: Option<u32>,
}

impl std::fmt::Display for ShownDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}", THEME.location(&self.entry.location, line)),
            None => write!(f, "{}", self.entry.location.display()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SourceFile {
    path: PathBuf,
    exists: bool,
}

#[derive(Debug, Serialize)]
struct SourceList(Vec<SourceFile>);

impl std::fmt::Display for SourceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.0.iter().enumerate().fold(
            TableBuilder::new().set_headers(["#", "Index file", "Present"]),
            |table, (idx, source)| {
                table.add_row(vec![
                    (idx + 1).to_string(),
                    source.path.display().to_string(),
                    if source.exists { "yes" } else { "no" }.to_string(),
                ])
            },
        );
        write!(f, "{}", table.build())
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let settings = if let Some(config_path) = &cli.config {
        Settings::load_from(config_path).unwrap_or_else(|e| {
            eprintln!(
                "Configuration error loading from {}: {}",
                config_path.display(),
                e
            );
            std::process::exit(ExitCode::ConfigError.into());
        })
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        })
    };

    init_tracing(cli.verbose || settings.debug);

    if !matches!(cli.command, Commands::Init { .. })
        && let Err(reason) = Settings::check_init()
    {
        debug!("{reason}; using defaults");
    }

    let code = match run(&cli, &settings) {
        Ok(code) => code,
        Err(e) => {
            let mut output = OutputManager::new(OutputFormat::Text);
            output.error(&e).unwrap_or(ExitCode::from_error(&e))
        }
    };
    debug!("exit {}: {}", i32::from(code), code.description());
    std::process::exit(code.into());
}

fn run(cli: &Cli, settings: &Settings) -> Result<ExitCode, TagError> {
    match &cli.command {
        Commands::Init { force } => {
            let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() && !force {
                eprintln!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                eprintln!("Use --force to overwrite");
                return Ok(ExitCode::GeneralError);
            }

            let path = Settings::init_config_file(*force)
                .map_err(|e| TagError::config(e.to_string()))?;
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to register project and global index files.");
            Ok(ExitCode::Success)
        }

        Commands::Config { save: Some(path) } => {
            settings
                .save(path)
                .map_err(|e| TagError::config(e.to_string()))?;
            println!("Saved configuration to: {}", path.display());
            Ok(ExitCode::Success)
        }

        Commands::Config { save: None } => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            let toml_str =
                toml::to_string_pretty(settings).map_err(|e| TagError::config(e.to_string()))?;
            println!("{toml_str}");
            Ok(ExitCode::Success)
        }

        Commands::Sources { file } => {
            let navigator = Navigator::from_settings(settings);
            let sources = navigator
                .resolver()
                .candidate_files(file.as_deref())
                .into_iter()
                .map(|path| SourceFile {
                    exists: path.is_file(),
                    path,
                })
                .collect();
            let mut output = OutputManager::new(OutputFormat::Text);
            Ok(output.success(SourceList(sources))?)
        }

        Commands::Find { tag, file, json } => {
            let navigator = Navigator::from_settings(settings);
            let mut output = OutputManager::new(OutputFormat::from_json_flag(*json));
            let resolution = navigator.resolver().resolve(file.as_deref(), tag);
            for failure in &resolution.failures {
                output.warning(failure)?;
            }
            Ok(output.entries(tag, &resolution.entries)?)
        }

        Commands::Show { tag, file, json } => {
            let navigator = Navigator::from_settings(settings);
            let mut output = OutputManager::new(OutputFormat::from_json_flag(*json));
            let resolution = navigator.resolver().resolve(file.as_deref(), tag);
            for failure in &resolution.failures {
                output.warning(failure)?;
            }
            if resolution.is_empty() {
                return Ok(output.not_found("Tag", tag)?);
            }

            let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());
            let Some(entry) = disambiguate(tag, resolution.entries, &mut prompt) else {
                output.info("Cancelled")?;
                return Ok(ExitCode::NotFound);
            };
            let line = definition_line(&entry)?;
            Ok(output.success(ShownDefinition { entry, line })?)
        }

        Commands::Session { file } => {
            let mut navigator = Navigator::from_settings(settings);
            let mut editor = TerminalEditor::new();
            if let Some(file) = file {
                editor.open_file(file)?;
            }
            let mut terminal = TerminalPrompt::new(BufReader::new(io::stdin()), io::stdout());
            run_session(&mut navigator, &mut editor, &mut terminal)?;
            Ok(ExitCode::Success)
        }
    }
}

/// Line a definition sits on, reading the target file for pattern locators.
fn definition_line(entry: &TagEntry) -> Result<Option<u32>, TagError> {
    match &entry.locator {
        Locator::Line(line) => Ok(Some(*line)),
        pattern @ Locator::Pattern(_) => {
            let bytes = std::fs::read(&entry.location)
                .map_err(|e| TagError::open_file(&entry.location, e.to_string()))?;
            Ok(pattern.find_in(String::from_utf8_lossy(&bytes).lines()))
        }
    }
}
