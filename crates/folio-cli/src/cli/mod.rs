//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "folio",
    bin_name = "folio",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c2} Portfolio content validation",
    long_about = "Folio validates and sanitizes portfolio content \
                  (profile, quick links, experiences, projects) so broken \
                  data never reaches a rendered page.",
    after_help = "EXAMPLES:\n\
        \x20 folio check                # validate ./content\n\
        \x20 folio check site/content --output-format json\n\
        \x20 folio show                 # print sanitized content\n\
        \x20 folio init content         # write starter content files\n\
        \x20 folio completions bash > /usr/share/bash-completion/completions/folio",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a content directory.
    #[command(
        visible_alias = "c",
        about = "Validate content files",
        after_help = "EXAMPLES:\n\
            \x20 folio check\n\
            \x20 folio check site/content\n\
            \x20 folio check --output-format json | jq '.errors'"
    )]
    Check(CheckArgs),

    /// Print sanitized content as JSON.
    #[command(
        about = "Print sanitized content",
        after_help = "EXAMPLES:\n\
            \x20 folio show\n\
            \x20 folio show site/content > sanitized.json"
    )]
    Show(ShowArgs),

    /// Write starter content files into a directory.
    #[command(
        about = "Create a starter content directory",
        after_help = "EXAMPLES:\n\
            \x20 folio init            # writes ./content\n\
            \x20 folio init site/content --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 folio completions bash > ~/.local/share/bash-completion/completions/folio\n\
            \x20 folio completions zsh  > ~/.zfunc/_folio\n\
            \x20 folio completions fish > ~/.config/fish/completions/folio.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Folio configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 folio config get content.dir\n\
            \x20 folio config list\n\
            \x20 folio config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `folio check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Content directory to validate.  Defaults to the configured
    /// `content.dir` (usually `./content`).
    #[arg(value_name = "PATH", help = "Content directory")]
    pub path: Option<PathBuf>,

    /// Keep going and report success even when content is invalid.
    #[arg(
        long = "no-fail",
        help = "Exit 0 even when validation errors are found"
    )]
    pub no_fail: bool,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `folio show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Content directory to read.  Defaults to the configured `content.dir`.
    #[arg(value_name = "PATH", help = "Content directory")]
    pub path: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `folio init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create the starter content in.
    #[arg(value_name = "DIR", help = "Target directory", default_value = "content")]
    pub dir: PathBuf,

    /// Overwrite existing content files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing content files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `folio completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `folio config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `content.dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
