//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pkgwiz",
    bin_name = "pkgwiz",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Python package scaffolding",
    long_about = "pkgwiz lays out a ready-to-publish Python package: setup.py, \
                  requirements, dev container, pre-commit and a PyPI workflow. \
                  Existing files are never touched unless named with --override.",
    after_help = "EXAMPLES:\n\
        \x20 pkgwiz new data-tools\n\
        \x20 pkgwiz new data-tools --image python:3.12-slim --module io --module core\n\
        \x20 pkgwiz new data-tools --override gitignore --override setup\n\
        \x20 pkgwiz list\n\
        \x20 pkgwiz completions bash > /usr/share/bash-completion/completions/pkgwiz",
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
    /// Generate (or complete) a Python package.
    #[command(
        visible_alias = "n",
        about = "Create a new Python package",
        after_help = "EXAMPLES:\n\
            \x20 pkgwiz new my-package\n\
            \x20 pkgwiz new my-package --output ~/src --author 'Ada' --email ada@example.org\n\
            \x20 pkgwiz new my-package --dry-run\n\
            \x20 pkgwiz new my-package --force   # rewrite every generated file"
    )]
    New(NewArgs),

    /// List the files a package is made of.
    #[command(
        visible_alias = "ls",
        about = "List generated files and their ids",
        after_help = "EXAMPLES:\n\
            \x20 pkgwiz list\n\
            \x20 pkgwiz list --format json"
    )]
    List(ListArgs),

    /// Explain how to publish the generated package to PyPI.
    #[command(about = "Show PyPI publishing instructions")]
    PublishHelp,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pkgwiz init           # user config directory\n\
            \x20 pkgwiz init --local   # .pkgwiz.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pkgwiz completions bash > ~/.local/share/bash-completion/completions/pkgwiz\n\
            \x20 pkgwiz completions zsh  > ~/.zfunc/_pkgwiz\n\
            \x20 pkgwiz completions fish > ~/.config/fish/completions/pkgwiz.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pkgwiz config get defaults.docker_image\n\
            \x20 pkgwiz config list\n\
            \x20 pkgwiz config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `pkgwiz new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Distribution name. Hyphens become underscores in the import package.
    #[arg(value_name = "NAME", help = "Package name")]
    pub name: String,

    /// Directory the package root is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory of the package root"
    )]
    pub output: PathBuf,

    /// Base image for the dev container Dockerfile.
    #[arg(
        short = 'i',
        long = "image",
        value_name = "IMAGE",
        help = "Docker base image (default: python:3.9-slim)"
    )]
    pub image: Option<String>,

    /// Rewrite an existing file. Repeatable; takes a file id from `pkgwiz list`.
    #[arg(
        long = "override",
        value_name = "ID",
        action = clap::ArgAction::Append,
        help = "Overwrite the file with this id if it exists"
    )]
    pub overrides: Vec<String>,

    /// Add `<package>/<NAME>/__init__.py`. Repeatable.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "NAME",
        action = clap::ArgAction::Append,
        help = "Create a sub-module stub"
    )]
    pub modules: Vec<String>,

    /// Overwrite every generated file.
    #[arg(long = "force", conflicts_with = "overrides", help = "Overwrite all files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would happen without writing")]
    pub dry_run: bool,

    /// Author rendered into setup.py, README and LICENSE.
    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    /// Author email rendered into setup.py and README.
    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `pkgwiz list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned id / path columns.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pkgwiz init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.pkgwiz.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pkgwiz completions`.
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

/// Subcommands for `pkgwiz config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.docker_image`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
