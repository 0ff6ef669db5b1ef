use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Convenience commands over git with an interactive clean selector
#[derive(Parser, Debug)]
#[command(name = "gitease")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Run as if git was started in this directory
    #[arg(short = 'C', long = "repo", global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage files (or hunks with --patch)
    Add {
        /// Choose hunks interactively
        #[arg(short, long, conflicts_with = "paths")]
        patch: bool,

        /// Files or directories to stage
        #[arg(required_unless_present = "patch")]
        paths: Vec<String>,
    },

    /// Commit with a message: <message>, allow-empty, or amend [--no-edit|<message>]
    Commit {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Remove untracked files (interactive selection without a mode)
    Clean {
        #[command(subcommand)]
        mode: Option<CleanMode>,
    },

    /// Show changes (against HEAD by default)
    Diff {
        #[arg(value_enum)]
        target: Option<DiffArg>,
    },

    /// Hard reset to HEAD and remove untracked files
    Reset {
        #[arg(value_enum)]
        mode: Option<ResetArg>,

        /// Skip the confirmation prompt (for CI/scripts)
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print dynamic completion candidates
    #[command(name = "__complete", hide = true)]
    Complete { topic: String },
}

#[derive(Subcommand, Debug)]
pub enum CleanMode {
    /// Remove every untracked file
    Files,
    /// Remove every untracked file and directory
    Dirs,
    /// Show what would be removed
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffArg {
    /// Working tree against the index
    Unstaged,
    /// Index against HEAD
    Staged,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetArg {
    /// Remove untracked files but keep untracked directories
    Clean,
}
