use crate::cli::Args;
use crate::git::{CommandRunner, Git};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::debug;

/// Write the static completion script for `shell`
pub fn print_script(shell: Shell, out: &mut impl Write) {
    let mut command = Args::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

/// Candidates for one completion topic; empty for unknown topics or when git fails
pub fn candidates<R: CommandRunner>(git: &Git<R>, topic: &str) -> Vec<String> {
    let fixed: &[&str] = match topic {
        "files" => return git.list_files().unwrap_or_else(|e| skipped(topic, e)),
        "branches" => return git.list_local_branches().unwrap_or_else(|e| skipped(topic, e)),
        "clean" => &["files", "dirs", "list"],
        "diff" => &["staged", "unstaged"],
        "reset" => &["clean"],
        "commit" => &["allow-empty", "amend"],
        _ => &[],
    };
    fixed.iter().map(|s| s.to_string()).collect()
}

fn skipped(topic: &str, err: impl std::fmt::Display) -> Vec<String> {
    debug!(topic, error = %err, "no completion candidates");
    Vec::new()
}

pub fn print_candidates<R: CommandRunner>(
    git: &Git<R>,
    topic: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    for candidate in candidates(git, topic) {
        writeln!(out, "{}", candidate)?;
    }
    Ok(())
}
