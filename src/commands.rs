use crate::git::{CommandRunner, DiffTarget, Git};
use crate::output;
use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::io::Write;

/// What the words after `commit` ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRequest {
    AllowEmpty,
    /// Reopen the last commit in the editor
    Amend,
    AmendNoEdit,
    AmendWithMessage(String),
    Message(String),
}

impl CommitRequest {
    pub fn from_words(words: &[String]) -> Option<Self> {
        let (first, rest) = words.split_first()?;
        let request = match (first.as_str(), rest) {
            ("allow-empty", []) => Self::AllowEmpty,
            ("amend", []) => Self::Amend,
            ("amend", [flag]) if flag == "--no-edit" => Self::AmendNoEdit,
            ("amend", rest) => Self::AmendWithMessage(rest.join(" ")),
            _ => Self::Message(words.join(" ")),
        };
        Some(request)
    }
}

/// Destructive reset variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// `reset --hard HEAD` then remove untracked files and directories
    HardAndClean,
    /// `reset --hard HEAD` then remove untracked files only
    Clean,
}

pub fn add<R: CommandRunner>(git: &Git<R>, paths: &[String], patch: bool) -> Result<()> {
    if patch {
        git.add_patch()?;
        return Ok(());
    }
    if paths.is_empty() {
        bail!("nothing to add; pass one or more paths or --patch");
    }
    git.add(paths)?;
    Ok(())
}

pub fn commit<R: CommandRunner>(
    git: &Git<R>,
    words: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let Some(request) = CommitRequest::from_words(words) else {
        bail!("usage: gitease commit <message>|allow-empty|amend [--no-edit|<message>]");
    };

    let summary = match request {
        CommitRequest::AllowEmpty => git.commit_allow_empty()?,
        CommitRequest::Amend => {
            git.commit_amend()?;
            return Ok(());
        }
        CommitRequest::AmendNoEdit => git.commit_amend_no_edit()?,
        CommitRequest::AmendWithMessage(message) => git.commit_amend_with_message(&message)?,
        CommitRequest::Message(message) => git.commit(&message)?,
    };
    write!(out, "{}", summary)?;
    Ok(())
}

pub fn diff<R: CommandRunner>(
    git: &Git<R>,
    target: DiffTarget,
    out: &mut impl Write,
) -> Result<()> {
    let patch = git.diff(target)?;
    write!(out, "{}", patch)?;
    Ok(())
}

/// Ask before discarding local changes
pub fn ask_reset_confirmation(mode: ResetMode) -> bool {
    let prompt = match mode {
        ResetMode::HardAndClean => {
            "Discard all local changes and remove untracked files and directories?"
        }
        ResetMode::Clean => "Discard all local changes and remove untracked files?",
    };
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact_opt();

    matches!(answer, Ok(Some(true)))
}

pub fn reset<R: CommandRunner>(
    git: &Git<R>,
    mode: ResetMode,
    confirmed: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !confirmed {
        writeln!(out, "Aborted.")?;
        return Ok(());
    }

    git.reset_hard_head()
        .context("could not reset the working tree to HEAD")?;
    match mode {
        ResetMode::HardAndClean => {
            git.clean_dirs()?;
            output::print_success(out, "Reset to HEAD and removed untracked files")?;
        }
        ResetMode::Clean => {
            git.clean_files()?;
            output::print_success(out, "Reset and clean successful")?;
        }
    }
    Ok(())
}

/// Non-interactive `clean files` / `clean dirs`
pub fn clean_all<R: CommandRunner>(git: &Git<R>, dirs: bool) -> Result<()> {
    if dirs {
        git.clean_dirs()?;
    } else {
        git.clean_files()?;
    }
    Ok(())
}
