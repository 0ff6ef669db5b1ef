use crate::error::GitError;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Port for starting external processes
pub trait CommandRunner {
    /// Run to completion with stdout and stderr captured
    fn output(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;

    /// Run attached to the user's terminal; returns whether it exited successfully
    fn interactive(&self, program: &str, args: &[String]) -> io::Result<bool>;
}

/// Runs real processes through `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).stdin(Stdio::null()).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn interactive(&self, program: &str, args: &[String]) -> io::Result<bool> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.success())
    }
}

/// Lists what `git clean` would remove
pub trait CleanLister {
    fn dry_run_clean(&self) -> Result<String, GitError>;
}

/// Force-removes exactly the given untracked paths
pub trait CleanForcer {
    fn force_delete(&self, paths: &[String]) -> Result<(), GitError>;
}

/// Which pair of trees `diff` compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTarget {
    /// Working tree and index against HEAD
    Head,
    /// Working tree against the index
    Unstaged,
    /// Index against HEAD
    Staged,
}

/// git client bound to one repository directory
pub struct Git<R = SystemRunner> {
    repo: PathBuf,
    runner: R,
}

impl Git<SystemRunner> {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self::with_runner(repo, SystemRunner)
    }
}

impl<R: CommandRunner> Git<R> {
    pub fn with_runner(repo: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            repo: repo.into(),
            runner,
        }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn argv(&self, args: &[&str]) -> Vec<String> {
        let mut argv = vec!["-C".to_string(), self.repo.to_string_lossy().to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        argv
    }

    /// Execute a git command and return stdout
    fn capture(&self, args: &[&str]) -> Result<String, GitError> {
        let command = display_command(args);
        debug!(%command, repo = %self.repo.display(), "running git");

        let output = self
            .runner
            .output("git", &self.argv(args))
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.success {
            warn!(%command, stderr = output.stderr.trim(), "git failed");
            return Err(GitError::Failed {
                command,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    /// Execute a git command attached to the terminal (editors, `add -p`)
    fn attach(&self, args: &[&str]) -> Result<(), GitError> {
        let command = display_command(args);
        debug!(%command, repo = %self.repo.display(), "running git interactively");

        let success = self
            .runner
            .interactive("git", &self.argv(args))
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !success {
            warn!(%command, "git failed");
            return Err(GitError::Failed {
                command,
                stderr: "exited with a non-zero status".to_string(),
            });
        }
        Ok(())
    }

    pub fn add(&self, paths: &[String]) -> Result<(), GitError> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.capture(&args).map(drop)
    }

    pub fn add_patch(&self) -> Result<(), GitError> {
        self.attach(&["add", "-p"])
    }

    pub fn commit(&self, message: &str) -> Result<String, GitError> {
        self.capture(&["commit", "-m", message])
    }

    pub fn commit_allow_empty(&self) -> Result<String, GitError> {
        self.capture(&["commit", "--allow-empty", "-m", "empty commit"])
    }

    pub fn commit_amend(&self) -> Result<(), GitError> {
        self.attach(&["commit", "--amend"])
    }

    pub fn commit_amend_no_edit(&self) -> Result<String, GitError> {
        self.capture(&["commit", "--amend", "--no-edit"])
    }

    pub fn commit_amend_with_message(&self, message: &str) -> Result<String, GitError> {
        self.capture(&["commit", "--amend", "-m", message])
    }

    pub fn diff(&self, target: DiffTarget) -> Result<String, GitError> {
        match target {
            DiffTarget::Head => self.capture(&["diff", "HEAD"]),
            DiffTarget::Unstaged => self.capture(&["diff"]),
            DiffTarget::Staged => self.capture(&["diff", "--staged"]),
        }
    }

    pub fn reset_hard_head(&self) -> Result<(), GitError> {
        self.capture(&["reset", "--hard", "HEAD"]).map(drop)
    }

    pub fn clean_files(&self) -> Result<(), GitError> {
        self.capture(&["clean", "-f"]).map(drop)
    }

    pub fn clean_dirs(&self) -> Result<(), GitError> {
        self.capture(&["clean", "-fd"]).map(drop)
    }

    pub fn list_files(&self) -> Result<Vec<String>, GitError> {
        let output = self.capture(&["ls-files"])?;
        Ok(non_empty_lines(&output))
    }

    pub fn list_local_branches(&self) -> Result<Vec<String>, GitError> {
        let output = self.capture(&["branch", "--format=%(refname:short)"])?;
        Ok(non_empty_lines(&output))
    }
}

impl<R: CommandRunner> CleanLister for Git<R> {
    fn dry_run_clean(&self) -> Result<String, GitError> {
        // Non-ASCII names come back verbatim instead of as octal escapes
        self.capture(&["-c", "core.quotePath=false", "clean", "-nd"])
    }
}

impl<R: CommandRunner> CleanForcer for Git<R> {
    fn force_delete(&self, paths: &[String]) -> Result<(), GitError> {
        // Literal pathspecs: a file named `*.txt` must not match every .txt file,
        // and -d must not reach anything that was not listed
        let mut args = vec!["--literal-pathspecs", "clean", "-fd", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.capture(&args).map(drop)
    }
}

fn display_command(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
