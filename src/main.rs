mod clean;
mod cli;
mod commands;
mod complete;
mod error;
mod git;
mod output;
mod selection;
mod types;

use anyhow::Result;
use clap::Parser;
use clean::InteractiveSession;
use cli::{Args, CleanMode, Commands, DiffArg, ResetArg};
use commands::ResetMode;
use git::{DiffTarget, Git};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use types::SessionEnd;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse args
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Fatal errors are reported once, here
    match run(args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = output::report_error(&mut out, &e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let git = Git::new(&args.repo);

    match args.command {
        Commands::Add { patch, paths } => commands::add(&git, &paths, patch),
        Commands::Commit { words } => commands::commit(&git, &words, out),
        // Interactive selection when no mode is given
        Commands::Clean { mode: None } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let end = InteractiveSession::new(&git, &git).run(&mut input, out)?;
            if let SessionEnd::Deleted(paths) = end {
                debug!(?paths, "clean session finished");
            }
            Ok(())
        }
        // Non-interactive forms pass straight through to git
        Commands::Clean {
            mode: Some(CleanMode::Files),
        } => commands::clean_all(&git, false),
        Commands::Clean {
            mode: Some(CleanMode::Dirs),
        } => commands::clean_all(&git, true),
        Commands::Clean {
            mode: Some(CleanMode::List { json }),
        } => {
            clean::print_listing(&git, out, json)?;
            Ok(())
        }
        Commands::Diff { target } => {
            let target = match target {
                None => DiffTarget::Head,
                Some(DiffArg::Unstaged) => DiffTarget::Unstaged,
                Some(DiffArg::Staged) => DiffTarget::Staged,
            };
            commands::diff(&git, target, out)
        }
        Commands::Reset { mode, yes } => {
            let mode = match mode {
                None => ResetMode::HardAndClean,
                Some(ResetArg::Clean) => ResetMode::Clean,
            };
            // Destructive, so ask unless --yes
            let confirmed = yes || commands::ask_reset_confirmation(mode);
            commands::reset(&git, mode, confirmed, out)
        }
        Commands::Completion { shell } => {
            complete::print_script(shell, out);
            Ok(())
        }
        Commands::Complete { topic } => {
            complete::print_candidates(&git, &topic, out)?;
            Ok(())
        }
    }
}
