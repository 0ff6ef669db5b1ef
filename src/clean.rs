use crate::error::CleanError;
use crate::git::{CleanForcer, CleanLister};
use crate::output;
use crate::selection::parse_selection;
use crate::types::{Candidate, DeleteConfirm, SelectionOutcome, SessionEnd};
use std::io::{self, BufRead, Write};
use tracing::info;

const REMOVE_PREFIX: &str = "Would remove ";
const SKIP_PREFIX: &str = "Would skip ";

/// Parse `git clean -nd` output into indexed candidates, keeping git's order.
///
/// Trailing spaces belong to the file name and are kept; `lines()` only drops `\r\n`.
pub fn parse_candidates(raw: &str) -> Vec<Candidate> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        // Nested repositories are reported but never removed by -d
        .filter(|line| !line.starts_with(SKIP_PREFIX))
        .map(|line| line.strip_prefix(REMOVE_PREFIX).unwrap_or(line))
        .enumerate()
        .map(|(i, path)| Candidate {
            index: i + 1,
            path: unquote(path),
        })
        .collect()
}

/// Undo git's C-style quoting (`"say \"hi\".txt"`, `"caf\303\251"`).
/// Names git did not quote pass through untouched.
fn unquote(path: &str) -> String {
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };

    let raw = inner.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] != b'\\' || i + 1 == raw.len() {
            bytes.push(raw[i]);
            i += 1;
            continue;
        }

        let escape = raw[i + 1];
        i += 2;
        let byte = match escape {
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'v' => 0x0b,
            // Three octal digits encode one raw byte
            b'0'..=b'3' if is_octal_pair(raw.get(i..i + 2)) => {
                let value = (escape - b'0') * 64 + (raw[i] - b'0') * 8 + (raw[i + 1] - b'0');
                i += 2;
                value
            }
            other => other,
        };
        bytes.push(byte);
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

fn is_octal_pair(digits: Option<&[u8]>) -> bool {
    digits.is_some_and(|d| d.iter().all(|b| (b'0'..=b'7').contains(b)))
}

/// Fetch the current removable paths
pub fn list_candidates(lister: &impl CleanLister) -> Result<Vec<Candidate>, CleanError> {
    let raw = lister.dry_run_clean().map_err(CleanError::CandidateFetch)?;
    Ok(parse_candidates(&raw))
}

/// Force-remove exactly `paths`
pub fn delete_paths(forcer: &impl CleanForcer, paths: &[String]) -> Result<(), CleanError> {
    if paths.is_empty() {
        return Ok(());
    }
    forcer.force_delete(paths).map_err(CleanError::Deletion)
}

/// Show the resolved set and read one answer; only `y` affirms
fn confirm(
    input: &mut impl BufRead,
    out: &mut impl Write,
    paths: &[String],
) -> io::Result<DeleteConfirm> {
    output::print_confirmation(out, paths)?;
    let answer = read_line(input)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(DeleteConfirm::Yes)
    } else {
        Ok(DeleteConfirm::No)
    }
}

/// One line without its terminator; end of input reads as an empty line
fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn resolve(candidates: &[Candidate], outcome: &SelectionOutcome) -> Vec<String> {
    match outcome {
        SelectionOutcome::All => candidates.iter().map(|c| c.path.clone()).collect(),
        SelectionOutcome::Indices(indices) => indices
            .iter()
            .filter_map(|&i| candidates.get(i - 1))
            .map(|c| c.path.clone())
            .collect(),
        _ => Vec::new(),
    }
}

/// Prompt-driven selection and removal of untracked files
pub struct InteractiveSession<'a, L, F> {
    lister: &'a L,
    forcer: &'a F,
}

impl<'a, L: CleanLister, F: CleanForcer> InteractiveSession<'a, L, F> {
    pub fn new(lister: &'a L, forcer: &'a F) -> Self {
        Self { lister, forcer }
    }

    /// Run until cancelled, deleted, or a fatal error.
    ///
    /// Candidates are fetched once; invalid input and rejected confirmations
    /// loop back to the selection prompt with no retry limit.
    pub fn run(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<SessionEnd, CleanError> {
        // Listing happens exactly once per session
        let candidates = list_candidates(self.lister)?;
        if candidates.is_empty() {
            writeln!(out, "{}", output::NOTHING_TO_CLEAN)?;
            info!("nothing to clean");
            return Ok(SessionEnd::NothingToClean);
        }

        loop {
            // Prompt for a selection
            output::print_candidates(out, &candidates)?;
            output::print_selection_prompt(out)?;
            let line = read_line(input)?;

            let outcome = parse_selection(&line, candidates.len());
            match outcome {
                SelectionOutcome::Cancelled | SelectionOutcome::None => {
                    writeln!(out, "{}", output::CANCELLED)?;
                    info!("clean cancelled");
                    return Ok(SessionEnd::Cancelled);
                }
                SelectionOutcome::Invalid(ref token) => {
                    output::print_invalid_number(out, token)?;
                    continue;
                }
                SelectionOutcome::All | SelectionOutcome::Indices(_) => {}
            }

            // Confirm the exact resolved set; anything but `y` re-prompts
            let paths = resolve(&candidates, &outcome);
            if confirm(input, out, &paths)? == DeleteConfirm::No {
                continue;
            }

            // Delete only what was confirmed
            delete_paths(self.forcer, &paths)?;
            writeln!(out, "{}", output::DELETED)?;
            info!(count = paths.len(), "selected files deleted");
            return Ok(SessionEnd::Deleted(paths));
        }
    }
}

/// Print the candidates without prompting
pub fn print_listing(
    lister: &impl CleanLister,
    out: &mut impl Write,
    json: bool,
) -> Result<(), CleanError> {
    let candidates = list_candidates(lister)?;
    if json {
        output::print_candidates_json(out, &candidates)?;
    } else if candidates.is_empty() {
        writeln!(out, "{}", output::NOTHING_TO_CLEAN)?;
    } else {
        output::print_candidates(out, &candidates)?;
    }
    Ok(())
}
