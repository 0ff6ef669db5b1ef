use crate::types::Candidate;
use colored::Colorize;
use std::io::{self, Write};

pub const NOTHING_TO_CLEAN: &str = "No files to clean.";
pub const CANCELLED: &str = "Cancelled.";
pub const CONFIRM_PROMPT: &str = "Delete these files? (y/n): ";
pub const DELETED: &str = "Selected files deleted.";

/// Print the indexed candidate list
pub fn print_candidates(out: &mut impl Write, candidates: &[Candidate]) -> io::Result<()> {
    writeln!(out, "Files to be deleted:")?;
    for candidate in candidates {
        writeln!(
            out,
            "{} {}",
            format!("[{}]", candidate.index).cyan(),
            candidate.path
        )?;
    }
    Ok(())
}

pub fn print_selection_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(
        out,
        "Enter the numbers of the files to delete (comma separated, 'all' or 'none'): "
    )?;
    out.flush()
}

pub fn print_invalid_number(out: &mut impl Write, token: &str) -> io::Result<()> {
    writeln!(out, "Invalid number: {}", token)
}

/// Show the resolved set, in the order it will be handed to git, and ask
pub fn print_confirmation(out: &mut impl Write, paths: &[String]) -> io::Result<()> {
    writeln!(out, "The following files will be deleted:")?;
    for path in paths {
        writeln!(out, "  {}", path.bold())?;
    }
    write!(out, "{}", CONFIRM_PROMPT)?;
    out.flush()
}

pub fn print_candidates_json(out: &mut impl Write, candidates: &[Candidate]) -> io::Result<()> {
    let json_str = serde_json::to_string_pretty(candidates).unwrap_or_else(|_| "[]".to_string());
    writeln!(out, "{}", json_str)
}

/// Print a fatal error with its full cause chain
pub fn report_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Error: {:#}", err)
}

pub fn print_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn candidate(index: usize, path: &str) -> Candidate {
        Candidate {
            index,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_print_candidates_keeps_order() {
        plain();
        let candidates = vec![candidate(1, "z.txt"), candidate(2, "a/")];
        let mut out = Vec::new();
        print_candidates(&mut out, &candidates).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Files to be deleted:\n[1] z.txt\n[2] a/\n"
        );
    }

    #[test]
    fn test_confirmation_ends_with_prompt() {
        plain();
        let mut out = Vec::new();
        print_confirmation(&mut out, &["a.txt".to_string()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  a.txt\n"));
        assert!(text.ends_with("Delete these files? (y/n): "));
    }

    #[test]
    fn test_candidates_json() {
        let mut out = Vec::new();
        let candidates = vec![candidate(1, "tmp/")];
        print_candidates_json(&mut out, &candidates).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["path"], "tmp/");
    }

    #[test]
    fn test_report_error_includes_causes() {
        let err = anyhow::anyhow!("root cause").context("outer");
        let mut out = Vec::new();
        report_error(&mut out, &err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: outer: root cause\n");
    }
}
