use crate::types::SelectionOutcome;
use std::collections::BTreeSet;

/// Resolve one line of user input against `candidate_count` candidates.
///
/// A line with any bad token is rejected as a whole, reporting the first one,
/// so a typo never silently shrinks a destructive selection.
pub fn parse_selection(line: &str, candidate_count: usize) -> SelectionOutcome {
    let line = line.trim();
    if line.is_empty() {
        return SelectionOutcome::Cancelled;
    }
    if line.eq_ignore_ascii_case("all") {
        return SelectionOutcome::All;
    }
    if line.eq_ignore_ascii_case("none") {
        return SelectionOutcome::None;
    }

    let mut indices = BTreeSet::new();
    for token in line.split(',').map(str::trim) {
        match parse_index(token, candidate_count) {
            Some(index) => {
                indices.insert(index);
            }
            None => return SelectionOutcome::Invalid(token.to_string()),
        }
    }

    SelectionOutcome::Indices(indices)
}

fn parse_index(token: &str, candidate_count: usize) -> Option<usize> {
    // Only plain digits: rejects "", "+1", "-1" and whitespace inside the token
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: usize = token.parse().ok()?;
    (1..=candidate_count).contains(&value).then_some(value)
}
