use serde::Serialize;
use std::collections::BTreeSet;

/// A path `git clean` reports as removable, with its display index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// 1-based, stable for the whole session
    pub index: usize,
    pub path: String,
}

/// Parsed result of one line typed at the selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Empty line
    Cancelled,
    /// `all`
    All,
    /// `none`
    None,
    /// Every index is within `1..=candidate_count`
    Indices(BTreeSet<usize>),
    /// First token that was not an in-range number
    Invalid(String),
}

/// How an interactive clean session ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    NothingToClean,
    Cancelled,
    Deleted(Vec<String>),
}

/// Answer at the confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirm {
    Yes,
    No,
}
