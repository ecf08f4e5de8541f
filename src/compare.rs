use crate::snapshot::RepoSnapshot;
use serde::Serialize;
use std::cmp::Ordering;

/// Winner name used when both repositories score the same.
pub const NO_WINNER: &str = "none";

/// Category winners between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// More closed pull requests.
    pub community_cooperation: String,
    /// More forks.
    pub extendability: String,
    /// More stars plus watchers.
    pub popularity: String,
}

/// Compares two snapshots. Absent statistics count as zero.
pub fn compare(first: &RepoSnapshot, second: &RepoSnapshot) -> Comparison {
    Comparison {
        community_cooperation: winner(
            first.closed_pull_requests.unwrap_or(0),
            second.closed_pull_requests.unwrap_or(0),
            first,
            second,
        ),
        extendability: winner(
            first.forks.unwrap_or(0),
            second.forks.unwrap_or(0),
            first,
            second,
        ),
        popularity: winner(popularity(first), popularity(second), first, second),
    }
}

fn popularity(snapshot: &RepoSnapshot) -> u64 {
    snapshot
        .stars
        .unwrap_or(0)
        .saturating_add(snapshot.watchers.unwrap_or(0))
}

fn winner(first_score: u64, second_score: u64, first: &RepoSnapshot, second: &RepoSnapshot) -> String {
    match first_score.cmp(&second_score) {
        Ordering::Greater => first.name.clone(),
        Ordering::Less => second.name.clone(),
        Ordering::Equal => NO_WINNER.to_string(),
    }
}
