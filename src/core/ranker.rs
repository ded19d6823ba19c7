use crate::domain::model::{RankingEntry, StandingsSnapshot};
use std::cmp::Reverse;

/// Orders teams by points (desc) then name (asc) and assigns competition
/// ranks: tied teams share the rank of the first of them, and the next team
/// takes its own position, so ties leave gaps (1, 2, 2, 4).
pub fn rank(snapshot: &StandingsSnapshot) -> Vec<RankingEntry> {
    let mut teams: Vec<(&str, u32)> = snapshot
        .iter()
        .map(|(name, points)| (name.as_str(), *points))
        .collect();
    teams.sort_by(|a, b| (Reverse(a.1), a.0).cmp(&(Reverse(b.1), b.0)));

    let mut entries: Vec<RankingEntry> = Vec::with_capacity(teams.len());
    for (index, (name, points)) in teams.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => index + 1,
        };
        entries.push(RankingEntry {
            rank,
            name: name.to_string(),
            points,
        });
    }
    entries
}

pub fn format_rankings(entries: &[RankingEntry]) -> Vec<String> {
    entries.iter().map(ToString::to_string).collect()
}
