use crate::domain::model::{MatchRecord, StandingsSnapshot};
use std::collections::HashMap;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// Accumulates points per team and counts the lines the caller rejected.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    teams: HashMap<String, u32>,
    rejected: usize,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_match(&mut self, record: &MatchRecord) {
        // 兩隊都要登記，即使輸球拿 0 分
        self.teams.entry(record.home.clone()).or_insert(0);
        self.teams.entry(record.away.clone()).or_insert(0);

        if record.home_score == record.away_score {
            self.award(&record.home, DRAW_POINTS);
            self.award(&record.away, DRAW_POINTS);
        } else if record.home_score > record.away_score {
            self.award(&record.home, WIN_POINTS);
        } else {
            self.award(&record.away, WIN_POINTS);
        }
    }

    fn award(&mut self, team: &str, points: u32) {
        if let Some(total) = self.teams.get_mut(team) {
            *total = total.saturating_add(points);
        }
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    pub fn rejected_lines(&self) -> usize {
        self.rejected
    }

    pub fn points(&self, team: &str) -> Option<u32> {
        self.teams.get(team).copied()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn snapshot(&self) -> StandingsSnapshot {
        self.teams.clone()
    }
}
