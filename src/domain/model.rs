use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

/// 一行比賽結果，解析後只存在於單次累計步驟中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub home: String,
    pub home_score: u64,
    pub away: String,
    pub away_score: u64,
}

impl MatchRecord {
    pub fn new(home: impl Into<String>, home_score: u64, away: impl Into<String>, away_score: u64) -> Self {
        Self {
            home: home.into(),
            home_score,
            away: away.into(),
            away_score,
        }
    }
}

/// Team name → accumulated points, detached from the aggregator that produced it.
pub type StandingsSnapshot = HashMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
}

impl RankingEntry {
    pub fn points_suffix(&self) -> &'static str {
        if self.points == 1 {
            "pt"
        } else {
            "pts"
        }
    }
}

impl fmt::Display for RankingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}, {} {}",
            self.rank,
            self.name,
            self.points,
            self.points_suffix()
        )
    }
}

/// 被跳過的輸入行（1-based 行號）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub text: String,
    pub error: crate::utils::error::ParseError,
}

#[derive(Debug, Clone, Default)]
pub struct LeagueReport {
    pub rankings: Vec<RankingEntry>,
    pub rejected: Vec<RejectedLine>,
    pub matches: usize,
    pub errors: usize,
}

impl LeagueReport {
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// 寫出每一筆被跳過的行與結尾摘要；沒有錯誤時什麼都不寫
    pub fn write_summary<W: Write>(&self, out: &mut W, log_file: Option<&str>) -> io::Result<()> {
        for rejected in &self.rejected {
            writeln!(out, "Skipping invalid line: {}", rejected.text)?;
        }

        if self.errors > 0 {
            match log_file {
                Some(path) => writeln!(
                    out,
                    "Note: {} lines were skipped due to errors. See {} for details.",
                    self.errors, path
                )?,
                None => writeln!(out, "Note: {} lines were skipped due to errors.", self.errors)?,
            }
        }
        Ok(())
    }

    pub fn display_lines(&self) -> Vec<String> {
        crate::core::ranker::format_rankings(&self.rankings)
    }
}
