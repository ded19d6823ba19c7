use crate::domain::model::MatchRecord;
use crate::utils::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

// `<team> <score>, <team> <score>`，隊名可含空白、數字與逗號以外的標點
const MATCH_PATTERN: &str = r"^([^,]+)\s+(\d+),\s+([^,]+)\s+(\d+)$";

fn match_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MATCH_PATTERN).expect("match line pattern is valid"))
}

/// Parses one result line such as `"Lions 3, Snakes 3"`.
///
/// Structural mismatches (and names that are empty once trimmed) are
/// [`ParseError::Format`]; a score the grammar accepts but that does not fit a
/// `u64` is [`ParseError::Score`].
pub fn parse_match(line: &str) -> Result<MatchRecord, ParseError> {
    let trimmed = line.trim();
    let format_error = || ParseError::Format {
        line: trimmed.to_string(),
    };

    let caps = match_regex().captures(trimmed).ok_or_else(format_error)?;

    let home = caps[1].trim();
    let away = caps[3].trim();
    if home.is_empty() || away.is_empty() {
        return Err(format_error());
    }

    Ok(MatchRecord {
        home: home.to_string(),
        home_score: parse_score(trimmed, &caps[2])?,
        away: away.to_string(),
        away_score: parse_score(trimmed, &caps[4])?,
    })
}

fn parse_score(line: &str, raw: &str) -> Result<u64, ParseError> {
    raw.parse::<u64>().map_err(|_| ParseError::Score {
        line: line.to_string(),
        score: raw.to_string(),
    })
}
