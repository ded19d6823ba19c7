use crate::domain::model::RankingEntry;
use crate::utils::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["text", "json", "csv"];

    pub fn render(&self, rankings: &[RankingEntry]) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Text => {
                let mut out = String::new();
                for entry in rankings {
                    out.push_str(&entry.to_string());
                    out.push('\n');
                }
                Ok(out.into_bytes())
            }
            OutputFormat::Json => {
                let mut json = serde_json::to_vec_pretty(rankings)?;
                json.push(b'\n');
                Ok(json)
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                // 空排名也要輸出表頭
                if rankings.is_empty() {
                    writer.write_record(["rank", "name", "points"])?;
                }
                for entry in rankings {
                    writer.serialize(entry)?;
                }
                writer.into_inner().map_err(|e| LeagueError::ProcessingError {
                    message: format!("Failed to flush CSV output: {}", e),
                })
            }
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(LeagueError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VALID.join(", ")
                ),
            }),
        }
    }
}
