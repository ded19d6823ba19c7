use crate::core::parser::parse_match;
use crate::core::ranker::rank;
use crate::core::standings::Standings;
use crate::core::{ConfigProvider, LeagueReport, Pipeline, Storage};
use crate::domain::model::RejectedLine;
use crate::domain::ports::STDIO_PATH;
use crate::utils::error::{LeagueError, Result};

pub struct LeaguePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LeaguePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Feeds lines through parser and aggregator, skipping blanks and counting
/// rejected lines, then ranks the final standings.
pub fn process_lines<I, T>(lines: I) -> LeagueReport
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut standings = Standings::new();
    let mut rejected = Vec::new();
    let mut matches = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        match parse_match(line) {
            Ok(record) => {
                standings.record_match(&record);
                matches += 1;
            }
            Err(error) => {
                tracing::warn!(
                    line_number = index + 1,
                    kind = error.kind(),
                    "Skipping invalid line: {}",
                    error
                );
                standings.record_rejection();
                rejected.push(RejectedLine {
                    line_number: index + 1,
                    text: line.trim().to_string(),
                    error,
                });
            }
        }
    }

    LeagueReport {
        rankings: rank(&standings.snapshot()),
        rejected,
        matches,
        errors: standings.rejected_lines(),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeaguePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        tracing::debug!("Reading matches from: {}", path);

        let data = self.storage.read_file(path).await?;
        let text = String::from_utf8(data).map_err(|e| LeagueError::ValidationError {
            message: format!("Input '{}' is not valid UTF-8: {}", path, e),
        })?;

        Ok(text.lines().map(str::to_string).collect())
    }

    async fn transform(&self, lines: Vec<String>) -> Result<LeagueReport> {
        Ok(process_lines(&lines))
    }

    async fn load(&self, report: &LeagueReport) -> Result<String> {
        let path = self.config.output_path();
        let format = self.config.output_format();
        let data = format.render(&report.rankings)?;

        tracing::debug!("Writing {} bytes as {:?} to {}", data.len(), format, path);
        self.storage.write_file(path, &data).await?;

        if path != STDIO_PATH {
            tracing::info!("Rankings written to {}", path);
        }
        Ok(path.to_string())
    }
}
