use crate::core::{LeagueReport, Pipeline};
use crate::utils::error::Result;

pub struct LeagueEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LeagueEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract → transform → load and hands back the report so the caller
    /// can print skipped lines and the error summary.
    pub async fn run(&self) -> Result<(String, LeagueReport)> {
        tracing::debug!("Reading match lines...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("📥 Read {} lines", lines.len());

        let report = self.pipeline.transform(lines).await?;
        tracing::info!(
            "⚽ Processed {} matches, ranked {} teams, {} lines skipped",
            report.matches,
            report.rankings.len(),
            report.error_count()
        );

        let destination = self.pipeline.load(&report).await?;
        tracing::debug!("Rankings written to: {}", destination);

        Ok((destination, report))
    }
}
