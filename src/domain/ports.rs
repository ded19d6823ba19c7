use crate::domain::model::LeagueReport;
use crate::utils::error::Result;
use crate::utils::format::OutputFormat;
use async_trait::async_trait;

/// Path used for the standard input/output streams.
pub const STDIO_PATH: &str = "-";

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<LeagueReport>;
    async fn load(&self, report: &LeagueReport) -> Result<String>;
}
