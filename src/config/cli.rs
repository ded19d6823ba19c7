use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::ports::STDIO_PATH;
use crate::utils::error::Result;
use crate::utils::format::OutputFormat;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "league-rank")]
#[command(about = "Calculate league rankings from match results")]
pub struct CliConfig {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Append logs to this file in addition to stderr
    #[arg(long)]
    pub log_file: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// 命令列參數優先，未指定的欄位才採用設定檔的值
    pub fn merge_file_config(&mut self, file: &TomlConfig) -> Result<()> {
        if self.input.is_none() {
            self.input = file.input_path_opt().map(str::to_string);
        }
        if self.output.is_none() {
            self.output = file.output_path_opt().map(str::to_string);
        }
        if self.format.is_none() {
            self.format = file.output_format_opt()?;
        }
        if self.log_file.is_none() {
            self.log_file = file.log_file().map(str::to_string);
        }
        if self.log_format.is_none() {
            self.log_format = file.log_format()?;
        }
        self.verbose |= file.verbose();
        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(STDIO_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(STDIO_PATH)
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", self.input_path())?;
        validate_path("output", self.output_path())?;
        validate_distinct_paths(self.input_path(), self.output_path())?;
        if let Some(log_file) = &self.log_file {
            validate_path("log_file", log_file)?;
        }
        Ok(())
    }
}
