use crate::domain::ports::STDIO_PATH;
use crate::utils::error::{LeagueError, Result};
use crate::utils::format::OutputFormat;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub file: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref)
            .map_err(|e| LeagueError::from_io(&path_ref.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LeagueError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEAGUE_INPUT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LeagueError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn input_path_opt(&self) -> Option<&str> {
        self.input.as_ref()?.path.as_deref()
    }

    pub fn output_path_opt(&self) -> Option<&str> {
        self.output.as_ref()?.path.as_deref()
    }

    pub fn output_format_opt(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.logging.as_ref()?.file.as_deref()
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(str::parse)
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let input = self.input_path_opt().unwrap_or(STDIO_PATH);
        let output = self.output_path_opt().unwrap_or(STDIO_PATH);
        validate_path("input.path", input)?;
        validate_path("output.path", output)?;
        validate_distinct_paths(input, output)?;
        self.output_format_opt()?;
        self.log_format()?;
        if let Some(file) = self.log_file() {
            validate_path("logging.file", file)?;
        }
        Ok(())
    }
}
