use crate::domain::ports::STDIO_PATH;
use crate::utils::error::{LeagueError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LeagueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LeagueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入與輸出不可指向同一個檔案，否則輸入會在讀取前被覆寫
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if input == STDIO_PATH || output == STDIO_PATH {
        return Ok(());
    }

    let same = match (Path::new(input).canonicalize(), Path::new(output).canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => Path::new(input) == Path::new(output),
    };

    if same {
        return Err(LeagueError::ConfigValidationError {
            field: "output".to_string(),
            message: format!("Output path '{}' is the same as the input file", output),
        });
    }
    Ok(())
}
