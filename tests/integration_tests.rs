use league_rank::utils::format::OutputFormat;
use league_rank::{CliConfig, LeagueEngine, LeagueError, LeaguePipeline, LocalStorage, ParseError};
use tempfile::TempDir;

const SEASON: &str = "\
Brazil 2, Germany 2
Argentina 1, England 0
Brazil 1, England 1
Argentina 3, Germany 1
Brazil 4, France 0
";

fn config_for(input: &str, output: &str, format: OutputFormat) -> CliConfig {
    CliConfig {
        input: Some(input.to_string()),
        output: Some(output.to_string()),
        format: Some(format),
        ..CliConfig::default()
    }
}

fn write_input(temp_dir: &TempDir, content: &str) -> String {
    let path = temp_dir.path().join("matches.txt");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_end_to_end_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, SEASON);
    let output = temp_dir.path().join("standings.txt");
    let output = output.to_str().unwrap();

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output, OutputFormat::Text),
    );
    let (destination, report) = LeagueEngine::new(pipeline).run().await.unwrap();

    assert_eq!(destination, output);
    assert_eq!(report.error_count(), 0);
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "1. Argentina, 6 pts\n\
         2. Brazil, 5 pts\n\
         3. England, 1 pt\n\
         3. Germany, 1 pt\n\
         5. France, 0 pts\n"
    );
}

#[tokio::test]
async fn test_end_to_end_with_invalid_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "Brazil 3, Germany 3\n\
         \n\
         Brazil 3, Germany\n\
         Argentina 1, England 0\n\
         Brazil abc, Germany 3\n\
         Spain 123456789012345678901, Italy 0\n",
    );
    let output = temp_dir.path().join("standings.txt");
    let output = output.to_str().unwrap();

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output, OutputFormat::Text),
    );
    let (_, report) = LeagueEngine::new(pipeline).run().await.unwrap();

    assert_eq!(report.error_count(), 3);
    assert_eq!(report.matches, 2);
    let line_numbers: Vec<usize> = report.rejected.iter().map(|r| r.line_number).collect();
    assert_eq!(line_numbers, vec![3, 5, 6]);
    assert!(matches!(report.rejected[0].error, ParseError::Format { .. }));
    assert!(matches!(report.rejected[2].error, ParseError::Score { .. }));

    // 被拒絕的行不會建立隊伍
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "1. Argentina, 3 pts\n2. Brazil, 1 pt\n2. Germany, 1 pt\n4. England, 0 pts\n"
    );
}

#[tokio::test]
async fn test_end_to_end_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, SEASON);
    let output = temp_dir.path().join("out/standings.json");
    let output = output.to_str().unwrap();

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output, OutputFormat::Json),
    );
    LeagueEngine::new(pipeline).run().await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["name"], "Argentina");
    assert_eq!(entries[0]["points"], 6);
    assert_eq!(entries[3]["rank"], 3);
    assert_eq!(entries[4]["rank"], 5);
}

#[tokio::test]
async fn test_end_to_end_csv_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, SEASON);
    let output = temp_dir.path().join("standings.csv");
    let output = output.to_str().unwrap();

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output, OutputFormat::Csv),
    );
    LeagueEngine::new(pipeline).run().await.unwrap();

    let mut reader = csv::Reader::from_path(output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["rank", "name", "points"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[2][1], "England");
    assert_eq!(&rows[2][0], "3");
    assert_eq!(&rows[4][2], "0");
}

#[tokio::test]
async fn test_empty_input_produces_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "\n\n   \n");
    let output = temp_dir.path().join("standings.txt");
    let output = output.to_str().unwrap();

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output, OutputFormat::Text),
    );
    let (_, report) = LeagueEngine::new(pipeline).run().await.unwrap();

    assert!(report.rankings.is_empty());
    assert_eq!(report.error_count(), 0);
    assert_eq!(std::fs::read_to_string(output).unwrap(), "");
}

#[tokio::test]
async fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nonexistent.txt");
    let output = temp_dir.path().join("standings.txt");

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            OutputFormat::Text,
        ),
    );
    let err = LeagueEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, LeagueError::InputNotFound { .. }));
    assert!(err.user_friendly_message().contains("not found"));
    assert!(!output.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_output_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "Brazil 1, Germany 1\n");
    let output = temp_dir.path().join("readonly.txt");
    std::fs::write(&output, "").unwrap();
    std::fs::set_permissions(&output, std::fs::Permissions::from_mode(0o400)).unwrap();

    // root 可以無視檔案權限
    if std::fs::OpenOptions::new().write(true).open(&output).is_ok() {
        return;
    }

    let pipeline = LeaguePipeline::new(
        LocalStorage::new(),
        config_for(&input, output.to_str().unwrap(), OutputFormat::Text),
    );
    let err = LeagueEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, LeagueError::PermissionDenied { .. }));
    assert!(err.user_friendly_message().contains("Permission denied"));
}
