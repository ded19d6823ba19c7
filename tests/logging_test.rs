use league_rank::core::pipeline::process_lines;
use league_rank::utils::logger::{init_cli_logger, LogFormat};
use league_rank::LeagueError;
use tempfile::TempDir;

// 全域 subscriber 每個行程只能設定一次，所以全部放在同一個測試
#[test]
fn test_log_file_is_appended() {
    let temp_dir = TempDir::new().unwrap();

    let unreachable = temp_dir.path().join("no-such-dir/league_rank.log");
    let err = init_cli_logger(false, LogFormat::Compact, unreachable.to_str()).unwrap_err();
    assert!(matches!(err, LeagueError::ConfigValidationError { ref field, .. } if field == "log_file"));

    let log_path = temp_dir.path().join("league_rank.log");
    std::fs::write(&log_path, "previous run\n").unwrap();

    init_cli_logger(false, LogFormat::Compact, log_path.to_str()).unwrap();

    let report = process_lines(["Brazil 3, Germany 3", "Brazil 3, Germany"]);
    assert_eq!(report.error_count(), 1);

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.starts_with("previous run\n"));
    assert!(content.contains("Skipping invalid line"));
    assert!(content.contains("Brazil 3, Germany"));
    // 檔案輸出不帶 ANSI 色碼
    assert!(!content.contains('\u{1b}'));
}
