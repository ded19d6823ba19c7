use anyhow::Context;
use clap::Parser;
use league_rank::config::TomlConfig;
use league_rank::utils::error::LeagueError;
use league_rank::utils::{logger, validation::Validate};
use league_rank::{CliConfig, LeagueEngine, LeaguePipeline, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 設定檔只補上命令列沒給的值
    if let Some(path) = config.config.clone() {
        let file_config = match TomlConfig::from_file(&path) {
            Ok(file_config) => file_config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };
        if let Err(e) = file_config
            .validate()
            .and_then(|_| config.merge_file_config(&file_config))
        {
            fail(&e);
        }
    }

    logger::init_cli_logger(config.verbose, config.log_format(), config.log_file.as_deref())
        .context("failed to set up logging")?;

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        fail(&e);
    }

    let log_file = config.log_file.clone();
    let pipeline = LeaguePipeline::new(LocalStorage::new(), config);
    let engine = LeagueEngine::new(pipeline);

    match engine.run().await {
        Ok((_, report)) => {
            if report.error_count() > 0 {
                tracing::info!("Processing completed with {} errors.", report.error_count());
            }
            report
                .write_summary(&mut std::io::stderr().lock(), log_file.as_deref())
                .context("failed to write summary")?;
        }
        Err(e) => {
            tracing::error!(
                "❌ League ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            fail(&e);
        }
    }

    Ok(())
}

fn fail(e: &LeagueError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.severity().exit_code());
}
