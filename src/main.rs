use clap::Parser;
use json_sum::utils::{logger, validation::Validate};
use json_sum::{
    normalize_legacy_flags, AppConfig, CliConfig, RunReport, SumEngine, SumError, SumPipeline,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse_from(normalize_legacy_flags(std::env::args_os()));

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(config).await {
        Ok(report) => {
            tracing::debug!(
                "Finished: {} -> {} (sum {})",
                report.source,
                report.destination,
                report.sum
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{} (Category: {:?})", e, e.category());
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: CliConfig) -> Result<RunReport, SumError> {
    let app = AppConfig::load(config.env_file.as_deref())?;
    let settings = config.into_settings(app);
    settings.validate()?;

    let pipeline = SumPipeline::from_config(&settings);
    SumEngine::new(pipeline).run().await
}
