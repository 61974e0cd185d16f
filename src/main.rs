use clap::Parser;
use revenue_explainer::core::{ConfigProvider, ModelSource, RegressionModel};
use revenue_explainer::utils::{logger, validation::Validate};
use revenue_explainer::{adapters::http, CliConfig, FileModelSource, PredictionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(&config.logging.level, cli.verbose, config.logging.format);

    tracing::info!("Starting revenue-explainer {}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = FileModelSource::new(config.model_path());
    let model = match source.load().await {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load model from {} (Category: {:?}): {}",
                config.model_path(),
                e.category(),
                e
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    tracing::info!(
        "Model: {}, locale: {}, bind: {}",
        model.kind(),
        config.locale().code(),
        config.bind_addr()
    );

    let service = PredictionService::new(model, config.locale());
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    http::serve(listener, service, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received. Exiting...");
        }
    })
    .await?;

    Ok(())
}
