use pdf_narrator::controllers::upload::UploadController;
use pdf_narrator::domain::extraction::ExtractionService;
use pdf_narrator::infrastructure::config::{Config, LogFormat};
use pdf_narrator::infrastructure::http::start_http_server;
use pdf_narrator::infrastructure::repositories::PdfExtractRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting PDF Narrator extraction service on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        development = config.is_development(),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let pdf_repo = Arc::new(PdfExtractRepository::new());
    let extraction_service = Arc::new(ExtractionService::new(pdf_repo));
    let upload_controller = Arc::new(UploadController::new(extraction_service));

    start_http_server(config, upload_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pdf_narrator=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
