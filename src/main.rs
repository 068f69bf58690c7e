use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use transcriber::application::ports::TranscriptionService;
use transcriber::application::services::TranscriptionPipeline;
use transcriber::domain::SpeakerLabelMap;
use transcriber::infrastructure::observability::{TracingConfig, init_tracing};
use transcriber::infrastructure::rendering::RendererFactory;
use transcriber::infrastructure::storage::LocalScratchStore;
use transcriber::infrastructure::transcription::{AssemblyAiClient, MockTranscriptionService};
use transcriber::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.level.clone(),
        settings.logging.enable_json,
    ));

    let scaffold_config = ScaffoldConfig::from_env();

    let transcription_service: Arc<dyn TranscriptionService> = if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled, serving canned transcripts");
        Arc::new(
            MockTranscriptionService::default()
                .with_delay(scaffold_config.mock_response_delay()),
        )
    } else {
        if settings.assemblyai.api_key.is_empty() {
            anyhow::bail!("ASSEMBLYAI_API_KEY must be set unless SCAFFOLD_MODE is enabled");
        }
        Arc::new(AssemblyAiClient::new(
            settings.assemblyai.api_key.clone(),
            Some(settings.assemblyai.base_url.clone()),
            Some(settings.poll_interval()),
        ))
    };

    let scratch_store = Arc::new(LocalScratchStore::new(settings.scratch_dir())?);
    tracing::info!(scratch_dir = %scratch_store.base_path().display(), "Scratch store ready");

    let pipeline = Arc::new(TranscriptionPipeline::new(
        transcription_service,
        scratch_store,
        RendererFactory::all(),
        SpeakerLabelMap::default(),
        settings.transcription_options(),
    ));

    let state = AppState {
        pipeline,
        max_upload_bytes: settings.max_upload_bytes(),
        scaffold_config,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
