mod assemblyai_client;
mod mock_transcription_service;

pub use assemblyai_client::{AssemblyAiClient, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL};
pub use mock_transcription_service::MockTranscriptionService;
