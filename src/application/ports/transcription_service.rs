use std::path::Path;

use async_trait::async_trait;

use crate::domain::Transcript;

/// Request options forwarded to the transcription provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionOptions {
    pub speaker_labels: bool,
    pub speakers_expected: Option<u32>,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            speaker_labels: true,
            speakers_expected: Some(2),
        }
    }
}

/// Transcribes a staged audio file.
///
/// A provider-reported failure is returned as `Ok` with an error-status
/// [`Transcript`]; `Err` is reserved for transport and decoding problems.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read audio file: {0}")]
    AudioUnreadable(#[from] std::io::Error),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unexpected api response: {0}")]
    UnexpectedResponse(String),
}
