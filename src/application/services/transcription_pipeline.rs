use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{
    RenderError, ScratchStore, ScratchStoreError, TranscriptRenderer, TranscriptionError,
    TranscriptionOptions, TranscriptionService,
};
use crate::domain::{OutputFormat, RenderedDocument, SpeakerLabelMap};

use super::transcript_formatter::format_transcript;

/// Upload → transcribe → label → render, for a single request.
pub struct TranscriptionPipeline {
    transcription_service: Arc<dyn TranscriptionService>,
    scratch_store: Arc<dyn ScratchStore>,
    renderers: HashMap<OutputFormat, Arc<dyn TranscriptRenderer>>,
    speaker_labels: SpeakerLabelMap,
    options: TranscriptionOptions,
}

impl TranscriptionPipeline {
    pub fn new(
        transcription_service: Arc<dyn TranscriptionService>,
        scratch_store: Arc<dyn ScratchStore>,
        renderers: HashMap<OutputFormat, Arc<dyn TranscriptRenderer>>,
        speaker_labels: SpeakerLabelMap,
        options: TranscriptionOptions,
    ) -> Self {
        Self {
            transcription_service,
            scratch_store,
            renderers,
            speaker_labels,
            options,
        }
    }

    pub async fn process(
        &self,
        audio: &[u8],
        format: OutputFormat,
    ) -> Result<RenderedDocument, PipelineError> {
        let renderer = self
            .renderers
            .get(&format)
            .cloned()
            .ok_or(PipelineError::UnsupportedFormat(format))?;

        let text = self.transcribe_to_text(audio).await?;

        let bytes = renderer.render(&text)?;
        tracing::info!(
            format = %format,
            bytes = bytes.len(),
            "Transcript rendered"
        );

        Ok(RenderedDocument::new(bytes, format))
    }

    /// Stages the upload, runs transcription and releases the scratch file
    /// before returning, whatever the outcome.
    pub async fn transcribe_to_text(&self, audio: &[u8]) -> Result<String, PipelineError> {
        let scratch = self.scratch_store.stage(audio).await?;
        tracing::debug!(path = %scratch.path().display(), bytes = audio.len(), "Audio staged");

        let outcome = self
            .transcription_service
            .transcribe(scratch.path(), &self.options)
            .await;

        if let Err(e) = scratch.release() {
            tracing::warn!(error = %e, "Scratch file cleanup failed");
        }

        let transcript = outcome?;

        if transcript.is_error() {
            let detail = transcript
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(error = %detail, "Transcription service reported an error");
            return Err(PipelineError::Service(detail));
        }

        tracing::info!(
            utterances = transcript.utterances.len(),
            "Transcription completed"
        );

        Ok(format_transcript(&transcript.utterances, &self.speaker_labels))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Service(String),
    #[error("staging: {0}")]
    Staging(#[from] ScratchStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("rendering: {0}")]
    Rendering(#[from] RenderError),
    #[error("no renderer configured for {0}")]
    UnsupportedFormat(OutputFormat),
}

impl PipelineError {
    /// True when the provider itself reported the failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}
