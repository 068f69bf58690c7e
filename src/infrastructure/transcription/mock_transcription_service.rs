use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionError, TranscriptionOptions, TranscriptionService};
use crate::domain::{Transcript, Utterance};

/// Returns a canned transcript without contacting any provider.
pub struct MockTranscriptionService {
    transcript: Transcript,
    delay: Duration,
}

impl MockTranscriptionService {
    pub fn new(transcript: Transcript, delay: Duration) -> Self {
        Self { transcript, delay }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockTranscriptionService {
    fn default() -> Self {
        Self::new(
            Transcript::completed(vec![
                Utterance::new("A", "Hello, how can I help you today?"),
                Utterance::new("B", "I'd like a transcript of this recording."),
            ]),
            Duration::ZERO,
        )
    }
}

#[async_trait]
impl TranscriptionService for MockTranscriptionService {
    async fn transcribe(
        &self,
        audio_path: &Path,
        _options: &TranscriptionOptions,
    ) -> Result<Transcript, TranscriptionError> {
        tokio::fs::metadata(audio_path).await?;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.transcript.clone())
    }
}
