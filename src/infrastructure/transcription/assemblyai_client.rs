use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionError, TranscriptionOptions, TranscriptionService};
use crate::domain::{Transcript, Utterance};

pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// AssemblyAI v2 client: upload, submit, then poll until the job settles.
pub struct AssemblyAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
}

impl AssemblyAiClient {
    pub fn new(api_key: String, base_url: Option<String>, poll_interval: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            poll_interval: poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        }
    }

    async fn upload(&self, audio_data: Vec<u8>) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/upload", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio_data)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload: {}", e)))?;

        let body: UploadResponse = read_json(response, "upload").await?;
        Ok(body.upload_url)
    }

    async fn submit(
        &self,
        audio_url: String,
        options: &TranscriptionOptions,
    ) -> Result<TranscriptResponse, TranscriptionError> {
        let url = format!("{}/v2/transcript", self.base_url);
        let request = TranscriptRequest {
            audio_url,
            speaker_labels: options.speaker_labels,
            speakers_expected: options.speakers_expected,
        };

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("submit: {}", e)))?;

        read_json(response, "submit").await
    }

    async fn fetch(&self, transcript_id: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let url = format!("{}/v2/transcript/{}", self.base_url, transcript_id);

        let response = self
            .client
            .get(&url)
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("poll: {}", e)))?;

        read_json(response, "poll").await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    stage: &str,
) -> Result<T, TranscriptionError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "{} status {}: {}",
            stage, status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| TranscriptionError::UnexpectedResponse(format!("{}: {}", stage, e)))
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
struct TranscriptRequest {
    audio_url: String,
    speaker_labels: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    speakers_expected: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[derive(Deserialize)]
struct TranscriptResponse {
    id: String,
    status: JobStatus,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    utterances: Option<Vec<UtteranceResponse>>,
}

#[derive(Deserialize)]
struct UtteranceResponse {
    speaker: String,
    text: String,
}

impl TranscriptResponse {
    fn into_transcript(self) -> Option<Transcript> {
        match self.status {
            JobStatus::Queued | JobStatus::Processing => None,
            JobStatus::Error => Some(Transcript::failed(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
            JobStatus::Completed => Some(Transcript::completed(
                self.utterances
                    .unwrap_or_default()
                    .into_iter()
                    .map(|u| Utterance::new(u.speaker, u.text))
                    .collect(),
            )),
        }
    }
}

#[async_trait]
impl TranscriptionService for AssemblyAiClient {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<Transcript, TranscriptionError> {
        let audio_data = tokio::fs::read(audio_path).await?;
        tracing::debug!(bytes = audio_data.len(), "Uploading audio to AssemblyAI");

        let audio_url = self.upload(audio_data).await?;
        let mut job = self.submit(audio_url, options).await?;
        let transcript_id = job.id.clone();

        tracing::info!(
            transcript_id = %transcript_id,
            speaker_labels = options.speaker_labels,
            "AssemblyAI transcription submitted"
        );

        loop {
            if let Some(transcript) = job.into_transcript() {
                tracing::info!(
                    transcript_id = %transcript_id,
                    failed = transcript.is_error(),
                    "AssemblyAI transcription settled"
                );
                return Ok(transcript);
            }
            tokio::time::sleep(self.poll_interval).await;
            job = self.fetch(&transcript_id).await?;
        }
    }
}
