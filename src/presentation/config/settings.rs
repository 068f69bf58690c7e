use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::ports::TranscriptionOptions;
use crate::infrastructure::transcription::{DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub assemblyai: AssemblyAiSettings,
    pub transcription: TranscriptionSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct AssemblyAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub poll_interval_ms: u64,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for AssemblyAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyAiSettings")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub speaker_labels: bool,
    pub speakers_expected: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
    pub scratch_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml`, then `APP__SECTION__KEY`
    /// variables. `ASSEMBLYAI_API_KEY` wins over everything for the credential.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("assemblyai.api_key", "")?
            .set_default("assemblyai.base_url", DEFAULT_BASE_URL)?
            .set_default(
                "assemblyai.poll_interval_ms",
                DEFAULT_POLL_INTERVAL.as_millis() as i64,
            )?
            .set_default("transcription.speaker_labels", true)?
            .set_default("transcription.speakers_expected", 2_i64)?
            .set_default("upload.max_file_size_mb", 100_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.config_file_name()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "assemblyai.api_key",
                std::env::var("ASSEMBLYAI_API_KEY").ok(),
            )?
            .build()?
            .try_deserialize()
    }

    pub fn transcription_options(&self) -> TranscriptionOptions {
        TranscriptionOptions {
            speaker_labels: self.transcription.speaker_labels,
            speakers_expected: self.transcription.speakers_expected,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.assemblyai.poll_interval_ms)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.upload.max_file_size_mb * 1024 * 1024
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.upload
            .scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("transcriber"))
    }
}
