mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    AssemblyAiSettings, LoggingSettings, ServerSettings, Settings, TranscriptionSettings,
    UploadSettings,
};
