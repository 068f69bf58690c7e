use std::sync::Arc;

use crate::application::services::TranscriptionPipeline;
use crate::presentation::config::ScaffoldConfig;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranscriptionPipeline>,
    pub max_upload_bytes: usize,
    pub scaffold_config: ScaffoldConfig,
}
