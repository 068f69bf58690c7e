/// Serializes a formatted transcript into a downloadable document body.
pub trait TranscriptRenderer: Send + Sync {
    fn render(&self, transcript_text: &str) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document packaging failed: {0}")]
    PackagingFailed(String),
}
