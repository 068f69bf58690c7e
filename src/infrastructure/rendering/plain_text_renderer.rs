use crate::application::ports::{RenderError, TranscriptRenderer};

pub struct PlainTextRenderer;

impl TranscriptRenderer for PlainTextRenderer {
    fn render(&self, transcript_text: &str) -> Result<Vec<u8>, RenderError> {
        Ok(transcript_text.as_bytes().to_vec())
    }
}
