use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::TranscriptRenderer;
use crate::domain::OutputFormat;

use super::docx_renderer::DocxRenderer;
use super::plain_text_renderer::PlainTextRenderer;

pub struct RendererFactory;

impl RendererFactory {
    pub fn create(format: OutputFormat) -> Arc<dyn TranscriptRenderer> {
        match format {
            OutputFormat::Txt => Arc::new(PlainTextRenderer),
            OutputFormat::Docx => Arc::new(DocxRenderer),
        }
    }

    /// One renderer per supported output format.
    pub fn all() -> HashMap<OutputFormat, Arc<dyn TranscriptRenderer>> {
        OutputFormat::ALL
            .into_iter()
            .map(|format| (format, Self::create(format)))
            .collect()
    }
}
