use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::application::ports::{RenderError, TranscriptRenderer};

/// Writes the transcript as a single Word paragraph.
///
/// Newlines become text-wrapping breaks inside one run so the paragraph's
/// extracted text matches the plain-text output.
pub struct DocxRenderer;

impl DocxRenderer {
    fn transcript_run(transcript_text: &str) -> Run {
        let mut run = Run::new();
        for (index, line) in transcript_text.split('\n').enumerate() {
            if index > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            if !line.is_empty() {
                run = run.add_text(line);
            }
        }
        run
    }
}

impl TranscriptRenderer for DocxRenderer {
    fn render(&self, transcript_text: &str) -> Result<Vec<u8>, RenderError> {
        let paragraph = Paragraph::new().add_run(Self::transcript_run(transcript_text));

        let mut buffer = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(paragraph)
            .build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::PackagingFailed(e.to_string()))?;

        let bytes = buffer.into_inner();
        tracing::debug!(bytes = bytes.len(), "Word document packaged");
        Ok(bytes)
    }
}
