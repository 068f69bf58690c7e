use transcriber::application::ports::TranscriptRenderer;
use transcriber::domain::OutputFormat;
use transcriber::infrastructure::rendering::{DocxRenderer, PlainTextRenderer, RendererFactory};

use crate::helpers::docx_paragraphs;

const TRANSCRIPT: &str = "Bot: Hello\nUser: Hi there\n";

#[test]
fn given_transcript_when_rendering_plain_text_then_bytes_are_unchanged() {
    let bytes = PlainTextRenderer.render(TRANSCRIPT).unwrap();

    assert_eq!(bytes, TRANSCRIPT.as_bytes());
}

#[test]
fn given_transcript_when_rendering_docx_then_single_paragraph_equals_text_output() {
    let bytes = DocxRenderer.render(TRANSCRIPT).unwrap();

    assert_eq!(docx_paragraphs(&bytes), vec![TRANSCRIPT.to_string()]);
}

#[test]
fn given_markup_characters_when_rendering_docx_then_text_survives_escaping() {
    let text = "Speaker C: 5 < 6 & \"quoted\"\n";

    let bytes = DocxRenderer.render(text).unwrap();

    assert_eq!(docx_paragraphs(&bytes), vec![text.to_string()]);
}

#[test]
fn given_empty_transcript_when_rendering_docx_then_document_has_one_empty_paragraph() {
    let bytes = DocxRenderer.render("").unwrap();

    assert_eq!(docx_paragraphs(&bytes), vec![String::new()]);
}

#[test]
fn given_factory_when_listing_renderers_then_every_format_is_covered() {
    let renderers = RendererFactory::all();

    for format in OutputFormat::ALL {
        assert!(renderers.contains_key(&format));
    }
}
