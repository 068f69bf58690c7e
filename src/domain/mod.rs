mod output_format;
mod rendered_document;
mod speaker_labels;
mod transcript;
mod utterance;

pub use output_format::{DOCX_MIME, OutputFormat};
pub use rendered_document::RenderedDocument;
pub use speaker_labels::SpeakerLabelMap;
pub use transcript::{Transcript, TranscriptStatus};
pub use utterance::Utterance;
