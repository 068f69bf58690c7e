mod transcript_formatter;
mod transcription_pipeline;

pub use transcript_formatter::format_transcript;
pub use transcription_pipeline::{PipelineError, TranscriptionPipeline};
