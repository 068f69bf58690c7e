mod scratch_store;
mod transcript_renderer;
mod transcription_service;

pub use scratch_store::{ScratchFile, ScratchStore, ScratchStoreError};
pub use transcript_renderer::{RenderError, TranscriptRenderer};
pub use transcription_service::{TranscriptionError, TranscriptionOptions, TranscriptionService};
