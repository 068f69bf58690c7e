use super::utterance::Utterance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStatus {
    Completed,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub status: TranscriptStatus,
    pub utterances: Vec<Utterance>,
    pub error: Option<String>,
}

impl Transcript {
    pub fn completed(utterances: Vec<Utterance>) -> Self {
        Self {
            status: TranscriptStatus::Completed,
            utterances,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: TranscriptStatus::Error,
            utterances: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == TranscriptStatus::Error
    }
}
