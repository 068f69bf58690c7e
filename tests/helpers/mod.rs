#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use transcriber::application::ports::{
    TranscriptionError, TranscriptionOptions, TranscriptionService,
};
use transcriber::domain::{Transcript, Utterance};

pub fn greeting_utterances() -> Vec<Utterance> {
    vec![Utterance::new("A", "Hello"), Utterance::new("B", "Hi there")]
}

/// What a transcription call observed about its staged file.
#[derive(Debug, Clone)]
pub struct ObservedCall {
    pub path: PathBuf,
    pub contents: Option<Vec<u8>>,
    pub options: TranscriptionOptions,
}

pub enum Reply {
    Transcript(Transcript),
    ApiFailure(String),
}

/// Records every call and answers with a fixed reply.
pub struct RecordingTranscriptionService {
    reply: Reply,
    calls: AtomicUsize,
    observed: Mutex<Vec<ObservedCall>>,
}

impl RecordingTranscriptionService {
    pub fn completed(utterances: Vec<Utterance>) -> Self {
        Self::new(Reply::Transcript(Transcript::completed(utterances)))
    }

    pub fn service_error(detail: &str) -> Self {
        Self::new(Reply::Transcript(Transcript::failed(detail)))
    }

    pub fn api_failure(message: &str) -> Self {
        Self::new(Reply::ApiFailure(message.to_string()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            observed: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn observed(&self) -> Vec<ObservedCall> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionService for RecordingTranscriptionService {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.observed.lock().unwrap().push(ObservedCall {
            path: audio_path.to_path_buf(),
            contents: std::fs::read(audio_path).ok(),
            options: *options,
        });

        match &self.reply {
            Reply::Transcript(transcript) => Ok(transcript.clone()),
            Reply::ApiFailure(message) => {
                Err(TranscriptionError::ApiRequestFailed(message.clone()))
            }
        }
    }
}

pub fn scratch_entries(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

/// Text of every `w:p` in the document body, with `w:br` read as a newline.
pub fn docx_paragraphs(docx: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut rest = xml.as_str();

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>').unwrap();
        let tag = &after[..end];
        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");
        rest = &after[end + 1..];

        match name {
            "w:p" if self_closing => paragraphs.push(String::new()),
            "w:p" => current = Some(String::new()),
            "/w:p" => {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
            }
            "w:br" => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push('\n');
                }
            }
            "w:t" if !self_closing => {
                let close = rest.find("</w:t>").unwrap();
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&unescape_xml(&rest[..close]));
                }
                rest = &rest[close..];
            }
            _ => {}
        }
    }

    paragraphs
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Panics mid-call after noting which staged file it was handed.
#[derive(Default)]
pub struct PanickingTranscriptionService {
    seen_path: Mutex<Option<PathBuf>>,
}

impl PanickingTranscriptionService {
    pub fn seen_path(&self) -> Option<PathBuf> {
        self.seen_path.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionService for PanickingTranscriptionService {
    async fn transcribe(
        &self,
        audio_path: &Path,
        _options: &TranscriptionOptions,
    ) -> Result<Transcript, TranscriptionError> {
        assert!(audio_path.exists());
        *self.seen_path.lock().unwrap() = Some(audio_path.to_path_buf());
        panic!("decoder exploded");
    }
}
