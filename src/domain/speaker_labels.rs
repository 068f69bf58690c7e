use std::collections::HashMap;

/// Resolves diarization speaker codes to display names.
///
/// Codes without an entry fall back to `Speaker <code>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerLabelMap {
    labels: HashMap<String, String>,
}

impl SpeakerLabelMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
        }
    }

    pub fn label_for(&self, speaker: &str) -> String {
        self.labels
            .get(speaker)
            .cloned()
            .unwrap_or_else(|| format!("Speaker {}", speaker))
    }
}

impl Default for SpeakerLabelMap {
    fn default() -> Self {
        Self::new([("A", "Bot"), ("B", "User")])
    }
}
