use crate::domain::{SpeakerLabelMap, Utterance};

/// Joins utterances into `"<label>: <text>\n"` lines, preserving order.
pub fn format_transcript(utterances: &[Utterance], labels: &SpeakerLabelMap) -> String {
    let mut output = String::new();
    for utterance in utterances {
        output.push_str(&labels.label_for(&utterance.speaker));
        output.push_str(": ");
        output.push_str(&utterance.text);
        output.push('\n');
    }
    output
}
