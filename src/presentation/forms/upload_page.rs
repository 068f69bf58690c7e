use crate::domain::OutputFormat;

use super::upload_form::{AUDIO_FILE_FIELD, FILE_TYPE_FIELD, FormErrors};

/// Renders the upload page, showing any validation errors beside their fields.
pub fn render_upload_page(errors: &FormErrors, selected: OutputFormat) -> String {
    let options: String = OutputFormat::ALL
        .iter()
        .map(|format| {
            let selected_attr = if *format == selected { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                format.as_form_value(),
                selected_attr,
                format.display_name()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Audio Transcriber</title>
</head>
<body>
<h1>Transcribe an audio file</h1>
{non_field}<form method="post" action="/" enctype="multipart/form-data">
<p>
<label for="id_{audio}">Select an audio file (.mp3 or .wav)</label>
<input type="file" name="{audio}" id="id_{audio}" accept="audio/*" required>
{audio_errors}</p>
<p>
<label for="id_{file_type}">Output format</label>
<select name="{file_type}" id="id_{file_type}">{options}</select>
{file_type_errors}</p>
<button type="submit">Transcribe</button>
</form>
</body>
</html>
"#,
        non_field = error_list(&errors.non_field),
        audio = AUDIO_FILE_FIELD,
        audio_errors = error_list(&errors.audio_file),
        file_type = FILE_TYPE_FIELD,
        options = options,
        file_type_errors = error_list(&errors.file_type),
    )
}

fn error_list(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape_html(m)))
        .collect();
    format!("<ul class=\"errorlist\">{}</ul>\n", items)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
