use std::fmt;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Downloadable document kinds offered by the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Txt,
    Docx,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Txt, OutputFormat::Docx];

    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "txt" => Some(Self::Txt),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_form_value(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Txt => "Text File (.txt)",
            Self::Docx => "Word Document (.docx)",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Txt => "transcript.txt",
            Self::Docx => "transcript.docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Txt => "text/plain; charset=utf-8",
            Self::Docx => DOCX_MIME,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}
