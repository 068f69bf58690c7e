use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::domain::OutputFormat;

pub const AUDIO_FILE_FIELD: &str = "audio_file";
pub const FILE_TYPE_FIELD: &str = "file_type";

const REQUIRED: &str = "This field is required.";
const EMPTY_FILE: &str = "The submitted file is empty.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

/// Raw form fields as received, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub audio_file: Option<UploadedFile>,
    pub file_type: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSubmission {
    pub audio: Vec<u8>,
    pub file_name: String,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub audio_file: Vec<String>,
    pub file_type: Vec<String>,
    pub non_field: Vec<String>,
}

impl FormErrors {
    pub fn non_field(message: impl Into<String>) -> Self {
        Self {
            non_field: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.audio_file.is_empty() && self.file_type.is_empty() && self.non_field.is_empty()
    }
}

/// Validation failure, carrying what the re-rendered form needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUpload {
    pub errors: FormErrors,
    pub selected: OutputFormat,
}

impl UploadForm {
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(AUDIO_FILE_FIELD) => {
                    let file_name = field.file_name().map(str::to_string);
                    let data = field.bytes().await?.to_vec();
                    form.audio_file = Some(UploadedFile { file_name, data });
                }
                Some(FILE_TYPE_FIELD) => {
                    form.file_type = Some(field.text().await?);
                }
                other => {
                    tracing::debug!(field = ?other, "Ignoring unknown form field");
                }
            }
        }

        Ok(form)
    }

    pub fn validate(self) -> Result<UploadSubmission, InvalidUpload> {
        let mut errors = FormErrors::default();

        // Browsers send an unnamed, empty part when no file was chosen.
        let audio = match self.audio_file {
            Some(UploadedFile {
                file_name: Some(name),
                data,
            }) if !name.is_empty() => {
                if data.is_empty() {
                    errors.audio_file.push(EMPTY_FILE.to_string());
                    None
                } else {
                    Some((name, data))
                }
            }
            _ => {
                errors.audio_file.push(REQUIRED.to_string());
                None
            }
        };

        let output_format = match self.file_type.as_deref().map(str::trim) {
            None | Some("") => {
                errors.file_type.push(REQUIRED.to_string());
                None
            }
            Some(value) => match OutputFormat::from_form_value(value) {
                Some(format) => Some(format),
                None => {
                    errors.file_type.push(format!(
                        "Select a valid choice. {} is not one of the available choices.",
                        value
                    ));
                    None
                }
            },
        };

        match (audio, output_format) {
            (Some((file_name, audio)), Some(output_format)) => Ok(UploadSubmission {
                audio,
                file_name,
                output_format,
            }),
            (_, selected) => Err(InvalidUpload {
                errors,
                selected: selected.unwrap_or_default(),
            }),
        }
    }
}
