use transcriber::domain::OutputFormat;
use transcriber::presentation::forms::{UploadForm, UploadedFile};

const REQUIRED: &str = "This field is required.";

fn audio(name: &str, data: &[u8]) -> Option<UploadedFile> {
    Some(UploadedFile {
        file_name: Some(name.to_string()),
        data: data.to_vec(),
    })
}

#[test]
fn given_file_and_docx_choice_when_validating_then_submission_is_accepted() {
    let form = UploadForm {
        audio_file: audio("call.wav", b"RIFF"),
        file_type: Some("docx".to_string()),
    };

    let submission = form.validate().unwrap();

    assert_eq!(submission.output_format, OutputFormat::Docx);
    assert_eq!(submission.file_name, "call.wav");
    assert_eq!(submission.audio, b"RIFF");
}

#[test]
fn given_no_file_when_validating_then_audio_field_is_required() {
    let form = UploadForm {
        audio_file: None,
        file_type: Some("txt".to_string()),
    };

    let invalid = form.validate().unwrap_err();

    assert_eq!(invalid.errors.audio_file, vec![REQUIRED.to_string()]);
    assert!(invalid.errors.file_type.is_empty());
}

#[test]
fn given_empty_form_when_validating_then_both_fields_are_required() {
    let invalid = UploadForm::default().validate().unwrap_err();

    assert_eq!(invalid.errors.audio_file, vec![REQUIRED.to_string()]);
    assert_eq!(invalid.errors.file_type, vec![REQUIRED.to_string()]);
    assert_eq!(invalid.selected, OutputFormat::Txt);
}

#[test]
fn given_part_without_file_name_when_validating_then_audio_field_is_required() {
    let form = UploadForm {
        audio_file: Some(UploadedFile {
            file_name: Some(String::new()),
            data: Vec::new(),
        }),
        file_type: Some("txt".to_string()),
    };

    let invalid = form.validate().unwrap_err();

    assert_eq!(invalid.errors.audio_file, vec![REQUIRED.to_string()]);
}

#[test]
fn given_empty_file_when_validating_then_reports_empty_file() {
    let form = UploadForm {
        audio_file: audio("silence.wav", b""),
        file_type: Some("txt".to_string()),
    };

    let invalid = form.validate().unwrap_err();

    assert_eq!(
        invalid.errors.audio_file,
        vec!["The submitted file is empty.".to_string()]
    );
}

#[test]
fn given_unknown_choice_when_validating_then_reports_invalid_choice() {
    let form = UploadForm {
        audio_file: audio("call.wav", b"RIFF"),
        file_type: Some("pdf".to_string()),
    };

    let invalid = form.validate().unwrap_err();

    assert_eq!(
        invalid.errors.file_type,
        vec!["Select a valid choice. pdf is not one of the available choices.".to_string()]
    );
    assert_eq!(invalid.selected, OutputFormat::Txt);
}

#[test]
fn given_missing_file_with_docx_choice_when_validating_then_choice_is_kept() {
    let form = UploadForm {
        audio_file: None,
        file_type: Some("docx".to_string()),
    };

    let invalid = form.validate().unwrap_err();

    assert_eq!(invalid.selected, OutputFormat::Docx);
}
