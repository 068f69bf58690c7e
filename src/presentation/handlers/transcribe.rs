use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::application::services::PipelineError;
use crate::domain::{OutputFormat, RenderedDocument};
use crate::presentation::forms::{FormErrors, UploadForm, render_upload_page};
use crate::presentation::state::AppState;

pub async fn upload_form_handler() -> Html<String> {
    Html(render_upload_page(&FormErrors::default(), OutputFormat::default()))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A body that is not multipart carries no file, so it validates as an empty form.
    let mut multipart = match multipart {
        Ok(multipart) => Some(multipart),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection, "Non-multipart submission");
            None
        }
    };

    let parsed = match multipart.as_mut() {
        Some(multipart) => UploadForm::from_multipart(multipart).await,
        None => Ok(UploadForm::default()),
    };

    let form = match parsed {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart upload");
            let errors =
                FormErrors::non_field(format!("Upload could not be read: {}", e.body_text()));
            return (
                e.status(),
                Html(render_upload_page(&errors, OutputFormat::default())),
            )
                .into_response();
        }
    };

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(invalid) => {
            tracing::debug!(errors = ?invalid.errors, "Upload form rejected");
            return Html(render_upload_page(&invalid.errors, invalid.selected)).into_response();
        }
    };

    tracing::info!(
        file_name = %submission.file_name,
        bytes = submission.audio.len(),
        format = %submission.output_format,
        "Transcription requested"
    );

    match state
        .pipeline
        .process(&submission.audio, submission.output_format)
        .await
    {
        Ok(document) => attachment_response(document),
        Err(e) => pipeline_error_response(&e),
    }
}

fn attachment_response(document: RenderedDocument) -> Response {
    let headers = [
        (header::CONTENT_TYPE, document.content_type().to_string()),
        (header::CONTENT_DISPOSITION, document.content_disposition()),
    ];
    (StatusCode::OK, headers, document.bytes).into_response()
}

fn pipeline_error_response(error: &PipelineError) -> Response {
    let message = match error {
        PipelineError::Service(detail) => {
            format!("Transcription failed: {}", detail)
        }
        other => {
            tracing::error!(error = %other, "Transcription pipeline failed");
            format!("An unexpected error occurred: {}", other)
        }
    };
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
