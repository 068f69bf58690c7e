mod upload_form;
mod upload_page;

pub use upload_form::{
    AUDIO_FILE_FIELD, FILE_TYPE_FIELD, FormErrors, InvalidUpload, UploadForm, UploadSubmission,
    UploadedFile,
};
pub use upload_page::render_upload_page;
