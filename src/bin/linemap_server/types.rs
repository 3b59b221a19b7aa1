use super::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) storage: Storage,
}

/// One `file` field of a compare upload.
pub(crate) struct UploadedFile {
    pub(crate) file_name: Option<String>,
    pub(crate) bytes: axum::body::Bytes,
}
