use super::*;

const FILE_FIELD: &str = "file";

pub(super) async fn compare(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<CompareResponse>, Response> {
    let mut uploads: Vec<UploadedFile> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(&format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(&format!("read upload: {}", e)))?;
        uploads.push(UploadedFile { file_name, bytes });
    }

    let [first, second] = validate_uploads(uploads)?;

    let first_path = state
        .storage
        .save_upload(1, &first.0, &first.1)
        .map_err(internal_error)?;
    let second_path = state
        .storage
        .save_upload(2, &second.0, &second.1)
        .map_err(internal_error)?;

    let generated = state
        .storage
        .process(&first_path, &second_path)
        .map_err(invalid_input)?;

    let summary = SummaryView::from(&generated.report.comparison.summary);
    tracing::info!(
        first = %first.0,
        second = %second.0,
        output = %generated.file_name,
        similarity = %summary.similarity_score,
        "generated report"
    );

    Ok(Json(CompareResponse {
        message: format!("Successfully processed {} and {}", first.0, second.0),
        message_type: MessageType::Success,
        output_file: Some(generated.file_name),
        summary: Some(summary),
    }))
}

/// Checks the request shape and returns the two sanitized (name, bytes) pairs.
fn validate_uploads(
    uploads: Vec<UploadedFile>,
) -> Result<[(String, axum::body::Bytes); 2], Response> {
    if uploads.len() != 2 {
        return Err(bad_request("Please upload exactly two files."));
    }
    if uploads
        .iter()
        .any(|u| u.file_name.as_deref().unwrap_or("").is_empty())
    {
        return Err(bad_request("Both files must be selected."));
    }

    let mut out = Vec::with_capacity(2);
    for upload in uploads {
        let raw = upload.file_name.unwrap_or_default();
        let name = linemap::naming::sanitize_upload_name(&raw)
            .map_err(|e| bad_request(&e.to_string()))?;
        out.push((name, upload.bytes));
    }
    out.try_into()
        .map_err(|_| internal_error(anyhow::anyhow!("upload count changed")))
}
