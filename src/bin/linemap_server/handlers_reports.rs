use super::*;

pub(super) async fn download_report(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, Response> {
    let xml = load_report(&state, &filename)?;
    let disposition = format!("attachment; filename=\"{}\"", filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        xml,
    )
        .into_response())
}

pub(super) async fn view_report(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, Response> {
    let xml = load_report(&state, &filename)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        xml,
    )
        .into_response())
}

fn load_report(state: &AppState, filename: &str) -> Result<String, Response> {
    linemap::naming::validate_report_name(filename).map_err(|e| bad_request(&e.to_string()))?;
    state
        .storage
        .read_report(filename)
        .map_err(internal_error)?
        .ok_or_else(not_found)
}
