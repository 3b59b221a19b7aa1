use super::*;

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(CompareResponse::error(message))).into_response()
}

pub(super) fn bad_request(msg: &str) -> Response {
    tracing::warn!(error = msg, "rejected request");
    error_response(StatusCode::BAD_REQUEST, msg.to_string())
}

pub(super) fn invalid_input(err: anyhow::Error) -> Response {
    tracing::warn!(error = %format!("{:#}", err), "input could not be compared");
    error_response(StatusCode::UNPROCESSABLE_ENTITY, format!("{:#}", err))
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    tracing::error!(error = %format!("{:#}", err), "request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
}

pub(super) fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "not found".to_string())
}
