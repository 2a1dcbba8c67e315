use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use time::OffsetDateTime;

use memo_service::{Error as ServiceError, IncomingMessage, Reply};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/messages", post(handle_message))
		.with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
	state.service.health_check().await?;
	Ok(StatusCode::OK)
}

async fn handle_message(
	State(state): State<AppState>,
	Json(payload): Json<IncomingMessage>,
) -> Response {
	let reply = state.service.handle(payload, OffsetDateTime::now_utc()).await;
	let status = match reply {
		Reply::Failed { .. } => StatusCode::BAD_GATEWAY,
		Reply::Ignored | Reply::Help { .. } | Reply::Saved { .. } => StatusCode::OK,
	};
	(status, Json(reply)).into_response()
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Store { message } =>
				Self::new(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", message),
			ServiceError::Parser(inner) =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "parser_misconfigured", inner.to_string()),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };
		(self.status, Json(body)).into_response()
	}
}
