use std::{borrow::Cow, fmt};

use aide::OperationOutput;
use axum::{
	body::Body,
	extract::rejection,
	http::{Response, StatusCode},
	response::IntoResponse,
	Json,
};
use schemars::JsonSchema;
use serde::Serialize;

pub type Map = serde_json::Map<String, serde_json::Value>;

/// A single error message sent to the client.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message<'a> {
	pub content: Cow<'a, str>,
	/// The input field the message refers to, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<Cow<'a, str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Cow<'a, Map>>,
}

impl<'a> Message<'a> {
	pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
		Self {
			content: content.into(),
			field: None,
			details: None,
		}
	}

	pub fn field(mut self, field: impl Into<Cow<'a, str>>) -> Self {
		self.field = Some(field.into());
		self
	}

	pub fn detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
		self.details
			.get_or_insert_with(|| Cow::Owned(Map::new()))
			.to_mut()
			.insert(key.into(), value.into());
		self
	}

	pub fn into_vec(self) -> Vec<Self> {
		vec![self]
	}
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
	pub success: bool,
	pub errors: Vec<Message<'a>>,
}

/// Describes how a route-specific error is presented to the client.
pub trait ErrorShape: std::error::Error {
	fn status(&self) -> StatusCode;

	fn into_errors(self) -> Vec<Message<'static>>;
}

/// Errors shared by every route, mostly extractor rejections.
///
/// The Display trait is not sent to the client, so it can show
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("json error: {0:?}")]
	Json(axum_jsonschema::JsonSchemaRejection),
	#[error("query error: {0}")]
	Query(#[from] rejection::QueryRejection),
	#[error("path error: {0}")]
	Path(#[from] rejection::PathRejection),
}

impl AppError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Validation(..) | Self::Json(..) | Self::Query(..) | Self::Path(..) => {
				StatusCode::BAD_REQUEST
			}
		}
	}

	fn into_errors(self) -> Vec<Message<'static>> {
		match self {
			Self::Validation(errors) => errors
				.field_errors()
				.into_iter()
				.flat_map(|(field, errors)| {
					errors.iter().map(move |error| {
						let content = error
							.message
							.clone()
							.unwrap_or_else(|| error.code.clone());

						Message::new(content.into_owned()).field(field.to_owned())
					})
				})
				.collect(),
			Self::Json(error) => Message::new(format!("{error:?}")).into_vec(),
			Self::Query(error) => Message::new(error.body_text()).into_vec(),
			Self::Path(error) => Message::new("invalid id")
				.field("id")
				.detail("reason", error.body_text())
				.into_vec(),
		}
	}
}

impl From<axum_jsonschema::JsonSchemaRejection> for AppError {
	fn from(rejection: axum_jsonschema::JsonSchemaRejection) -> Self {
		Self::Json(rejection)
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		match self {
			// Schema rejections already carry a detailed body.
			Self::Json(error) => error.into_response(),
			error => respond(error.status(), error.into_errors()),
		}
	}
}

/// The error returned by route handlers: either a shared [`AppError`],
/// or an error specific to the route group.
#[derive(Debug)]
pub enum RouteError<E> {
	App(AppError),
	Route(E),
}

impl<E: fmt::Display> fmt::Display for RouteError<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::App(error) => fmt::Display::fmt(error, f),
			Self::Route(error) => fmt::Display::fmt(error, f),
		}
	}
}

impl<E: ErrorShape> From<E> for RouteError<E> {
	fn from(error: E) -> Self {
		Self::Route(error)
	}
}

impl<E> From<AppError> for RouteError<E> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<E: ErrorShape> IntoResponse for RouteError<E> {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::App(error) => error.into_response(),
			Self::Route(error) => respond(error.status(), error.into_errors()),
		}
	}
}

impl<E> OperationOutput for RouteError<E> {
	type Inner = ErrorResponse<'static>;
}

fn respond(status: StatusCode, errors: Vec<Message<'static>>) -> Response<Body> {
	if status.is_server_error() {
		tracing::error!(?errors, %status, "request failed");
	}

	(
		status,
		Json(ErrorResponse {
			success: false,
			errors,
		}),
	)
		.into_response()
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	use super::{ErrorShape, Message};

	#[derive(Debug, thiserror::Error)]
	#[error("missing thing")]
	struct Missing(i64);

	impl ErrorShape for Missing {
		fn status(&self) -> StatusCode {
			StatusCode::NOT_FOUND
		}

		fn into_errors(self) -> Vec<Message<'static>> {
			Message::new(self.to_string()).detail("id", self.0).into_vec()
		}
	}

	#[test]
	fn test_message_serialization() {
		let value = serde_json::to_value(Missing(4).into_errors()).unwrap();

		assert_eq!(
			value,
			serde_json::json!([{ "content": "missing thing", "details": { "id": 4 } }])
		);
	}

	#[test]
	fn test_field_message() {
		let value = serde_json::to_value(Message::new("Title is required").field("title")).unwrap();

		assert_eq!(value["field"], "title");
		assert!(value.get("details").is_none());
	}
}
