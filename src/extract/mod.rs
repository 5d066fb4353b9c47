//! Extractors that deserialize a part of the request, then run its
//! [`validator::Validate`] checks before the handler sees it.
//!
//! Every rejection is an [`AppError`], so handlers and pages answer
//! malformed input with the same error body.

use aide::OperationIo;
use axum::{
	body::Body,
	extract::{FromRequest, FromRequestParts, Request},
	http::{request, Response},
	response::IntoResponse,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

fn validated<T: Validate>(value: T) -> Result<T, AppError> {
	value.validate().map_err(AppError::Validation)?;
	Ok(value)
}

/// A JSON body, checked against its schema and its validation rules.
///
/// Also used as a response type, in which case it is plain JSON.
///
/// ```rust
/// async fn create_draft(Json(draft): Json<PostDraft>) -> Json<PostDraft> {
///   Json(draft.trimmed())
/// }
/// ```
#[derive(OperationIo)]
#[aide(
	input_with = "axum_jsonschema::Json<T>",
	output_with = "axum_jsonschema::Json<T>",
	json_schema
)]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
	fn into_response(self) -> Response<Body> {
		axum::Json(self.0).into_response()
	}
}

#[axum::async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned + Validate + JsonSchema + 'static,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let axum_jsonschema::Json(body) =
			axum_jsonschema::Json::<T>::from_request(req, state).await?;

		validated(body).map(Self)
	}
}

/// Query parameters, such as `?refresh=true` on the feed pages.
#[derive(OperationIo)]
#[aide(input_with = "axum::extract::Query<T>", json_schema)]
pub struct Query<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
	T: DeserializeOwned + Validate,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let axum::extract::Query(query) =
			axum::extract::Query::<T>::from_request_parts(parts, state).await?;

		validated(query).map(Self)
	}
}

/// Path parameters. A segment that does not parse, like `/api/posts/abc`,
/// is rejected as an invalid id rather than a missing route.
#[derive(OperationIo)]
#[aide(input_with = "axum::extract::Path<T>", json_schema)]
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
	T: DeserializeOwned + Validate + Send,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let axum::extract::Path(path) =
			axum::extract::Path::<T>::from_request_parts(parts, state).await?;

		validated(path).map(Self)
	}
}
