use std::sync::Arc;

use aide::{
	axum::{
		routing::{get, get_with},
		ApiRouter, IntoApiResponse,
	},
	openapi::OpenApi,
	scalar::Scalar,
};
use axum::{response::IntoResponse, Extension, Json};

/// Where the generated document is served, relative to the docs router.
const DOCUMENT: &str = "/private/api.json";
const DOCUMENT_URL: &str = "/docs/private/api.json";

/// The Scalar UI at `/docs`, reading the document at `/docs/private/api.json`.
pub fn routes() -> ApiRouter {
	ApiRouter::new()
		.api_route(
			"/",
			get_with(
				Scalar::new(DOCUMENT_URL)
					.with_title("Travel Feed")
					.axum_handler(),
				|op| op.description("Interactive documentation for the posts, users and drafts API."),
			),
		)
		.route(DOCUMENT, get(serve_document))
}

async fn serve_document(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	Json(api.as_ref()).into_response()
}
