use macros::route;

use crate::{extract::Json, openapi::tag};

use super::model;

/// Check a new post
/// Validates a post written through the new post form and returns it with
/// surrounding whitespace removed. Nothing is stored.
#[route(tag = tag::DRAFT, response(status = 400, description = "The draft is invalid."))]
pub async fn create_draft(Json(draft): Json<model::PostDraft>) -> Json<model::PostDraft> {
	Json(draft.trimmed())
}
