use axum::extract::State;
use macros::route;

use crate::{
	extract::{Json, Path, Query},
	feed::{Feed, Page},
	openapi::tag,
	route::model,
	upstream::User,
};

use super::{Error, RouteError};

/// List users
/// Returns the community directory, or the static fallback users
/// along with the error if the upstream API failed.
#[route(tag = tag::USER)]
pub async fn get_users(
	State(feed): State<Feed>,
	Query(input): Query<model::RefreshInput>,
) -> Json<Page<User>> {
	let (load, left) = feed.users(input.refresh).await;

	Json(Page::new(load, left))
}

/// Get single user
/// Returns a single user from the current directory by their id.
#[route(tag = tag::USER, response(status = 404, description = "The user is not part of the current directory."))]
pub async fn get_user(
	State(feed): State<Feed>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<User>, RouteError> {
	let (load, _) = feed.users(false).await;

	let user = load
		.items()
		.iter()
		.find(|user| user.id == path.id)
		.cloned()
		.ok_or(Error::UnknownUser(path.id))?;

	Ok(Json(user))
}
