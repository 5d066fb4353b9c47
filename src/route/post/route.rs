use axum::extract::State;
use macros::route;

use crate::{
	extract::{Json, Path, Query},
	feed::{Feed, Page, Post},
	openapi::tag,
	route::model,
};

use super::{Error, RouteError};

/// List posts
/// Returns up to 12 recent posts with their authors resolved. If the upstream API
/// failed, the static fallback posts are returned along with the error.
#[route(tag = tag::POST)]
pub async fn get_posts(
	State(feed): State<Feed>,
	Query(input): Query<model::RefreshInput>,
) -> Json<Page<Post>> {
	let (load, left) = feed.posts(input.refresh).await;

	Json(Page::new(load, left))
}

/// Get single post
/// Returns a single post from the current feed by its id.
#[route(tag = tag::POST, response(status = 404, description = "The post is not part of the current feed."))]
pub async fn get_post(
	State(feed): State<Feed>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<Post>, RouteError> {
	let (load, _) = feed.posts(false).await;

	let post = load
		.items()
		.iter()
		.find(|post| post.id == path.id)
		.cloned()
		.ok_or(Error::UnknownPost(path.id))?;

	Ok(Json(post))
}
