use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown_post")]
	UnknownPost(i64),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route("/", get_with(get_posts, get_posts_docs))
		.api_route("/:id", get_with(get_post, get_post_docs))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost(..) => StatusCode::NOT_FOUND,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let Self::UnknownPost(post) = self;

		error::Message::new("The post is not part of the current feed.")
			.field("id")
			.detail("post", post)
			.into_vec()
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_list_posts() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app.get("/api/posts").await;
		let page = response.json::<Value>();

		assert_eq!(response.status_code(), 200);
		assert_eq!(page["count"], 12);
		assert_eq!(page["source"], "live");
		assert!(page.get("error").is_none());

		let posts = page["items"].as_array().unwrap();

		assert_eq!(posts.len(), 12);
		assert_eq!(posts[0]["title"], "Post number 1");
		assert_eq!(posts[0]["content"], "A quiet place by the sea");
		assert_eq!(posts[0]["author"], "Ervin Howell");
		assert_eq!(posts[1]["author"], Value::Null);
		assert_eq!(posts[2]["author"], "Leanne Graham");
		assert!(posts[0]["createdAt"].is_string());
	}

	#[tokio::test]
	async fn test_list_posts_fallback() {
		let app = app(StatusCode::NOT_FOUND, StatusCode::OK).await;

		let page = app.get("/api/posts").await.json::<Value>();

		assert_eq!(page["count"], 6);
		assert_eq!(page["source"], "fallback");
		assert_eq!(page["error"], "API error: 404 200");
		assert_eq!(page["items"][5]["author"], "Budget Explorer");
	}

	#[tokio::test]
	async fn test_get_post() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app.get("/api/posts/3").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["author"], "Leanne Graham");
	}

	#[tokio::test]
	async fn test_get_post_outside_feed() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		// only the first 12 upstream posts are part of the feed
		let response = app.get("/api/posts/13").await;
		let body = response.json::<Value>();

		assert_eq!(response.status_code(), 404);
		assert_eq!(body["success"], false);
		assert_eq!(body["errors"][0]["details"]["post"], 13);
	}

	#[tokio::test]
	async fn test_get_post_invalid_id() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		assert_eq!(app.get("/api/posts/0").await.status_code(), 400);

		let response = app.get("/api/posts/abc").await;
		let body = response.json::<Value>();

		assert_eq!(response.status_code(), 400);
		assert_eq!(body["errors"][0]["content"], "invalid id");
		assert_eq!(body["errors"][0]["field"], "id");
	}
}
