use aide::axum::{routing::post_with, ApiRouter};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new().api_route("/", post_with(create_draft, create_draft_docs))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_valid_draft_is_trimmed() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app
			.post("/api/drafts")
			.json(&json!({
				"title": "  Porto by night ",
				"content": "Tiles, wine and a river that glows after dark.\n",
			}))
			.await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(
			response.json::<Value>(),
			json!({
				"title": "Porto by night",
				"content": "Tiles, wine and a river that glows after dark.",
			})
		);
	}

	#[tokio::test]
	async fn test_invalid_draft() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app
			.post("/api/drafts")
			.json(&json!({ "title": "Hi", "content": "" }))
			.await;
		let body = response.json::<Value>();

		assert_eq!(response.status_code(), 400);
		assert_eq!(body["success"], false);

		let mut errors = body["errors"]
			.as_array()
			.unwrap()
			.iter()
			.map(|error| (error["field"].as_str().unwrap().to_owned(), error["content"].as_str().unwrap().to_owned()))
			.collect::<Vec<_>>();
		errors.sort();

		assert_eq!(
			errors,
			[
				("content".to_owned(), "Content is required".to_owned()),
				("title".to_owned(), "Title must be at least 3 characters long".to_owned()),
			]
		);
	}

	#[tokio::test]
	async fn test_missing_field() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app
			.post("/api/drafts")
			.json(&json!({ "title": "Only a title" }))
			.await;

		assert_eq!(response.status_code(), 400);
	}
}
