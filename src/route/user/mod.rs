use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod route;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	#[error("unknown_user")]
	UnknownUser(i64),
}

type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route("/", get_with(get_users, get_users_docs))
		.api_route("/:id", get_with(get_user, get_user_docs))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownUser(..) => StatusCode::NOT_FOUND,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let Self::UnknownUser(user) = self;

		error::Message::new("The user is not part of the current directory.")
			.field("id")
			.detail("user", user)
			.into_vec()
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_list_users() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let page = app.get("/api/users").await.json::<Value>();

		assert_eq!(page["source"], "live");
		assert_eq!(page["count"], 2);
		assert_eq!(page["items"][0]["company"]["catchPhrase"], "Multi-layered client-server neural-net");
		assert_eq!(page["items"][1]["username"], "");
	}

	#[tokio::test]
	async fn test_users_fallback_on_server_error() {
		let app = app(StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR).await;

		let page = app.get("/api/users").await.json::<Value>();

		assert_eq!(page["source"], "fallback");
		assert_eq!(page["items"].as_array().unwrap().len(), 3);
		assert!(page["error"].as_str().unwrap().contains("500"));
	}

	#[tokio::test]
	async fn test_get_user() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app.get("/api/users/1").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["name"], "Leanne Graham");

		let response = app.get("/api/users/7").await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Value>()["errors"][0]["details"]["user"], 7);
	}
}
