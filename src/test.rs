//! Shared helpers for the HTTP tests.

pub use axum::{http::StatusCode, routing::get, Json, Router};
pub use axum_test::TestServer;
pub use serde_json::{json, Value};

pub use crate::{config::Config, AppState};

/// Serves `router` on a random local port, returning its base URL.
///
/// Used to stand in for the upstream API.
pub async fn serve(router: Router) -> String {
	let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
		.await
		.unwrap();
	let address = listener.local_addr().unwrap();

	tokio::spawn(async move {
		axum::serve(listener, router).await.unwrap();
	});

	format!("http://{address}")
}

/// A config that points at `url` and never reuses a load.
pub fn config_for(url: &str) -> Config {
	Config {
		upstream_url: url.into(),
		upstream_timeout: std::time::Duration::from_secs(5),
		revalidate: std::time::Duration::ZERO,
		fallback_revalidate: std::time::Duration::ZERO,
		..Config::default()
	}
}

/// Twenty posts spread over three users, the third of which is unknown.
pub fn upstream_posts() -> Value {
	(1..=20)
		.map(|id| {
			json!({
				"userId": id % 3 + 1,
				"id": id,
				"title": format!("post number {id}"),
				"body": "a quiet place by the sea",
			})
		})
		.collect()
}

pub fn upstream_users() -> Value {
	json!([
		{
			"id": 1,
			"name": "Leanne Graham",
			"username": "Bret",
			"email": "Sincere@april.biz",
			"phone": "1-770-736-8031 x56442",
			"website": "hildegard.org",
			"address": {
				"street": "Kulas Light",
				"suite": "Apt. 556",
				"city": "Gwenborough",
				"zipcode": "92998-3874",
				"geo": { "lat": "-37.3159", "lng": "81.1496" }
			},
			"company": {
				"name": "Romaguera-Crona",
				"catchPhrase": "Multi-layered client-server neural-net",
				"bs": "harness real-time e-markets"
			}
		},
		{ "id": 2, "name": "Ervin Howell" },
	])
}

/// An upstream API where `/posts` and `/users` answer with the given statuses.
pub fn upstream(posts: StatusCode, users: StatusCode) -> Router {
	Router::new()
		.route("/posts", get(move || async move { (posts, Json(upstream_posts())) }))
		.route("/users", get(move || async move { (users, Json(upstream_users())) }))
}

pub fn state(config: &Config) -> AppState {
	AppState::new(config).unwrap()
}

/// Builds the full application against the given upstream router.
pub async fn app_with(config: Config, router: Router) -> TestServer {
	let url = serve(router).await;
	let config = Config {
		upstream_url: url,
		..config
	};

	TestServer::new(crate::route::router(state(&config))).unwrap()
}

/// Builds the full application against an upstream API answering with the given statuses.
pub async fn app(posts: StatusCode, users: StatusCode) -> TestServer {
	app_with(config_for(""), upstream(posts, users)).await
}
