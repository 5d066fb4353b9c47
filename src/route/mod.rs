use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{openapi, AppState};

pub mod docs;
pub mod draft;
pub mod model;
pub mod page;
pub mod post;
pub mod user;

/// Builds the full application: pages, the JSON API and its documentation.
pub fn router(state: AppState) -> Router {
	let mut api = OpenApi::default();

	ApiRouter::new()
		.route("/", get(page::home))
		.route("/about", get(page::about))
		.route("/posts", get(page::posts))
		.route("/users", get(page::users))
		.nest_api_service("/docs", docs::routes())
		.nest("/api/posts", post::routes())
		.nest("/api/users", user::routes())
		.nest("/api/drafts", draft::routes())
		.finish_api_with(&mut api, openapi::docs)
		.layer(Extension(Arc::new(api)))
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

#[cfg(test)]
mod test {
	use std::{
		sync::{
			atomic::{AtomicUsize, Ordering},
			Arc,
		},
		time::Duration,
	};

	use crate::test::*;

	#[tokio::test]
	async fn test_static_pages() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		for path in ["/", "/about"] {
			let response = app.get(path).await;

			assert_eq!(response.status_code(), 200);
			assert!(response.text().starts_with("<!DOCTYPE html>"));
		}
	}

	#[tokio::test]
	async fn test_posts_page_live() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let response = app.get("/posts").await;
		let html = response.text();

		assert_eq!(response.status_code(), 200);
		assert_eq!(html.matches("data-post-id=").count(), 12);
		assert!(html.contains("Post number 1"));
		assert!(html.contains("Leanne Graham"));
		assert!(html.contains("Unknown author"));
		assert!(!html.contains("Using Static Fallback Data"));
	}

	#[tokio::test]
	async fn test_posts_page_fallback() {
		let app = app(StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR).await;

		let response = app.get("/posts").await;
		let html = response.text();

		assert_eq!(response.status_code(), 200);
		assert_eq!(html.matches("data-post-id=").count(), 6);
		assert!(html.contains("API error: 200 500"));
		assert!(html.contains("Welcome to Our Travel Community"));
		assert!(html.contains(r#"href="/posts?refresh=true""#));
	}

	#[tokio::test]
	async fn test_users_page_fallback() {
		let app = app(StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR).await;

		let html = app.get("/users").await.text();

		assert_eq!(html.matches("data-user-id=").count(), 3);
		assert!(html.contains("API error: 500"));
		assert!(html.contains("Showing 3 users (static fallback)"));
	}

	#[tokio::test]
	async fn test_cache_control_follows_outcome() {
		let config = Config {
			revalidate: Duration::from_secs(3600),
			fallback_revalidate: Duration::from_secs(600),
			..config_for("")
		};
		let app = app_with(
			config,
			upstream(StatusCode::OK, StatusCode::SERVICE_UNAVAILABLE),
		)
		.await;

		let response = app.get("/posts").await;

		assert_eq!(response.header("cache-control"), "public, s-maxage=600");
	}

	#[tokio::test]
	async fn test_revalidation_window() {
		let hits = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&hits);
		let router = upstream(StatusCode::OK, StatusCode::OK).layer(axum::middleware::from_fn(
			move |request: axum::extract::Request, next: axum::middleware::Next| {
				let counter = Arc::clone(&counter);

				async move {
					counter.fetch_add(1, Ordering::SeqCst);
					next.run(request).await
				}
			},
		));
		let config = Config {
			revalidate: Duration::from_secs(3600),
			..config_for("")
		};
		let app = app_with(config, router).await;

		app.get("/posts").await;
		app.get("/api/posts").await;

		// posts and users, fetched once
		assert_eq!(hits.load(Ordering::SeqCst), 2);

		app.get("/posts").add_query_param("refresh", "true").await;

		assert_eq!(hits.load(Ordering::SeqCst), 4);
	}

	#[tokio::test]
	async fn test_openapi_document() {
		let app = app(StatusCode::OK, StatusCode::OK).await;

		let api = app.get("/docs/private/api.json").await.json::<Value>();

		let paths = api["paths"].as_object().unwrap();

		for path in [
			"/api/posts/",
			"/api/posts/{id}",
			"/api/users/",
			"/api/users/{id}",
			"/api/drafts/",
		] {
			assert!(paths.contains_key(path), "missing {path}");
		}

		assert_eq!(api["paths"]["/api/drafts/"]["post"]["tags"][0], "Draft");
		assert_eq!(app.get("/docs").await.status_code(), 200);
	}
}
