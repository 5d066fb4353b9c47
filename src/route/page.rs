//! The server-rendered pages. These are plain axum routes and are
//! left out of the `OpenAPI` document.

use axum::{
	extract::State,
	http::header,
	response::{Html, IntoResponse},
};

use crate::{
	extract::Query,
	feed::Feed,
	render::{self, page},
	route::model,
};

pub async fn home() -> Html<String> {
	Html(page::home())
}

pub async fn about() -> Html<String> {
	Html(page::about())
}

/// The travel blog. Falls back to the static posts with a warning banner.
pub async fn posts(
	State(feed): State<Feed>,
	Query(input): Query<model::RefreshInput>,
) -> impl IntoResponse {
	let (load, left) = feed.posts(input.refresh).await;

	(
		[(header::CACHE_CONTROL, render::cache_control(left))],
		Html(page::posts(&load)),
	)
}

/// The user directory. Falls back to the static users with a warning banner.
pub async fn users(
	State(feed): State<Feed>,
	Query(input): Query<model::RefreshInput>,
) -> impl IntoResponse {
	let (load, left) = feed.users(input.refresh).await;

	(
		[(header::CACHE_CONTROL, render::cache_control(left))],
		Html(page::users(&load)),
	)
}
