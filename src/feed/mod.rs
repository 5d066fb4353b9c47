//! Fetches, joins and caches the records behind the posts and users pages.
//!
//! A load either succeeds with live records, or fails and falls back to
//! the static records in [`fallback`], keeping the error for display.

use std::{sync::Arc, time::Duration};

use chrono::Utc;

use crate::upstream::{Upstream, User};

pub mod cache;
pub mod fallback;
pub mod model;
pub mod stats;
pub mod transform;

pub use cache::{Revalidate, Windows};
pub use model::{Load, Page, Post, Source};
pub use stats::{community_stats, CommunityStats};

/// Runs the combined fetch and join, falling back to the static posts on failure.
pub async fn load_posts(upstream: &Upstream) -> Load<Post> {
	let result = upstream.posts_and_users().await;
	let now = Utc::now();

	match result {
		Ok((posts, users)) => {
			let mut rng = rand::rng();
			let posts = transform::join_posts(&posts, &users, now, &mut rng);

			tracing::info!(count = posts.len(), "loaded posts");

			Load::Success(posts)
		}
		Err(error) => {
			tracing::error!(%error, "failed to fetch posts, using fallback data");

			Load::Fallback {
				items: fallback::posts(now),
				error: error.to_string(),
			}
		}
	}
}

/// Fetches the user directory, falling back to the static users on failure.
pub async fn load_users(upstream: &Upstream) -> Load<User> {
	match upstream.users().await {
		Ok(users) => {
			tracing::info!(count = users.len(), "loaded users");

			Load::Success(users)
		}
		Err(error) => {
			tracing::error!(%error, "failed to fetch users, using fallback data");

			Load::Fallback {
				items: fallback::users(),
				error: error.to_string(),
			}
		}
	}
}

/// The shared feed: an upstream client and one revalidating slot per page.
#[derive(Clone)]
pub struct Feed {
	upstream: Upstream,
	posts: Arc<Revalidate<Post>>,
	users: Arc<Revalidate<User>>,
}

impl Feed {
	pub fn new(upstream: Upstream, windows: Windows) -> Self {
		Self {
			upstream,
			posts: Arc::new(Revalidate::new(windows)),
			users: Arc::new(Revalidate::new(windows)),
		}
	}

	pub fn upstream(&self) -> &Upstream {
		&self.upstream
	}

	/// Returns the current posts and the time left until they are fetched again.
	pub async fn posts(&self, refresh: bool) -> (Load<Post>, Duration) {
		self.posts
			.get(refresh, || load_posts(&self.upstream))
			.await
	}

	/// Returns the current users and the time left until they are fetched again.
	pub async fn users(&self, refresh: bool) -> (Load<User>, Duration) {
		self.users
			.get(refresh, || load_users(&self.upstream))
			.await
	}
}
