use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use super::model::Post;
use crate::upstream::{ApiPost, User};

/// The most posts shown on a single page.
pub const MAX_POSTS: usize = 12;

/// Synthetic timestamps fall within this many milliseconds before now (~116 days).
pub const RECENT_WINDOW_MS: i64 = 10_000_000_000;

/// Upper-cases the first character of `input`, leaving the rest untouched.
pub fn capitalize(input: &str) -> String {
	let mut chars = input.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Maps user ids to display names. Later users win on duplicate ids.
pub fn author_index(users: &[User]) -> HashMap<i64, &str> {
	users
		.iter()
		.map(|user| (user.id, user.name.as_str()))
		.collect()
}

/// A random point within the last [`RECENT_WINDOW_MS`] milliseconds.
pub fn recent<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> DateTime<Utc> {
	now - TimeDelta::milliseconds(rng.random_range(0..RECENT_WINDOW_MS))
}

/// Decorates the first [`MAX_POSTS`] posts with their author name
/// and a synthetic creation time, normalizing title and content.
pub fn join_posts<R: Rng>(
	posts: &[ApiPost],
	users: &[User],
	now: DateTime<Utc>,
	rng: &mut R,
) -> Vec<Post> {
	let authors = author_index(users);

	posts
		.iter()
		.take(MAX_POSTS)
		.map(|post| Post {
			id: post.id,
			title: capitalize(&post.title),
			content: capitalize(&post.body),
			user_id: post.user_id,
			author: authors.get(&post.user_id).map(|name| (*name).to_owned()),
			created_at: recent(now, &mut *rng),
		})
		.collect()
}
