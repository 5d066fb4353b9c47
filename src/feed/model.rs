use std::time::Duration;

use schemars::JsonSchema;
use serde::Serialize;

/// A post prepared for display, with its author resolved.
#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: String,
	pub user_id: i64,
	/// The author's display name, or `null` when the user is unknown.
	pub author: Option<String>,
	/// A synthesized timestamp. It is not the real publication time.
	pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Where the records of a load came from.
#[derive(Clone, Copy, Debug, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Source {
	Live,
	Fallback,
}

/// The outcome of a single load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Load<T> {
	/// The upstream API answered and the records were transformed.
	Success(Vec<T>),
	/// The upstream API failed, so the static records are used instead.
	Fallback { items: Vec<T>, error: String },
}

impl<T> Load<T> {
	pub fn items(&self) -> &[T] {
		match self {
			Self::Success(items) | Self::Fallback { items, .. } => items,
		}
	}

	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Success(..) => None,
			Self::Fallback { error, .. } => Some(error),
		}
	}

	pub fn source(&self) -> Source {
		match self {
			Self::Success(..) => Source::Live,
			Self::Fallback { .. } => Source::Fallback,
		}
	}
}

/// A page of records as returned by the JSON API.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Page<T> {
	pub items: Vec<T>,
	pub count: usize,
	pub source: Source,
	/// The error that caused the fallback, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// Seconds until this page is fetched again.
	pub revalidate: u64,
}

impl<T> Page<T> {
	pub fn new(load: Load<T>, revalidate: Duration) -> Self {
		let source = load.source();
		let (items, error) = match load {
			Load::Success(items) => (items, None),
			Load::Fallback { items, error } => (items, Some(error)),
		};

		Self {
			count: items.len(),
			items,
			source,
			error,
			revalidate: revalidate.as_secs(),
		}
	}
}
