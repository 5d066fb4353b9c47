//! Client for the placeholder REST API that backs the posts and users pages.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;

pub mod model;

pub use model::{ApiPost, User};

/// An error raised while fetching from the upstream API.
///
/// The messages are shown to visitors on the fallback banner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("API error: {}", join_statuses(.0))]
	Status(Vec<StatusCode>),
	#[error("invalid response body: {0}")]
	Decode(reqwest::Error),
}

fn join_statuses(statuses: &[StatusCode]) -> String {
	statuses
		.iter()
		.map(|status| status.as_u16().to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

#[derive(Clone, Debug)]
pub struct Upstream {
	client: Client,
	base_url: String,
}

impl Upstream {
	pub fn new(config: &Config) -> Result<Self, Error> {
		let client = Client::builder()
			.timeout(config.upstream_timeout)
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self {
			client,
			base_url: config.upstream_url.clone(),
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	async fn get(&self, resource: &str) -> Result<Response, reqwest::Error> {
		let url = format!("{}/{resource}", self.base_url);

		tracing::debug!(%url, "fetching upstream resource");

		self.client.get(url).send().await
	}

	/// Fetches posts and users concurrently.
	///
	/// Both requests always run to completion. The combined operation fails
	/// if either request fails, or if either status is not a success, in which
	/// case both status codes are reported.
	pub async fn posts_and_users(&self) -> Result<(Vec<ApiPost>, Vec<User>), Error> {
		let (posts, users) = tokio::join!(self.get("posts"), self.get("users"));
		let (posts, users) = (posts?, users?);

		if !posts.status().is_success() || !users.status().is_success() {
			return Err(Error::Status(vec![posts.status(), users.status()]));
		}

		tokio::try_join!(decode(posts), decode(users))
	}

	/// Fetches the list of users on its own.
	pub async fn users(&self) -> Result<Vec<User>, Error> {
		let response = self.get("users").await?;

		if !response.status().is_success() {
			return Err(Error::Status(vec![response.status()]));
		}

		decode(response).await
	}
}

async fn decode<T>(response: Response) -> Result<T, Error>
where
	T: DeserializeOwned,
{
	response.json().await.map_err(Error::Decode)
}
