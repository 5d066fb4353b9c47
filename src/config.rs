use std::{str::FromStr, time::Duration};

pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{key} must be a valid {expected}, got {value:?}")]
	Invalid {
		key: &'static str,
		expected: &'static str,
		value: String,
	},
}

/// Runtime configuration, read from the environment.
///
/// A `.env` file is loaded first (if present), so every value
/// can be overridden there during development.
#[derive(Clone, Debug)]
pub struct Config {
	pub host: String,
	pub port: u16,
	/// Base URL of the placeholder API, without a trailing slash.
	pub upstream_url: String,
	pub upstream_timeout: Duration,
	/// How long a successful load is reused before it is fetched again.
	pub revalidate: Duration,
	/// How long a fallback load is reused before it is fetched again.
	pub fallback_revalidate: Duration,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 3000,
			upstream_url: DEFAULT_UPSTREAM_URL.into(),
			upstream_timeout: Duration::from_secs(10),
			revalidate: Duration::from_secs(3600),
			fallback_revalidate: Duration::from_secs(600),
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from an arbitrary key lookup, falling back
	/// to the defaults for missing keys.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();

		Ok(Self {
			host: lookup("HOST").unwrap_or(defaults.host),
			port: parse(&lookup, "PORT", "port number")?.unwrap_or(defaults.port),
			upstream_url: lookup("UPSTREAM_URL")
				.map(|url| url.trim_end_matches('/').to_owned())
				.unwrap_or(defaults.upstream_url),
			upstream_timeout: parse(&lookup, "UPSTREAM_TIMEOUT_SECS", "number of seconds")?
				.map_or(defaults.upstream_timeout, Duration::from_secs),
			revalidate: parse(&lookup, "REVALIDATE_SECS", "number of seconds")?
				.map_or(defaults.revalidate, Duration::from_secs),
			fallback_revalidate: parse(&lookup, "FALLBACK_REVALIDATE_SECS", "number of seconds")?
				.map_or(defaults.fallback_revalidate, Duration::from_secs),
		})
	}
}

fn parse<F, T>(lookup: &F, key: &'static str, expected: &'static str) -> Result<Option<T>, Error>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
{
	lookup(key)
		.map(|value| {
			value.trim().parse().map_err(|_| Error::Invalid {
				key,
				expected,
				value,
			})
		})
		.transpose()
}
