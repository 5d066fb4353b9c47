#![warn(clippy::pedantic)]

mod config;
mod error;
mod extract;
mod feed;
mod openapi;
mod render;
mod route;
mod trace;
mod upstream;

#[cfg(test)]
mod test;

use feed::{Feed, Windows};
use upstream::Upstream;

pub use config::Config;

pub type AppState = State;

/// The shared application state.
///
/// Handlers pull out the parts they need through [`axum::extract::FromRef`].
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub feed: Feed,
}

impl State {
	pub fn new(config: &Config) -> Result<Self, upstream::Error> {
		let upstream = Upstream::new(config)?;
		let windows = Windows {
			live: config.revalidate,
			fallback: config.fallback_revalidate,
		};

		Ok(Self {
			feed: Feed::new(upstream, windows),
		})
	}
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
	#[error("invalid configuration: {0}")]
	Config(#[from] config::Error),
	#[error("failed to build upstream client: {0}")]
	Upstream(#[from] upstream::Error),
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
	dotenvy::dotenv().ok();
	trace::init_tracing_subscriber();

	let config = Config::from_env()?;
	let state = State::new(&config)?;

	tracing::info!(upstream = %state.feed.upstream().base_url(), "using upstream API");

	let app = route::router(state);
	let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

	tracing::info!("listening on {}", listener.local_addr()?);

	axum::serve(listener, app).await?;

	Ok(())
}
