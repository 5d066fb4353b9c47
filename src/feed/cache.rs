use std::{future::Future, time::Duration};

use tokio::{
	sync::{Mutex, RwLock},
	time::Instant,
};

use super::model::Load;

/// How long a load is reused, depending on how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Windows {
	pub live: Duration,
	pub fallback: Duration,
}

impl Windows {
	pub fn of<T>(&self, load: &Load<T>) -> Duration {
		match load {
			Load::Success(..) => self.live,
			Load::Fallback { .. } => self.fallback,
		}
	}
}

struct Entry<T> {
	loaded_at: Instant,
	/// Bumped on every reload, so waiters can tell a newer load apart.
	generation: u64,
	load: Load<T>,
}

/// Keeps the most recent load around until its window runs out.
///
/// Readers of a fresh load never wait on a reload. Reloads are serialized,
/// and a caller that waited on someone else's reload takes its result
/// instead of fetching again.
pub struct Revalidate<T> {
	windows: Windows,
	entry: RwLock<Option<Entry<T>>>,
	reload: Mutex<()>,
}

impl<T: Clone> Revalidate<T> {
	pub fn new(windows: Windows) -> Self {
		Self {
			windows,
			entry: RwLock::new(None),
			reload: Mutex::new(()),
		}
	}

	fn remaining(&self, entry: &Entry<T>) -> Duration {
		self.windows
			.of(&entry.load)
			.saturating_sub(entry.loaded_at.elapsed())
	}

	/// Returns the stored load if it is still fresh, otherwise runs `load`
	/// and stores its result. `refresh` skips the freshness check.
	///
	/// The returned duration is the time left until the load expires.
	pub async fn get<F, Fut>(&self, refresh: bool, load: F) -> (Load<T>, Duration)
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Load<T>>,
	{
		let seen = {
			let entry = self.entry.read().await;

			if let Some(entry) = entry.as_ref().filter(|_| !refresh) {
				let left = self.remaining(entry);

				if !left.is_zero() {
					return (entry.load.clone(), left);
				}
			}

			entry.as_ref().map(|entry| entry.generation)
		};

		let _reload = self.reload.lock().await;

		{
			let entry = self.entry.read().await;

			if let Some(entry) = entry.as_ref().filter(|entry| Some(entry.generation) != seen) {
				return (entry.load.clone(), self.remaining(entry));
			}
		}

		tracing::debug!(refresh, "revalidating");

		let load = load().await;
		let window = self.windows.of(&load);
		let mut entry = self.entry.write().await;
		let generation = entry.as_ref().map_or(0, |entry| entry.generation + 1);

		*entry = Some(Entry {
			loaded_at: Instant::now(),
			generation,
			load: load.clone(),
		});

		(load, window)
	}
}
