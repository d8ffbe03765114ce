//! App state type

use std::{
	collections::HashMap,
	path::PathBuf,
	sync::{Arc, RwLock},
};

use crate::prelude::*;
use paragames_types::store_adapter::StoreAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct AppOpts {
	pub listen: Box<str>,
	/// Holds the SQLite database and the two seed CSV files
	pub data_dir: PathBuf,
}

pub struct AppState {
	pub opts: AppOpts,
	pub store_adapter: Arc<dyn StoreAdapter>,
	/// Opaque session tokens, token -> user id. Process lifetime only, no
	/// expiry; restarting the server invalidates every token.
	sessions: RwLock<HashMap<Box<str>, i64>>,
}

pub type App = Arc<AppState>;

impl AppState {
	pub fn new(opts: AppOpts, store_adapter: Arc<dyn StoreAdapter>) -> App {
		Arc::new(Self { opts, store_adapter, sessions: RwLock::new(HashMap::new()) })
	}

	pub fn register_session(&self, token: &str, user_id: i64) -> ClResult<()> {
		let mut sessions =
			self.sessions.write().map_err(|_| Error::Internal("session map poisoned".into()))?;
		sessions.insert(token.into(), user_id);
		Ok(())
	}

	pub fn session_user(&self, token: &str) -> ClResult<Option<i64>> {
		let sessions =
			self.sessions.read().map_err(|_| Error::Internal("session map poisoned".into()))?;
		Ok(sessions.get(token).copied())
	}
}

// vim: ts=4
