//! SQLite-backed store adapter for the Paragames REST API.
//!
//! Owns the single application database: region and event tables (seeded
//! from CSV at startup) plus the user table for the auth gate. All trait
//! operations are single-row reads/writes; partial updates build their
//! UPDATE statements dynamically from the present `Patch` fields.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use paragames::{
	prelude::*,
	store_adapter::{
		CreateEventData, Event, Region, StoreAdapter, UpdateEventData, UpdateRegionData, User,
	},
};

mod event;
mod region;
mod schema;
mod seed;
mod user;
mod utils;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			// referential integrity between events.NOC and regions.NOC
			.foreign_keys(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}

	/// Bulk-load regions and events from the two seed files.
	/// Returns the number of (regions, events) actually inserted.
	pub async fn seed_from_csv(
		&self,
		regions_csv: impl AsRef<Path>,
		events_csv: impl AsRef<Path>,
	) -> ClResult<(u64, u64)> {
		let regions = seed::seed_regions(&self.db, regions_csv.as_ref()).await?;
		let events = seed::seed_events(&self.db, events_csv.as_ref()).await?;
		Ok((regions, events))
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Region management
	//*******************
	async fn list_regions(&self) -> ClResult<Vec<Region>> {
		region::list(&self.db).await
	}

	async fn read_region(&self, noc: &str) -> ClResult<Region> {
		region::read(&self.db, noc).await
	}

	async fn create_region(&self, region: &Region) -> ClResult<()> {
		region::create(&self.db, region).await
	}

	async fn update_region(&self, noc: &str, data: &UpdateRegionData) -> ClResult<()> {
		region::update(&self.db, noc, data).await
	}

	async fn delete_region(&self, noc: &str) -> ClResult<()> {
		region::delete(&self.db, noc).await
	}

	// Event management
	//******************
	async fn list_events(&self) -> ClResult<Vec<Event>> {
		event::list(&self.db).await
	}

	async fn read_event(&self, id: i64) -> ClResult<Event> {
		event::read(&self.db, id).await
	}

	async fn create_event(&self, event: &CreateEventData) -> ClResult<i64> {
		event::create(&self.db, event).await
	}

	async fn update_event(&self, id: i64, data: &UpdateEventData) -> ClResult<()> {
		event::update(&self.db, id, data).await
	}

	async fn delete_event(&self, id: i64) -> ClResult<()> {
		event::delete(&self.db, id).await
	}

	// User management
	//*****************
	async fn create_user(&self, email: &str, password_hash: &str) -> ClResult<i64> {
		user::create(&self.db, email, password_hash).await
	}

	async fn read_user_by_email(&self, email: &str) -> ClResult<User> {
		user::read_by_email(&self.db, email).await
	}
}

// vim: ts=4
