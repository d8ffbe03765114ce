//! Bootstrap module for opening the store and loading the seed data

use std::sync::Arc;

use paragames_store_adapter_sqlite::StoreAdapterSqlite;

use crate::app::{AppOpts, AppState};
use crate::prelude::*;

const DB_FILE: &str = "paragames.sqlite";
const REGIONS_CSV: &str = "noc_regions.csv";
const EVENTS_CSV: &str = "paralympic_events.csv";

/// Open the SQLite store under `opts.data_dir` and build the shared app
/// state. When both seed CSV files are present the reference data is
/// loaded as well; seeding is idempotent across restarts.
pub async fn init(opts: AppOpts) -> ClResult<App> {
	let store_adapter = StoreAdapterSqlite::new(opts.data_dir.join(DB_FILE)).await?;

	let regions_csv = opts.data_dir.join(REGIONS_CSV);
	let events_csv = opts.data_dir.join(EVENTS_CSV);
	if regions_csv.is_file() && events_csv.is_file() {
		let (regions, events) = store_adapter.seed_from_csv(&regions_csv, &events_csv).await?;
		info!("Seeded {} regions, {} events", regions, events);
	} else {
		debug!("No seed CSV files in {:?}, starting with the existing database", opts.data_dir);
	}

	Ok(AppState::new(opts, Arc::new(store_adapter)))
}

// vim: ts=4
