//! CSV seeding for the region and event tables
//!
//! Both tables are bulk-loaded at startup from tabular files. Seeding is
//! idempotent: regions insert with OR IGNORE on the NOC key, and events
//! (which have no natural key) are only loaded into an empty table.

use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::Path;

use crate::utils::inspect;
use paragames::prelude::*;

#[derive(Debug, Deserialize)]
struct RegionRecord {
	#[serde(rename = "NOC")]
	noc: String,
	region: String,
	notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventRecord {
	#[serde(rename = "type")]
	typ: String,
	year: i64,
	country: String,
	host: String,
	#[serde(rename = "NOC")]
	noc: String,
	start: Option<String>,
	end: Option<String>,
	duration: Option<i64>,
	disabilities_included: Option<String>,
	countries: Option<i64>,
	events: Option<i64>,
	sports: Option<i64>,
	participants_m: Option<i64>,
	participants_f: Option<i64>,
	participants: Option<i64>,
	highlights: Option<String>,
}

fn read_records<T: for<'de> Deserialize<'de>>(path: &Path) -> ClResult<Vec<T>> {
	let mut reader = csv::Reader::from_path(path)
		.map_err(|err| Error::Io(std::io::Error::other(err)))?;

	reader
		.deserialize()
		.collect::<Result<Vec<T>, _>>()
		.map_err(|err| Error::Io(std::io::Error::other(err)))
}

pub(crate) async fn seed_regions(db: &SqlitePool, path: &Path) -> ClResult<u64> {
	let records: Vec<RegionRecord> = read_records(path)?;

	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	let mut inserted = 0;

	for record in &records {
		let res = sqlx::query("INSERT OR IGNORE INTO regions (NOC, region, notes) VALUES (?1, ?2, ?3)")
			.bind(&record.noc)
			.bind(&record.region)
			.bind(record.notes.as_deref())
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
		inserted += res.rows_affected();
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	info!("Seeded {} of {} regions from {}", inserted, records.len(), path.display());
	Ok(inserted)
}

pub(crate) async fn seed_events(db: &SqlitePool, path: &Path) -> ClResult<u64> {
	let existing: i64 = sqlx::query_scalar("SELECT count(*) FROM events")
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if existing > 0 {
		info!("Event table already seeded ({} rows), skipping {}", existing, path.display());
		return Ok(0);
	}

	let records: Vec<EventRecord> = read_records(path)?;

	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	for record in &records {
		sqlx::query(
			"INSERT INTO events (type, year, country, host, NOC, start, \"end\", duration, \
				disabilities_included, countries, events, sports, participants_m, \
				participants_f, participants, highlights) \
				VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
		)
		.bind(&record.typ)
		.bind(record.year)
		.bind(&record.country)
		.bind(&record.host)
		.bind(&record.noc)
		.bind(record.start.as_deref())
		.bind(record.end.as_deref())
		.bind(record.duration)
		.bind(record.disabilities_included.as_deref())
		.bind(record.countries)
		.bind(record.events)
		.bind(record.sports)
		.bind(record.participants_m)
		.bind(record.participants_f)
		.bind(record.participants)
		.bind(record.highlights.as_deref())
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	info!("Seeded {} events from {}", records.len(), path.display());
	Ok(records.len() as u64)
}

// vim: ts=4
