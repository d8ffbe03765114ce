//! Database schema initialization and migrations

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Get the current database version from the vars table
async fn get_db_version(tx: &mut Transaction<'_, Sqlite>) -> i64 {
	sqlx::query_scalar::<_, String>("SELECT value FROM vars WHERE key = 'db_version'")
		.fetch_optional(&mut **tx)
		.await
		.ok()
		.flatten()
		.and_then(|v| v.parse().ok())
		.unwrap_or(0)
}

/// Set the database version in the vars table
async fn set_db_version(tx: &mut Transaction<'_, Sqlite>, version: i64) {
	let _ = sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES ('db_version', ?)")
		.bind(version.to_string())
		.execute(&mut **tx)
		.await;
}

// Current schema version - update this when adding new migrations
const CURRENT_DB_VERSION: i64 = 1;

/// Initialize the database schema and run migrations
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Create vars table first (needed for version tracking)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text NOT NULL,
		created_at INTEGER DEFAULT (unixepoch()),
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	let version = get_db_version(&mut tx).await;

	// Schema creation - safe to run every time (uses IF NOT EXISTS)

	// Regions, keyed by the 3-letter NOC code
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS regions (
			NOC text NOT NULL,
			region text NOT NULL,
			notes text,
			PRIMARY KEY(NOC)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Events, one row per games edition. \"end\" is a reserved word in
	// SQLite and stays quoted in every statement that touches it.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS events (
			id integer PRIMARY KEY,
			type text NOT NULL,
			year integer NOT NULL,
			country text NOT NULL,
			host text NOT NULL,
			NOC text NOT NULL REFERENCES regions(NOC),
			start text,
			\"end\" text,
			duration integer,
			disabilities_included text,
			countries integer,
			events integer,
			sports integer,
			participants_m integer,
			participants_f integer,
			participants integer,
			highlights text
		)",
	)
	.execute(&mut *tx)
	.await?;

	// API users
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
			id integer PRIMARY KEY,
			email text NOT NULL UNIQUE,
			password text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch())
		)",
	)
	.execute(&mut *tx)
	.await?;

	if version < CURRENT_DB_VERSION {
		set_db_version(&mut tx, CURRENT_DB_VERSION).await;
	}

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
