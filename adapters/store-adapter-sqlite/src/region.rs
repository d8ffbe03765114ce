//! Region CRUD operations

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::utils::*;
use paragames::{prelude::*, store_adapter::{Region, UpdateRegionData}};

const NOT_FOUND: &str = "Region not found";

fn from_row(row: &SqliteRow) -> Result<Region, sqlx::Error> {
	Ok(Region {
		noc: row.try_get("NOC")?,
		region: row.try_get("region")?,
		notes: row.try_get("notes")?,
	})
}

pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<Region>> {
	let rows = sqlx::query("SELECT NOC, region, notes FROM regions ORDER BY NOC")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(&rows, from_row)
}

pub(crate) async fn read(db: &SqlitePool, noc: &str) -> ClResult<Region> {
	let res = sqlx::query("SELECT NOC, region, notes FROM regions WHERE NOC = ?1")
		.bind(noc)
		.fetch_one(db)
		.await;

	map_res(res, NOT_FOUND, from_row)
}

pub(crate) async fn create(db: &SqlitePool, region: &Region) -> ClResult<()> {
	sqlx::query("INSERT INTO regions (NOC, region, notes) VALUES (?1, ?2, ?3)")
		.bind(region.noc.as_ref())
		.bind(region.region.as_ref())
		.bind(region.notes.as_deref())
		.execute(db)
		.await
		.map_err(|err| {
			map_integrity(err, &format!("Region {} already exists", region.noc))
		})?;

	Ok(())
}

pub(crate) async fn update(db: &SqlitePool, noc: &str, data: &UpdateRegionData) -> ClResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE regions SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "region", &data.region, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "notes", &data.notes, |v| v.as_ref());

	if !has_updates {
		// No fields to update; the row must still exist
		return read(db, noc).await.map(|_| ());
	}

	query.push(" WHERE NOC=").push_bind(noc);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound(NOT_FOUND.into()));
	}

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, noc: &str) -> ClResult<()> {
	// Restrict: dependent events block the delete. The explicit check gives
	// a deterministic message, the FK constraint remains as backstop.
	let dependents: i64 = sqlx::query_scalar("SELECT count(*) FROM events WHERE NOC = ?1")
		.bind(noc)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if dependents > 0 {
		return Err(Error::Conflict(
			format!("Region {} has dependent events", noc).into(),
		));
	}

	let res = sqlx::query("DELETE FROM regions WHERE NOC = ?1")
		.bind(noc)
		.execute(db)
		.await
		.map_err(|err| map_integrity(err, &format!("Region {} has dependent events", noc)))?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound(NOT_FOUND.into()));
	}

	Ok(())
}

// vim: ts=4
