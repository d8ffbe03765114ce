//! Event CRUD operations

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::utils::*;
use paragames::{
	prelude::*,
	store_adapter::{CreateEventData, Event, UpdateEventData},
};

const NOT_FOUND: &str = "Event not found";

const COLUMNS: &str = "id, type, year, country, host, NOC, start, \"end\", duration, \
	disabilities_included, countries, events, sports, participants_m, participants_f, \
	participants, highlights";

fn from_row(row: &SqliteRow) -> Result<Event, sqlx::Error> {
	Ok(Event {
		id: row.try_get("id")?,
		typ: row.try_get("type")?,
		year: row.try_get("year")?,
		country: row.try_get("country")?,
		host: row.try_get("host")?,
		noc: row.try_get("NOC")?,
		start: row.try_get("start")?,
		end: row.try_get("end")?,
		duration: row.try_get("duration")?,
		disabilities_included: row.try_get("disabilities_included")?,
		countries: row.try_get("countries")?,
		events: row.try_get("events")?,
		sports: row.try_get("sports")?,
		participants_m: row.try_get("participants_m")?,
		participants_f: row.try_get("participants_f")?,
		participants: row.try_get("participants")?,
		highlights: row.try_get("highlights")?,
	})
}

pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<Event>> {
	let rows = sqlx::query(&format!("SELECT {} FROM events ORDER BY id", COLUMNS))
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(&rows, from_row)
}

pub(crate) async fn read(db: &SqlitePool, id: i64) -> ClResult<Event> {
	let res = sqlx::query(&format!("SELECT {} FROM events WHERE id = ?1", COLUMNS))
		.bind(id)
		.fetch_one(db)
		.await;

	map_res(res, NOT_FOUND, from_row)
}

pub(crate) async fn create(db: &SqlitePool, event: &CreateEventData) -> ClResult<i64> {
	let res = sqlx::query(
		"INSERT INTO events (type, year, country, host, NOC, start, \"end\", duration, \
			disabilities_included, countries, events, sports, participants_m, \
			participants_f, participants, highlights) \
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
	)
	.bind(event.typ.as_ref())
	.bind(event.year)
	.bind(event.country.as_ref())
	.bind(event.host.as_ref())
	.bind(event.noc.as_ref())
	.bind(event.start.as_deref())
	.bind(event.end.as_deref())
	.bind(event.duration)
	.bind(event.disabilities_included.as_deref())
	.bind(event.countries)
	.bind(event.events)
	.bind(event.sports)
	.bind(event.participants_m)
	.bind(event.participants_f)
	.bind(event.participants)
	.bind(event.highlights.as_deref())
	.execute(db)
	.await
	.map_err(|err| map_integrity(err, &format!("Region {} does not exist", event.noc)))?;

	Ok(res.last_insert_rowid())
}

pub(crate) async fn update(db: &SqlitePool, id: i64, data: &UpdateEventData) -> ClResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE events SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "type", &data.typ, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "year", &data.year, |v| *v);
	has_updates = push_patch!(query, has_updates, "country", &data.country, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "host", &data.host, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "NOC", &data.noc, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "start", &data.start, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "\"end\"", &data.end, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "duration", &data.duration, |v| *v);
	has_updates = push_patch!(
		query,
		has_updates,
		"disabilities_included",
		&data.disabilities_included,
		|v| v.as_ref()
	);
	has_updates = push_patch!(query, has_updates, "countries", &data.countries, |v| *v);
	has_updates = push_patch!(query, has_updates, "events", &data.events, |v| *v);
	has_updates = push_patch!(query, has_updates, "sports", &data.sports, |v| *v);
	has_updates =
		push_patch!(query, has_updates, "participants_m", &data.participants_m, |v| *v);
	has_updates =
		push_patch!(query, has_updates, "participants_f", &data.participants_f, |v| *v);
	has_updates = push_patch!(query, has_updates, "participants", &data.participants, |v| *v);
	has_updates = push_patch!(query, has_updates, "highlights", &data.highlights, |v| v.as_ref());

	if !has_updates {
		return read(db, id).await.map(|_| ());
	}

	query.push(" WHERE id=").push_bind(id);

	let res = query.build().execute(db).await.map_err(|err| {
		map_integrity(err, "Referenced region does not exist")
	})?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound(NOT_FOUND.into()));
	}

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, id: i64) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM events WHERE id = ?1")
		.bind(id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound(NOT_FOUND.into()));
	}

	Ok(())
}

// vim: ts=4
