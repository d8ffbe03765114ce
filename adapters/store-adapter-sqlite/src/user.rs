//! User storage for the auth gate

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::utils::*;
use paragames::{prelude::*, store_adapter::User};

const NOT_FOUND: &str = "User not found";

fn from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
	Ok(User {
		id: row.try_get("id")?,
		email: row.try_get("email")?,
		password: row.try_get("password")?,
	})
}

pub(crate) async fn create(db: &SqlitePool, email: &str, password_hash: &str) -> ClResult<i64> {
	let res = sqlx::query("INSERT INTO users (email, password) VALUES (?1, ?2)")
		.bind(email)
		.bind(password_hash)
		.execute(db)
		.await
		.map_err(|err| map_integrity(err, &format!("User {} already exists", email)))?;

	Ok(res.last_insert_rowid())
}

pub(crate) async fn read_by_email(db: &SqlitePool, email: &str) -> ClResult<User> {
	let res = sqlx::query("SELECT id, email, password FROM users WHERE email = ?1")
		.bind(email)
		.fetch_one(db)
		.await;

	map_res(res, NOT_FOUND, from_row)
}

// vim: ts=4
