//! Shared utilities for the SQLite adapter
//!
//! Helper functions and macros for error mapping and dynamic UPDATE
//! building, used across all domain modules.

use sqlx::sqlite::SqliteRow;

use paragames::prelude::*;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Integrity violations (unique key, foreign key) must stay distinguishable
/// from plain database failures, so they map to Conflict with a caller
/// supplied message instead of DbError.
pub(crate) fn map_integrity(err: sqlx::Error, conflict_msg: &str) -> Error {
	if let sqlx::Error::Database(ref db_err) = err {
		match db_err.kind() {
			sqlx::error::ErrorKind::UniqueViolation
			| sqlx::error::ErrorKind::ForeignKeyViolation => {
				return Error::Conflict(conflict_msg.into());
			}
			_ => {}
		}
	}
	inspect(&err);
	Error::DbError
}

pub(crate) fn map_res<T, F>(
	row: Result<SqliteRow, sqlx::Error>,
	not_found: &str,
	f: F,
) -> ClResult<T>
where
	F: FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(&row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound(not_found.into())),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) fn collect_res<T, F>(rows: &[SqliteRow], f: F) -> ClResult<Vec<T>>
where
	F: Fn(&SqliteRow) -> Result<T, sqlx::Error>,
{
	let mut items = Vec::with_capacity(rows.len());
	for row in rows {
		items.push(f(row).inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

/// Appends `field=?` to a dynamic UPDATE for Patch fields that are present.
/// Returns true if a field was added (for tracking has_updates).
macro_rules! push_patch {
	// For bindable values
	($query:expr, $has_updates:expr, $field:literal, $patch:expr) => {{
		match $patch {
			Patch::Undefined => $has_updates,
			Patch::Null => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=NULL"));
				true
			}
			Patch::Value(v) => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=")).push_bind(v);
				true
			}
		}
	}};
	// For fields that need conversion before binding
	($query:expr, $has_updates:expr, $field:literal, $patch:expr, |$v:ident| $convert:expr) => {{
		match $patch {
			Patch::Undefined => $has_updates,
			Patch::Null => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=NULL"));
				true
			}
			Patch::Value($v) => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=")).push_bind($convert);
				true
			}
		}
	}};
}

pub(crate) use push_patch;

// vim: ts=4
