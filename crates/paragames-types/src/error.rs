//! Error types and their HTTP response mapping

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

pub type ClResult<T> = std::result::Result<T, Error>;

/// Field-level validation failures, keyed by field name.
///
/// Serializes to the body of a 400 response, e.g.
/// `{"region": ["Missing data for required field."]}`.
#[derive(Debug, Default, Serialize)]
pub struct ValidationErrors(BTreeMap<Box<str>, Vec<Box<str>>>);

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, field: &str, message: &str) {
		self.0.entry(field.into()).or_default().push(message.into());
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, field: &str) -> bool {
		self.0.contains_key(field)
	}

	/// Ok(()) if no violations were recorded, otherwise the whole set as an error
	pub fn into_result(self) -> ClResult<()> {
		if self.is_empty() {
			Ok(())
		} else {
			Err(Error::ValidationError(self))
		}
	}
}

impl std::fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let fields: Vec<&str> = self.0.keys().map(AsRef::as_ref).collect();
		write!(f, "validation failed for: {}", fields.join(", "))
	}
}

#[derive(Debug)]
pub enum Error {
	/// Malformed or missing input, carries field -> messages
	ValidationError(ValidationErrors),
	/// Key absent, carries a human readable resource message
	NotFound(Box<str>),
	/// Missing or unknown authentication token
	Unauthorized,
	/// Credentials did not match
	PermissionDenied,
	/// Uniqueness or foreign key violation
	Conflict(Box<str>),
	DbError,
	Internal(Box<str>),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ValidationError(errs) => write!(f, "{}", errs),
			Error::NotFound(msg) => write!(f, "not found: {}", msg),
			Error::Unauthorized => write!(f, "authentication token missing"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Conflict(msg) => write!(f, "conflict: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::ValidationError(errs) => {
				(StatusCode::BAD_REQUEST, Json(errs)).into_response()
			}
			Error::NotFound(msg) => (
				StatusCode::NOT_FOUND,
				Json(json!({ "error": format!("404 Not Found: {}", msg) })),
			)
				.into_response(),
			Error::Unauthorized => (
				StatusCode::UNAUTHORIZED,
				Json(json!({ "error": "Authentication token missing" })),
			)
				.into_response(),
			Error::PermissionDenied => (
				StatusCode::UNAUTHORIZED,
				Json(json!({ "error": "Invalid email or password" })),
			)
				.into_response(),
			Error::Conflict(msg) => {
				(StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
			}
			Error::DbError => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(json!({ "error": "database error" })),
			)
				.into_response(),
			Error::Internal(_) | Error::Io(_) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(json!({ "error": "internal error" })),
			)
				.into_response(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_errors_collect_per_field() {
		let mut errs = ValidationErrors::new();
		errs.add("region", "Missing data for required field.");
		errs.add("year", "Not a valid integer.");
		errs.add("year", "Field may not be null.");

		assert!(!errs.is_empty());
		assert!(errs.contains("region"));
		assert!(errs.contains("year"));
		assert!(!errs.contains("notes"));

		let json = serde_json::to_value(&errs).unwrap();
		assert_eq!(json["region"][0], "Missing data for required field.");
		assert_eq!(json["year"][1], "Field may not be null.");
	}

	#[test]
	fn empty_validation_errors_are_ok() {
		assert!(ValidationErrors::new().into_result().is_ok());

		let mut errs = ValidationErrors::new();
		errs.add("NOC", "Unknown field.");
		assert!(matches!(errs.into_result(), Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
