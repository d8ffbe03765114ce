//! Field extraction helpers for the per-entity schema modules
//!
//! The schema modules in the server crate map external JSON onto entity
//! structs explicitly, one declared field at a time. These helpers do the
//! shared part: pull a field out of a JSON object, type-check it, and
//! record any violation under the field's name so the caller can return
//! the whole mapping in a 400 body.

use serde_json::{Map, Value};

use crate::error::{ClResult, Error, ValidationErrors};
use crate::types::Patch;

pub const MISSING: &str = "Missing data for required field.";
pub const NOT_NULL: &str = "Field may not be null.";
pub const NOT_STR: &str = "Not a valid string.";
pub const NOT_INT: &str = "Not a valid integer.";
pub const UNKNOWN: &str = "Unknown field.";
pub const IMMUTABLE: &str = "Immutable field.";

/// The input must be a JSON object; anything else is a schema-level error
pub fn as_object(value: &Value) -> ClResult<&Map<String, Value>> {
	value.as_object().ok_or_else(|| {
		let mut errs = ValidationErrors::new();
		errs.add("_schema", "Invalid input type.");
		Error::ValidationError(errs)
	})
}

/// Record an "Unknown field." violation for every key outside the schema
pub fn check_unknown(obj: &Map<String, Value>, declared: &[&str], errs: &mut ValidationErrors) {
	for key in obj.keys() {
		if !declared.contains(&key.as_str()) {
			errs.add(key, UNKNOWN);
		}
	}
}

fn coerce_int(value: &Value) -> Option<i64> {
	match value {
		Value::Number(n) => n.as_i64(),
		// marshmallow-style coercion: integer-valued strings are accepted
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

pub fn require_str(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Option<Box<str>> {
	match obj.get(field) {
		None => {
			errs.add(field, MISSING);
			None
		}
		Some(Value::Null) => {
			errs.add(field, NOT_NULL);
			None
		}
		Some(Value::String(s)) => Some(s.as_str().into()),
		Some(_) => {
			errs.add(field, NOT_STR);
			None
		}
	}
}

pub fn opt_str(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Option<Box<str>> {
	match obj.get(field) {
		None | Some(Value::Null) => None,
		Some(Value::String(s)) => Some(s.as_str().into()),
		Some(_) => {
			errs.add(field, NOT_STR);
			None
		}
	}
}

pub fn require_int(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Option<i64> {
	match obj.get(field) {
		None => {
			errs.add(field, MISSING);
			None
		}
		Some(Value::Null) => {
			errs.add(field, NOT_NULL);
			None
		}
		Some(v) => match coerce_int(v) {
			Some(n) => Some(n),
			None => {
				errs.add(field, NOT_INT);
				None
			}
		},
	}
}

pub fn opt_int(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Option<i64> {
	match obj.get(field) {
		None | Some(Value::Null) => None,
		Some(v) => match coerce_int(v) {
			Some(n) => Some(n),
			None => {
				errs.add(field, NOT_INT);
				None
			}
		},
	}
}

/// Partial-update string field: absent keys stay Undefined
pub fn patch_str(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Patch<Box<str>> {
	match obj.get(field) {
		None => Patch::Undefined,
		Some(Value::Null) => Patch::Null,
		Some(Value::String(s)) => Patch::Value(s.as_str().into()),
		Some(_) => {
			errs.add(field, NOT_STR);
			Patch::Undefined
		}
	}
}

/// Like [`patch_str`] for NOT NULL columns: an explicit null is a violation
pub fn patch_str_required(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Patch<Box<str>> {
	match obj.get(field) {
		Some(Value::Null) => {
			errs.add(field, NOT_NULL);
			Patch::Undefined
		}
		_ => patch_str(obj, field, errs),
	}
}

pub fn patch_int(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Patch<i64> {
	match obj.get(field) {
		None => Patch::Undefined,
		Some(Value::Null) => Patch::Null,
		Some(v) => match coerce_int(v) {
			Some(n) => Patch::Value(n),
			None => {
				errs.add(field, NOT_INT);
				Patch::Undefined
			}
		},
	}
}

/// Like [`patch_int`] for NOT NULL columns
pub fn patch_int_required(obj: &Map<String, Value>, field: &str, errs: &mut ValidationErrors) -> Patch<i64> {
	match obj.get(field) {
		Some(Value::Null) => {
			errs.add(field, NOT_NULL);
			Patch::Undefined
		}
		_ => patch_int(obj, field, errs),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn obj(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			_ => Map::new(),
		}
	}

	#[test]
	fn require_str_reports_missing_null_and_type() {
		let map = obj(json!({ "region": 42, "notes": null }));
		let mut errs = ValidationErrors::new();

		assert!(require_str(&map, "NOC", &mut errs).is_none());
		assert!(require_str(&map, "region", &mut errs).is_none());
		assert!(require_str(&map, "notes", &mut errs).is_none());

		assert!(errs.contains("NOC"));
		assert!(errs.contains("region"));
		assert!(errs.contains("notes"));
	}

	#[test]
	fn int_coercion_accepts_numeric_strings() {
		let map = obj(json!({ "year": "2012", "countries": 164, "sports": "twenty" }));
		let mut errs = ValidationErrors::new();

		assert_eq!(require_int(&map, "year", &mut errs), Some(2012));
		assert_eq!(opt_int(&map, "countries", &mut errs), Some(164));
		assert_eq!(opt_int(&map, "sports", &mut errs), None);
		assert!(errs.contains("sports"));
		assert!(!errs.contains("year"));
	}

	#[test]
	fn patch_fields_distinguish_absent_from_null() {
		let map = obj(json!({ "notes": null, "region": "Great Britain" }));
		let mut errs = ValidationErrors::new();

		assert!(patch_str(&map, "notes", &mut errs).is_null());
		assert_eq!(
			patch_str_required(&map, "region", &mut errs).value().map(AsRef::as_ref),
			Some("Great Britain")
		);
		assert!(patch_str(&map, "host", &mut errs).is_undefined());
		assert!(errs.is_empty());
	}

	#[test]
	fn patch_required_rejects_null() {
		let map = obj(json!({ "region": null }));
		let mut errs = ValidationErrors::new();

		assert!(patch_str_required(&map, "region", &mut errs).is_undefined());
		assert!(errs.contains("region"));
	}

	#[test]
	fn unknown_fields_are_reported() {
		let map = obj(json!({ "NOC": "GBR", "regoin": "typo" }));
		let mut errs = ValidationErrors::new();

		check_unknown(&map, &["NOC", "region", "notes"], &mut errs);
		assert!(errs.contains("regoin"));
		assert!(!errs.contains("NOC"));
	}
}

// vim: ts=4
