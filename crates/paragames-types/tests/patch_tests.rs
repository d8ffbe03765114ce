#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use serde::{Deserialize, Serialize};

use paragames_types::error::ValidationErrors;
use paragames_types::schema::{patch_int, patch_str, patch_str_required};
use paragames_types::store_adapter::UpdateRegionData;
use paragames_types::types::Patch;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestStruct {
	#[serde(default)]
	region: Patch<String>,
	#[serde(default)]
	year: Patch<u32>,
	#[serde(default)]
	notes: Patch<String>,
}

#[test]
fn test_patch_undefined() {
	// Missing fields should deserialize to Undefined
	let json = r#"{"year": 2012}"#;
	let result: TestStruct = serde_json::from_str(json).unwrap();

	assert!(result.region.is_undefined());
	assert!(result.year.is_value());
	assert_eq!(result.year.value(), Some(&2012));
	assert!(result.notes.is_undefined());
}

#[test]
fn test_patch_null() {
	// Null fields should deserialize to Null
	let json = r#"{"notes": null, "year": 2016}"#;
	let result: TestStruct = serde_json::from_str(json).unwrap();

	assert!(result.notes.is_null());
	assert!(result.year.is_value());
	assert_eq!(result.year.value(), Some(&2016));
	assert!(result.region.is_undefined());
}

#[test]
fn test_patch_value() {
	let json = r#"{"region": "Hungary", "year": 2024, "notes": "host"}"#;
	let result: TestStruct = serde_json::from_str(json).unwrap();

	assert!(result.region.is_value());
	assert_eq!(result.region.value(), Some(&"Hungary".to_string()));
	assert!(result.year.is_value());
	assert!(result.notes.is_value());
}

#[test]
fn test_patch_mixed() {
	// Mix of undefined, null, and values
	let json = r#"{"region": "France", "notes": null}"#;
	let result: TestStruct = serde_json::from_str(json).unwrap();

	assert!(result.region.is_value());
	assert!(result.year.is_undefined());
	assert!(result.notes.is_null());
}

#[test]
fn test_patch_as_option() {
	let undefined: Patch<i32> = Patch::Undefined;
	let null: Patch<i32> = Patch::Null;
	let value: Patch<i32> = Patch::Value(42);

	assert_eq!(undefined.as_option(), None);
	assert_eq!(null.as_option(), Some(None));
	assert_eq!(value.as_option(), Some(Some(&42)));
}

#[test]
fn test_patch_map() {
	let value: Patch<i32> = Patch::Value(10);
	assert_eq!(value.map(|x| x * 2), Patch::Value(20));

	let null: Patch<i32> = Patch::Null;
	assert_eq!(null.map(|x| x * 2), Patch::Null);

	let undefined: Patch<i32> = Patch::Undefined;
	assert_eq!(undefined.map(|x| x * 2), Patch::Undefined);
}

#[test]
fn test_patch_serialize() {
	let test = TestStruct {
		region: Patch::Value("Italy".to_string()),
		year: Patch::Null,
		notes: Patch::Undefined,
	};

	let json = serde_json::to_string(&test).unwrap();
	// Undefined and Null both serialize to null, Value serializes to the value
	assert!(json.contains("\"region\":\"Italy\""));
	assert!(json.contains("\"year\":null"));
	assert!(json.contains("\"notes\":null"));
}

#[test]
fn test_patch_builds_region_update_from_json() {
	// A PATCH body flows through the field helpers into tri-state update
	// data: sent fields become Value, an explicit null clears, absent keys
	// stay Undefined and leave the row untouched.
	let body = serde_json::json!({ "region": "Great Britain", "notes": null });
	let obj = body.as_object().unwrap();
	let mut errs = ValidationErrors::new();

	let update = UpdateRegionData {
		region: patch_str_required(obj, "region", &mut errs),
		notes: patch_str(obj, "notes", &mut errs),
	};

	assert!(errs.is_empty());
	assert_eq!(update.region.value().map(AsRef::as_ref), Some("Great Britain"));
	assert!(update.notes.is_null());

	let empty = serde_json::json!({});
	let obj = empty.as_object().unwrap();
	let update = UpdateRegionData {
		region: patch_str_required(obj, "region", &mut errs),
		notes: patch_str(obj, "notes", &mut errs),
	};
	assert!(update.region.is_undefined());
	assert!(update.notes.is_undefined());
	assert!(errs.is_empty());
}

#[test]
fn test_patch_int_coercion_interplay() {
	// Numeric strings coerce to Patch::Value, real numbers pass through,
	// garbage records a violation and stays Undefined.
	let body = serde_json::json!({ "year": "1984", "duration": 11, "sports": "many" });
	let obj = body.as_object().unwrap();
	let mut errs = ValidationErrors::new();

	assert_eq!(patch_int(obj, "year", &mut errs), Patch::Value(1984));
	assert_eq!(patch_int(obj, "duration", &mut errs), Patch::Value(11));
	assert!(patch_int(obj, "sports", &mut errs).is_undefined());
	assert!(patch_int(obj, "countries", &mut errs).is_undefined());
	assert!(errs.contains("sports"));
	assert!(!errs.contains("year"));
}

// vim: ts=4
