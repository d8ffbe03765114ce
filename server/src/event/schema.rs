//! Explicit JSON mapping for the event entity

use serde_json::Value;

use crate::prelude::*;
use paragames_types::schema::*;
use paragames_types::store_adapter::{CreateEventData, UpdateEventData};

const FIELDS: &[&str] = &[
	"id",
	"type",
	"year",
	"country",
	"host",
	"NOC",
	"start",
	"end",
	"duration",
	"disabilities_included",
	"countries",
	"events",
	"sports",
	"participants_m",
	"participants_f",
	"participants",
	"highlights",
];

/// Full load for the create path. `id` is auto-assigned by the store and
/// may not be supplied.
pub fn load(value: &Value) -> ClResult<CreateEventData> {
	let obj = as_object(value)?;
	let mut errs = ValidationErrors::new();

	check_unknown(obj, FIELDS, &mut errs);
	if obj.contains_key("id") {
		errs.add("id", IMMUTABLE);
	}

	let typ = require_str(obj, "type", &mut errs);
	let year = require_int(obj, "year", &mut errs);
	let country = require_str(obj, "country", &mut errs);
	let host = require_str(obj, "host", &mut errs);
	let noc = require_str(obj, "NOC", &mut errs);

	let start = opt_str(obj, "start", &mut errs);
	let end = opt_str(obj, "end", &mut errs);
	let duration = opt_int(obj, "duration", &mut errs);
	let disabilities_included = opt_str(obj, "disabilities_included", &mut errs);
	let countries = opt_int(obj, "countries", &mut errs);
	let events = opt_int(obj, "events", &mut errs);
	let sports = opt_int(obj, "sports", &mut errs);
	let participants_m = opt_int(obj, "participants_m", &mut errs);
	let participants_f = opt_int(obj, "participants_f", &mut errs);
	let participants = opt_int(obj, "participants", &mut errs);
	let highlights = opt_str(obj, "highlights", &mut errs);

	match (typ, year, country, host, noc) {
		(Some(typ), Some(year), Some(country), Some(host), Some(noc)) => {
			errs.into_result()?;
			Ok(CreateEventData {
				typ,
				year,
				country,
				host,
				noc,
				start,
				end,
				duration,
				disabilities_included,
				countries,
				events,
				sports,
				participants_m,
				participants_f,
				participants,
				highlights,
			})
		}
		_ => Err(Error::ValidationError(errs)),
	}
}

/// Partial load for PATCH. The id cannot be patched; the region reference
/// can, subject to the store's foreign key check.
pub fn load_partial(value: &Value) -> ClResult<UpdateEventData> {
	let obj = as_object(value)?;
	let mut errs = ValidationErrors::new();

	check_unknown(obj, FIELDS, &mut errs);
	if obj.contains_key("id") {
		errs.add("id", IMMUTABLE);
	}

	let typ = patch_str_required(obj, "type", &mut errs);
	let year = patch_int_required(obj, "year", &mut errs);
	let country = patch_str_required(obj, "country", &mut errs);
	let host = patch_str_required(obj, "host", &mut errs);
	let noc = patch_str_required(obj, "NOC", &mut errs);

	let start = patch_str(obj, "start", &mut errs);
	let end = patch_str(obj, "end", &mut errs);
	let duration = patch_int(obj, "duration", &mut errs);
	let disabilities_included = patch_str(obj, "disabilities_included", &mut errs);
	let countries = patch_int(obj, "countries", &mut errs);
	let events = patch_int(obj, "events", &mut errs);
	let sports = patch_int(obj, "sports", &mut errs);
	let participants_m = patch_int(obj, "participants_m", &mut errs);
	let participants_f = patch_int(obj, "participants_f", &mut errs);
	let participants = patch_int(obj, "participants", &mut errs);
	let highlights = patch_str(obj, "highlights", &mut errs);

	errs.into_result()?;
	Ok(UpdateEventData {
		typ,
		year,
		country,
		host,
		noc,
		start,
		end,
		duration,
		disabilities_included,
		countries,
		events,
		sports,
		participants_m,
		participants_f,
		participants,
		highlights,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn minimal() -> Value {
		json!({
			"type": "summer",
			"year": 2012,
			"country": "UK",
			"host": "London",
			"NOC": "GBR"
		})
	}

	#[test]
	fn load_accepts_minimal_event() {
		let event = load(&minimal()).unwrap();
		assert_eq!(event.typ.as_ref(), "summer");
		assert_eq!(event.year, 2012);
		assert_eq!(event.participants, None);
	}

	#[test]
	fn load_coerces_string_year() {
		let mut input = minimal();
		input["year"] = json!("1984");
		assert_eq!(load(&input).unwrap().year, 1984);
	}

	#[test]
	fn load_rejects_non_numeric_year() {
		let mut input = minimal();
		input["year"] = json!("next summer");
		let Err(Error::ValidationError(errs)) = load(&input) else {
			panic!("expected validation error");
		};
		assert!(errs.contains("year"));
	}

	#[test]
	fn load_rejects_supplied_id() {
		let mut input = minimal();
		input["id"] = json!(7);
		let Err(Error::ValidationError(errs)) = load(&input) else {
			panic!("expected validation error");
		};
		assert!(errs.contains("id"));
	}

	#[test]
	fn load_partial_allows_region_reference_change() {
		let update = load_partial(&json!({ "NOC": "FRA", "participants": null })).unwrap();
		assert_eq!(update.noc.value().map(AsRef::as_ref), Some("FRA"));
		assert!(update.participants.is_null());
		assert!(update.year.is_undefined());
	}

	#[test]
	fn load_partial_rejects_null_required_column() {
		let Err(Error::ValidationError(errs)) = load_partial(&json!({ "year": null })) else {
			panic!("expected validation error");
		};
		assert!(errs.contains("year"));
	}
}

// vim: ts=4
