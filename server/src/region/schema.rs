//! Explicit JSON mapping for the region entity
//!
//! One function per direction, generated once at compile time rather than
//! driven by reflection: `load` for the create path, `load_partial` for
//! PATCH. Serialization goes through the `Serialize` derive on `Region`,
//! whose field order matches the declared schema order.

use serde_json::Value;

use crate::prelude::*;
use paragames_types::schema::*;
use paragames_types::store_adapter::{Region, UpdateRegionData};

const FIELDS: &[&str] = &["NOC", "region", "notes"];

/// Full load: every required field must be present and well-typed.
/// Violations are collected per field and returned as one ValidationError.
pub fn load(value: &Value) -> ClResult<Region> {
	let obj = as_object(value)?;
	let mut errs = ValidationErrors::new();

	check_unknown(obj, FIELDS, &mut errs);
	let noc = require_str(obj, "NOC", &mut errs);
	let region = require_str(obj, "region", &mut errs);
	let notes = opt_str(obj, "notes", &mut errs);

	if let Some(noc) = &noc {
		if noc.chars().count() != 3 {
			errs.add("NOC", "Length must be 3.");
		}
	}

	match (noc, region) {
		(Some(noc), Some(region)) => {
			errs.into_result()?;
			Ok(Region { noc, region, notes })
		}
		_ => Err(Error::ValidationError(errs)),
	}
}

/// Partial load: only keys present in the input are validated and applied.
/// The natural key cannot be patched.
pub fn load_partial(value: &Value) -> ClResult<UpdateRegionData> {
	let obj = as_object(value)?;
	let mut errs = ValidationErrors::new();

	check_unknown(obj, FIELDS, &mut errs);
	if obj.contains_key("NOC") {
		errs.add("NOC", IMMUTABLE);
	}
	let region = patch_str_required(obj, "region", &mut errs);
	let notes = patch_str(obj, "notes", &mut errs);

	errs.into_result()?;
	Ok(UpdateRegionData { region, notes })
}


// vim: ts=4
