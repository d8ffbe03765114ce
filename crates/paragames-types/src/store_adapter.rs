//! Entity structs and the store adapter trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

// Region //
//********//
/// A National Olympic Committee region. `NOC` is the natural key and is
/// immutable once created.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Region {
	#[serde(rename = "NOC")]
	pub noc: Box<str>,
	pub region: Box<str>,
	pub notes: Option<Box<str>>,
}

#[derive(Debug, Default)]
pub struct UpdateRegionData {
	pub region: Patch<Box<str>>,
	pub notes: Patch<Box<str>>,
}

// Event //
//*******//
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Event {
	pub id: i64,
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub year: i64,
	pub country: Box<str>,
	pub host: Box<str>,
	#[serde(rename = "NOC")]
	pub noc: Box<str>,
	pub start: Option<Box<str>>,
	pub end: Option<Box<str>>,
	pub duration: Option<i64>,
	pub disabilities_included: Option<Box<str>>,
	pub countries: Option<i64>,
	pub events: Option<i64>,
	pub sports: Option<i64>,
	pub participants_m: Option<i64>,
	pub participants_f: Option<i64>,
	pub participants: Option<i64>,
	pub highlights: Option<Box<str>>,
}

/// A fully validated event without its auto-assigned id
#[derive(Clone, Debug)]
pub struct CreateEventData {
	pub typ: Box<str>,
	pub year: i64,
	pub country: Box<str>,
	pub host: Box<str>,
	pub noc: Box<str>,
	pub start: Option<Box<str>>,
	pub end: Option<Box<str>>,
	pub duration: Option<i64>,
	pub disabilities_included: Option<Box<str>>,
	pub countries: Option<i64>,
	pub events: Option<i64>,
	pub sports: Option<i64>,
	pub participants_m: Option<i64>,
	pub participants_f: Option<i64>,
	pub participants: Option<i64>,
	pub highlights: Option<Box<str>>,
}

#[derive(Debug, Default)]
pub struct UpdateEventData {
	pub typ: Patch<Box<str>>,
	pub year: Patch<i64>,
	pub country: Patch<Box<str>>,
	pub host: Patch<Box<str>>,
	pub noc: Patch<Box<str>>,
	pub start: Patch<Box<str>>,
	pub end: Patch<Box<str>>,
	pub duration: Patch<i64>,
	pub disabilities_included: Patch<Box<str>>,
	pub countries: Patch<i64>,
	pub events: Patch<i64>,
	pub sports: Patch<i64>,
	pub participants_m: Patch<i64>,
	pub participants_f: Patch<i64>,
	pub participants: Patch<i64>,
	pub highlights: Patch<Box<str>>,
}

// User //
//******//
/// Registered API user. The password field always holds a bcrypt hash and
/// the struct is deliberately not serializable.
#[derive(Clone, Debug)]
pub struct User {
	pub id: i64,
	pub email: Box<str>,
	pub password: Box<str>,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Regions
	async fn list_regions(&self) -> ClResult<Vec<Region>>;
	async fn read_region(&self, noc: &str) -> ClResult<Region>;
	async fn create_region(&self, region: &Region) -> ClResult<()>;
	/// Applies the present fields only, `rows_affected == 0` is NotFound
	async fn update_region(&self, noc: &str, data: &UpdateRegionData) -> ClResult<()>;
	/// Restricted: fails with Conflict while dependent events exist
	async fn delete_region(&self, noc: &str) -> ClResult<()>;

	/// # Events
	async fn list_events(&self) -> ClResult<Vec<Event>>;
	async fn read_event(&self, id: i64) -> ClResult<Event>;
	/// Returns the auto-assigned event id
	async fn create_event(&self, event: &CreateEventData) -> ClResult<i64>;
	async fn update_event(&self, id: i64, data: &UpdateEventData) -> ClResult<()>;
	async fn delete_event(&self, id: i64) -> ClResult<()>;

	/// # Users
	async fn create_user(&self, email: &str, password_hash: &str) -> ClResult<i64>;
	async fn read_user_by_email(&self, email: &str) -> ClResult<User>;
}

// vim: ts=4
