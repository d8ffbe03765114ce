//! Region route handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use serde_json::{json, Value};

use crate::prelude::*;
use crate::region::schema;
use crate::route_auth::Auth;
use paragames_types::store_adapter::Region;

pub async fn list_regions(State(app): State<App>) -> ClResult<(StatusCode, Json<Vec<Region>>)> {
	let regions = app.store_adapter.list_regions().await?;
	Ok((StatusCode::OK, Json(regions)))
}

pub async fn get_region(
	State(app): State<App>,
	Path(code): Path<String>,
) -> ClResult<(StatusCode, Json<Region>)> {
	let region = app.store_adapter.read_region(&code).await?;
	Ok((StatusCode::OK, Json(region)))
}

pub async fn post_region(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	let region = schema::load(&body)?;
	app.store_adapter.create_region(&region).await?;

	info!("Region {} added", region.noc);
	Ok((
		StatusCode::CREATED,
		Json(json!({ "message": format!("Region added with NOC= {}", region.noc) })),
	))
}

pub async fn patch_region(
	State(app): State<App>,
	Path(code): Path<String>,
	auth: Auth,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	// Absence must surface as 404 before any validation of the body
	app.store_adapter.read_region(&code).await?;

	let update = schema::load_partial(&body)?;
	app.store_adapter.update_region(&code, &update).await?;

	debug!("Region {} updated by user {}", code, auth.user_id);
	Ok((StatusCode::OK, Json(json!({ "message": format!("Region {} updated.", code) }))))
}

pub async fn delete_region(
	State(app): State<App>,
	Path(code): Path<String>,
) -> ClResult<(StatusCode, Json<Value>)> {
	app.store_adapter.delete_region(&code).await?;

	info!("Region {} deleted", code);
	Ok((StatusCode::OK, Json(json!({ "message": format!("Region {} deleted.", code) }))))
}

// vim: ts=4
