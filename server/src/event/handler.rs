//! Event route handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use serde_json::{json, Value};

use crate::event::schema;
use crate::prelude::*;
use crate::route_auth::Auth;
use paragames_types::store_adapter::Event;

pub async fn list_events(State(app): State<App>) -> ClResult<(StatusCode, Json<Vec<Event>>)> {
	let events = app.store_adapter.list_events().await?;
	Ok((StatusCode::OK, Json(events)))
}

pub async fn get_event(
	State(app): State<App>,
	Path(event_id): Path<i64>,
) -> ClResult<(StatusCode, Json<Event>)> {
	let event = app.store_adapter.read_event(event_id).await?;
	Ok((StatusCode::OK, Json(event)))
}

pub async fn post_event(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	let event = schema::load(&body)?;
	let id = app.store_adapter.create_event(&event).await?;

	info!("Event {} added for region {}", id, event.noc);
	Ok((StatusCode::CREATED, Json(json!({ "message": format!("Event added with id= {}", id) }))))
}

pub async fn patch_event(
	State(app): State<App>,
	Path(event_id): Path<i64>,
	auth: Auth,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	// Absence must surface as 404 before any validation of the body
	app.store_adapter.read_event(event_id).await?;

	let update = schema::load_partial(&body)?;
	app.store_adapter.update_event(event_id, &update).await?;

	debug!("Event {} updated by user {}", event_id, auth.user_id);
	Ok((
		StatusCode::OK,
		Json(json!({ "message": format!("Event with id={} updated.", event_id) })),
	))
}

pub async fn delete_event(
	State(app): State<App>,
	Path(event_id): Path<i64>,
) -> ClResult<(StatusCode, Json<Value>)> {
	app.store_adapter.delete_event(event_id).await?;

	info!("Event {} deleted", event_id);
	Ok((StatusCode::OK, Json(json!({ "message": format!("Event {} deleted.", event_id) }))))
}

// vim: ts=4
