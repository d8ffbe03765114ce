use axum::{middleware, routing::{delete, get, patch, post}, Router};

use crate::auth;
use crate::event;
use crate::region;
use crate::route_auth::require_auth;
use crate::App;

pub fn init(state: App) -> Router {
	let protected_router = Router::new()
		.route("/regions/{code}", patch(region::handler::patch_region))
		.route("/events/{id}", patch(event::handler::patch_event))
		.layer(middleware::from_fn_with_state(state.clone(), require_auth));

	let public_router = Router::new()
		.route("/regions", get(region::handler::list_regions))
		.route("/regions", post(region::handler::post_region))
		.route("/regions/{code}", get(region::handler::get_region))
		.route("/regions/{code}", delete(region::handler::delete_region))
		.route("/events", get(event::handler::list_events))
		.route("/events", post(event::handler::post_event))
		.route("/events/{id}", get(event::handler::get_event))
		.route("/events/{id}", delete(event::handler::delete_event))
		.route("/register", post(auth::handler::post_register))
		.route("/login", post(auth::handler::post_login));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.with_state(state)
}

// vim: ts=4
