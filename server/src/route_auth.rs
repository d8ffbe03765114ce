//! Authentication middleware for the protected routes

use axum::{
	body::Body,
	extract::{FromRequestParts, State},
	http::{request::Parts, Request},
	middleware::Next,
	response::Response,
};

use crate::prelude::*;

/// Authenticated caller, inserted as a request extension by [`require_auth`]
#[derive(Clone, Copy, Debug)]
pub struct Auth {
	pub user_id: i64,
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ClResult<Response> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::Unauthorized)?;

	// Tokens are opaque; a Bearer prefix is tolerated but not required
	let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

	let user_id = app.session_user(token)?.ok_or(Error::Unauthorized)?;
	req.extensions_mut().insert(Auth { user_id });

	Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<Auth>().copied().ok_or(Error::Unauthorized)
	}
}

// vim: ts=4
