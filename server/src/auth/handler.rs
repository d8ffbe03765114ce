//! Register and login handlers

use axum::{extract::State, http::StatusCode, Json};
use base64::Engine;
use rand::Rng;
use serde_json::{json, Value};

use crate::prelude::*;
use paragames_types::schema::{as_object, check_unknown, require_str};

const BCRYPT_COST: u32 = 10;

/// Validate a `{email, password}` body with the same field -> messages
/// mechanism as the entity schemas.
fn load_credentials(value: &Value) -> ClResult<(Box<str>, Box<str>)> {
	let obj = as_object(value)?;
	let mut errs = ValidationErrors::new();

	check_unknown(obj, &["email", "password"], &mut errs);
	let email = require_str(obj, "email", &mut errs);
	let password = require_str(obj, "password", &mut errs);

	if let Some(email) = &email {
		if !email.contains('@') {
			errs.add("email", "Not a valid email address.");
		}
	}
	if let Some(password) = &password {
		if password.is_empty() {
			errs.add("password", "Shorter than minimum length 1.");
		}
	}

	match (email, password) {
		(Some(email), Some(password)) => {
			errs.into_result()?;
			Ok((email, password))
		}
		_ => Err(Error::ValidationError(errs)),
	}
}

/// bcrypt is CPU-bound, keep it off the async runtime
async fn generate_password_hash(password: Box<str>) -> ClResult<Box<str>> {
	tokio::task::spawn_blocking(move || {
		bcrypt::hash(password.as_ref(), BCRYPT_COST)
			.map(Box::from)
			.map_err(|_| Error::Internal("password hashing failed".into()))
	})
	.await
	.map_err(|_| Error::Internal("password hash task failed".into()))?
}

async fn check_password(password: Box<str>, password_hash: Box<str>) -> ClResult<()> {
	tokio::task::spawn_blocking(move || {
		match bcrypt::verify(password.as_ref(), &password_hash) {
			Ok(true) => Ok(()),
			_ => Err(Error::PermissionDenied),
		}
	})
	.await
	.map_err(|_| Error::Internal("password check task failed".into()))?
}

/// Opaque session token: 32 random bytes, base64 url-safe
fn generate_token() -> Box<str> {
	let mut token_bytes = [0u8; 32];
	rand::rng().fill_bytes(&mut token_bytes);
	base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(token_bytes).into()
}

/// # POST /register
pub async fn post_register(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	let (email, password) = load_credentials(&body)?;

	let password_hash = generate_password_hash(password).await?;
	let user_id = app.store_adapter.create_user(&email, &password_hash).await?;

	info!("User {} registered", user_id);
	Ok((StatusCode::CREATED, Json(json!({ "message": "User registered." }))))
}

/// # POST /login
pub async fn post_login(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	let (email, password) = load_credentials(&body)?;

	// An unknown email reads the same as a bad password from outside
	let user = match app.store_adapter.read_user_by_email(&email).await {
		Ok(user) => user,
		Err(Error::NotFound(_)) => return Err(Error::PermissionDenied),
		Err(err) => return Err(err),
	};

	check_password(password, user.password.clone()).await?;

	let token = generate_token();
	app.register_session(&token, user.id)?;

	info!("User {} logged in", user.id);
	Ok((StatusCode::OK, Json(json!({ "token": token }))))
}


// vim: ts=4
