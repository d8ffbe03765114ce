//! Shared fixtures for the route level tests
#![allow(dead_code, clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use axum::{
	body::Body,
	http::{header, Method, Request, StatusCode},
	Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use paragames::{bootstrap, routes, App, AppOpts};

/// Server wired to a fresh SQLite database in a temp directory.
///
/// The `TempDir` must stay alive for the duration of the test.
pub async fn test_app() -> (Router, App, TempDir) {
	let dir = TempDir::new().unwrap();
	let opts = AppOpts { listen: "127.0.0.1:0".into(), data_dir: dir.path().to_path_buf() };
	let app = bootstrap::init(opts).await.unwrap();
	let router = routes::init(app.clone());
	(router, app, dir)
}

/// Send one request and decode the JSON response
pub async fn request(
	router: &Router,
	method: Method,
	uri: &str,
	token: Option<&str>,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, token);
	}
	let req = match body {
		Some(body) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(serde_json::to_vec(&body).unwrap()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	};

	let res = router.clone().oneshot(req).await.unwrap();
	let status = res.status();
	let bytes = res.into_body().collect().await.unwrap().to_bytes();
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap_or(Value::Null)
	};
	(status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
	request(router, Method::GET, uri, None, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
	request(router, Method::POST, uri, None, Some(body)).await
}

pub async fn patch(
	router: &Router,
	uri: &str,
	token: Option<&str>,
	body: Value,
) -> (StatusCode, Value) {
	request(router, Method::PATCH, uri, token, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
	request(router, Method::DELETE, uri, None, None).await
}

/// Register a user and log in, returning a usable session token
pub async fn login(router: &Router) -> String {
	let creds = serde_json::json!({ "email": "tester@example.com", "password": "secret" });
	let (status, _) = post(router, "/register", creds.clone()).await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, body) = post(router, "/login", creds).await;
	assert_eq!(status, StatusCode::OK);
	body["token"].as_str().unwrap().to_string()
}

// vim: ts=4
