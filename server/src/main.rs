use std::{env, path::PathBuf};

use paragames::app::VERSION;
use paragames::prelude::*;
use paragames::AppOpts;

#[tokio::main]
async fn main() -> ClResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let opts = AppOpts {
		listen: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string()).into(),
		data_dir: PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string())),
	};

	info!("Paragames V{}", VERSION);

	let app = paragames::bootstrap::init(opts).await?;
	let router = paragames::routes::init(app.clone());

	let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
	info!("Listening on {}", app.opts.listen);
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
