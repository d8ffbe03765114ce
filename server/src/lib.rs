//! Paragames is a small REST API over paralympic games data.
//!
//! # Features
//!
//! - Two related resources
//!		- regions, keyed by their 3-letter NOC code
//!		- events, keyed by an auto-assigned integer id, each referencing a region
//!	- Explicit per-entity JSON schemas
//!		- full load for create, partial load for PATCH
//!		- violations reported as a field -> messages mapping
//!	- Thin auth gate
//!		- register/login with bcrypt-hashed passwords
//!		- opaque session tokens guarding the PATCH routes
//!	- SQLite persistence behind a store adapter trait
//!		- bulk-seeded at startup from two CSV files

pub mod app;
pub mod auth;
pub mod bootstrap;
pub mod event;
pub mod prelude;
pub mod region;
pub mod route_auth;
pub mod routes;

pub use crate::app::{App, AppOpts, AppState};

// vim: ts=4
