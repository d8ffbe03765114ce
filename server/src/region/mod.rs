//! Region resource: schema and route handlers

pub mod handler;
pub mod schema;

// vim: ts=4
