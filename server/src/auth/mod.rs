//! Auth gate: registration, login, and session token issuance

pub mod handler;

// vim: ts=4
