//! Shared types and adapter traits for the Paragames platform.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and the store adapter implementations: the error type with
//! its HTTP mapping, the `Patch` type used for partial updates, the entity
//! structs, and the `StoreAdapter` trait.

pub mod error;
pub mod prelude;
pub mod schema;
pub mod store_adapter;
pub mod types;

// vim: ts=4
