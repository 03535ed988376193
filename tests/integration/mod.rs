//! Integration tests for orgdir
//!
//! These tests drive the store, the slot backends and the terminal front-end
//! together through the public crate API.

#[path = "../common/mod.rs"]
pub mod common;

pub mod app_flow;
pub mod cli;
pub mod persistence;
pub mod query_properties;
pub mod store_flow;
