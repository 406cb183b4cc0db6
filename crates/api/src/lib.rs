//! HTTP layer for Duo Grid

pub mod rest;

pub use rest::{create_router, create_router_with_state, ApiState};
