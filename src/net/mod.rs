//! REST API layer: error taxonomy, wire types, and the authenticated
//! request client with transparent token refresh.

pub mod api;
pub mod client;
pub mod error;
pub mod flight;
pub mod types;
