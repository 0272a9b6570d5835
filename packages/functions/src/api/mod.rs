//! HTTP API pipeline: router, manager, and the static route table.

pub mod manager;
pub mod router;
pub mod routes;

pub use router::{ApiRouter, RouteEntry};
