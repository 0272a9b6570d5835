//! Scheduled/event pipeline: router, manager, and the static event table.

pub mod manager;
pub mod router;
pub mod routes;

pub use router::EventRouter;
