//! Registered operations.
//!
//! Each operation is a zero-argument async function (everything it needs
//! is captured at registration) returning a JSON-serializable value.

pub mod data_sync;
pub mod health;
