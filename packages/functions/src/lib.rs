//! Waypost runtime — dispatch-and-envelope plumbing for both trigger types.
//!
//! Two parallel pipelines, each in three layers:
//! 1. Entry adapter (the `api-handler`/`event-handler` binaries) — receives
//!    the raw invocation payload and constructs an [`waypost_core::InvocationContext`].
//! 2. Manager ([`api::manager`], [`event::manager`]) — extracts the routing
//!    key, resolves and invokes the operation, and builds the response
//!    envelope; all failures are converted to an error envelope.
//! 3. Router ([`api::ApiRouter`], [`event::EventRouter`]) — static tables
//!    from routing key to a zero-argument operation plus per-route metadata.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod event;
pub mod observability;
pub mod operation;
pub mod ops;
pub mod secrets;

pub use bootstrap::Bootstrap;
pub use config::SecretsConfig;
pub use operation::{DispatchError, Operation, OperationError, RouteError};
pub use secrets::{SecretError, SecretStore, Secrets};
