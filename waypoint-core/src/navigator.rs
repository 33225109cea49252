//! # Host Navigation Engine
//!
//! The router does not match locations itself. It hands `(pattern, name,
//! handler)` triples to a [`Navigator`], which matches the current location and
//! calls the handler with the captured parameters.
//!
//! # Pattern Syntax
//!
//! | Token          | Example      | Meaning                         |
//! |----------------|--------------|---------------------------------|
//! | optional group | `(/:id)`     | may be absent                   |
//! | named          | `:id`        | one segment                     |
//! | splat          | `*rest`      | any remaining path              |
//!
//! # Priority
//!
//! A navigator gives each registration priority over every registration made
//! before it. Callers that want a fallback register it first.

use crate::error::{NavigationError, RoutingError};
use futures::future::BoxFuture;
use std::sync::Arc;

/// Callback bound to a registered route.
///
/// Receives the captured parameters positionally, left to right. Engines may
/// append a trailing `None` sentinel.
pub type RouteHandler =
    Arc<dyn Fn(Vec<Option<String>>) -> BoxFuture<'static, Result<(), NavigationError>> + Send + Sync>;

/// A host navigation engine.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a navigation engine",
    label = "missing `Navigator` implementation",
    note = "Implement `route` to accept route registrations."
)]
pub trait Navigator: Send + Sync {
    /// Register a route. Later registrations take priority.
    fn route(
        &mut self,
        pattern: &str,
        name: &str,
        handler: RouteHandler,
    ) -> Result<(), RoutingError>;
}
