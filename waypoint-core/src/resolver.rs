//! Controller resolution.
//!
//! A route group may name its controller by identifier instead of providing it
//! directly. The dispatcher hands such identifiers to a [`ControllerResolver`]
//! the first time one of the group's routes is visited.

use crate::{controller::ControllerType, error::BoxError};
use std::{future::Future, pin::Pin};

/// Loads controller types by identifier.
///
/// Resolution is single-shot per route group: once a group's identifier has
/// been resolved the dispatcher never asks again.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve controllers",
    label = "missing `ControllerResolver` implementation",
    note = "Implement `resolve` to turn controller identifiers into `ControllerType`s."
)]
pub trait ControllerResolver: Send + Sync + 'static {
    /// Resolve `identifier` into a controller type.
    fn resolve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<ControllerType, BoxError>> + Send;
}

/// Object-safe version of [`ControllerResolver`].
pub trait DynControllerResolver: Send + Sync + 'static {
    /// Resolve `identifier` (dynamic dispatch version).
    fn resolve_dyn<'a>(
        &'a self,
        identifier: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ControllerType, BoxError>> + Send + 'a>>;
}

impl<T: ControllerResolver> DynControllerResolver for T {
    fn resolve_dyn<'a>(
        &'a self,
        identifier: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ControllerType, BoxError>> + Send + 'a>> {
        Box::pin(self.resolve(identifier))
    }
}
