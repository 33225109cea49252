//! Controller resolver implementations.
//!
//! - [`ResolverRegistry`]: identifiers mapped to controller types up front
//! - [`FnResolver`]: an async closure, for loaders that do real work
//! - [`NoResolver`]: rejects every identifier; the default when none is configured

use std::{collections::HashMap, future::Future};
use thiserror::Error;
use waypoint_core::{BoxError, ControllerResolver, ControllerType};

/// Errors produced by the bundled resolvers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The identifier is not registered.
    #[error("no controller is registered as \"{0}\"")]
    Unknown(String),

    /// No resolver was configured but an identifier needs resolving.
    #[error("controller \"{0}\" is referenced by identifier but no resolver is configured")]
    Unconfigured(String),
}

/// A fixed map from identifiers to controller types.
pub struct ResolverRegistry {
    types: HashMap<String, ControllerType>,
}

impl ResolverRegistry {
    /// Start building a registry.
    pub fn builder() -> ResolverRegistryBuilder {
        ResolverRegistryBuilder::new()
    }

    /// Look up a type without going through the async interface.
    pub fn get(&self, identifier: &str) -> Option<&ControllerType> {
        self.types.get(identifier)
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ControllerResolver for ResolverRegistry {
    async fn resolve(&self, identifier: &str) -> Result<ControllerType, BoxError> {
        self.types
            .get(identifier)
            .cloned()
            .ok_or_else(|| ResolveError::Unknown(identifier.to_string()).into())
    }
}

/// Builder for [`ResolverRegistry`].
#[derive(Default)]
pub struct ResolverRegistryBuilder {
    types: HashMap<String, ControllerType>,
}

impl ResolverRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. A later registration for the same identifier replaces the earlier one.
    pub fn register(mut self, identifier: impl Into<String>, ty: ControllerType) -> Self {
        self.types.insert(identifier.into(), ty);
        self
    }

    /// Build the registry.
    pub fn build(self) -> ResolverRegistry {
        ResolverRegistry { types: self.types }
    }
}

/// A resolver backed by an async closure.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = FnResolver::new(|identifier: String| async move {
///     let module = loader.load(&identifier).await?;
///     Ok(module.controller_type())
/// });
/// ```
pub struct FnResolver<F> {
    resolve: F,
}

impl<F> FnResolver<F> {
    /// Wrap a closure.
    pub fn new(resolve: F) -> Self {
        Self { resolve }
    }
}

impl<F, Fut> ControllerResolver for FnResolver<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ControllerType, BoxError>> + Send,
{
    fn resolve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<ControllerType, BoxError>> + Send {
        (self.resolve)(identifier.to_string())
    }
}

/// A resolver that rejects every identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl ControllerResolver for NoResolver {
    async fn resolve(&self, identifier: &str) -> Result<ControllerType, BoxError> {
        Err(ResolveError::Unconfigured(identifier.to_string()).into())
    }
}
