//! # Router Assembly
//!
//! [`Router`] ties the pieces together: it compiles a configuration into a
//! [`RouteTable`], creates the [`NavigationDispatcher`] and registers one
//! handler per route with the host [`Navigator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use waypoint_std::{resolvers::ResolverRegistry, router::Router};
//!
//! let router = Router::builder(configs)
//!     .resolver(ResolverRegistry::builder().register("screens/home", home).build())
//!     .build()?;
//!
//! router.navigate("bundle/42").await?;
//! ```

use crate::{
    dispatch::NavigationDispatcher,
    history::HistoryRouter,
    resolvers::NoResolver,
    table::{Registration, RouteTable},
};
use std::sync::Arc;
use tracing::debug;
use waypoint_core::{
    ControllerInstance, ControllerResolver, DynControllerResolver, NavigationError, Navigator,
    RouteConfigGroup, WaypointError,
};

/// Construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    /// Reject configurations without a default route. Defaults to `true`.
    pub require_default: bool,
    /// Pattern of the catch-all registration.
    pub default_pattern: String,
    /// Name of the catch-all registration.
    pub default_name: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            require_default: true,
            default_pattern: "*anything".to_string(),
            default_name: "default".to_string(),
        }
    }
}

impl RouterOptions {
    /// Set whether a default route is required.
    pub fn require_default(mut self, require: bool) -> Self {
        self.require_default = require;
        self
    }

    /// Set the catch-all pattern.
    pub fn default_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.default_pattern = pattern.into();
        self
    }

    /// Set the catch-all name.
    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }
}

/// Builder for [`Router`].
pub struct RouterBuilder {
    configs: Vec<RouteConfigGroup>,
    options: RouterOptions,
    resolver: Arc<dyn DynControllerResolver>,
}

impl RouterBuilder {
    /// Start from a configuration.
    pub fn new(configs: Vec<RouteConfigGroup>) -> Self {
        Self {
            configs,
            options: RouterOptions::default(),
            resolver: Arc::new(NoResolver),
        }
    }

    /// Replace the options.
    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the resolver for controllers referenced by identifier.
    pub fn resolver<R: ControllerResolver>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Build on top of the bundled [`HistoryRouter`].
    pub fn build(self) -> Result<Router<HistoryRouter>, WaypointError> {
        self.build_with(HistoryRouter::new())
    }

    /// Build on top of a custom navigation engine.
    ///
    /// The whole configuration is validated before the engine sees any
    /// registration.
    pub fn build_with<N: Navigator>(self, mut navigator: N) -> Result<Router<N>, WaypointError> {
        let table = RouteTable::compile(self.configs, &self.options)?;
        let (groups, registrations) = table.into_parts();
        let dispatcher = Arc::new(NavigationDispatcher::new(groups, self.resolver));

        // The engine favours later registrations, so the lowest precedence goes first.
        for registration in registrations.iter().rev() {
            let handler = dispatcher.handler(registration.target.clone());
            navigator.route(&registration.pattern, &registration.name, handler)?;
            debug!(
                name = %registration.name,
                route = %registration.pattern,
                "route defined"
            );
        }
        debug!(routes = registrations.len(), "router initialized");

        Ok(Router {
            navigator,
            dispatcher,
            registrations,
        })
    }
}

/// A declarative router bound to a navigation engine.
pub struct Router<N = HistoryRouter> {
    navigator: N,
    dispatcher: Arc<NavigationDispatcher>,
    registrations: Vec<Registration>,
}

impl Router<HistoryRouter> {
    /// Start building a router.
    pub fn builder(configs: Vec<RouteConfigGroup>) -> RouterBuilder {
        RouterBuilder::new(configs)
    }

    /// Build a router with default options and no resolver.
    pub fn new(configs: Vec<RouteConfigGroup>) -> Result<Self, WaypointError> {
        RouterBuilder::new(configs).build()
    }

    /// Navigate to `fragment`.
    ///
    /// Returns `Ok(false)` when no route matched, which can only happen with
    /// a custom catch-all pattern.
    pub async fn navigate(&self, fragment: &str) -> Result<bool, NavigationError> {
        self.navigator.navigate(fragment).await
    }
}

impl<N> Router<N> {
    /// The navigation engine.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &Arc<NavigationDispatcher> {
        &self.dispatcher
    }

    /// Registrations, highest precedence first.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The currently active controller.
    pub async fn active_controller(&self) -> Option<ControllerInstance> {
        self.dispatcher.active_controller().await
    }
}
