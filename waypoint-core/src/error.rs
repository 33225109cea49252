//! Error types for waypoint.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WaypointError`] - Top-level error type for all waypoint operations
//! - [`ConfigError`] - Fatal errors while building the route table
//! - [`NavigationError`] - Errors raised while handling a navigation
//! - [`RoutingError`] - Errors from the host navigation engine

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// The route configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A navigation could not be completed.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// The navigation engine refused a registration.
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors detected while compiling a route configuration.
///
/// All of these abort construction; no route is registered when one occurs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration contained no route groups.
    #[error("no config was defined; the router needs at least one route group")]
    Empty,

    /// A route group lacks a required field.
    #[error("no {field} was defined for routing config #{group}")]
    MissingField {
        /// Position of the offending group in the configuration.
        group: usize,
        /// Name of the missing field (`controller` or `routes`).
        field: &'static str,
    },

    /// More than one route was flagged as the default route.
    #[error(
        "duplicate default route: first was \"{first_name}\" (url://{first_route}), \
         second is \"{second_name}\" (url://{second_route})"
    )]
    DuplicateDefault {
        /// Name of the first default route.
        first_name: String,
        /// Pattern of the first default route.
        first_route: String,
        /// Name of the second default route.
        second_name: String,
        /// Pattern of the second default route.
        second_route: String,
    },

    /// No route was flagged as the default route.
    #[error("no route was flagged as the default route")]
    MissingDefault,

    /// A configuration document could not be parsed.
    #[error("failed to parse {format} route config: {message}")]
    Parse {
        /// Document format (`json`, `toml`).
        format: &'static str,
        /// Parser diagnostic.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read route config {path}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while a navigation is being handled.
///
/// Nothing is rolled back when one of these occurs: a controller that was
/// already torn down stays torn down.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// The controller resolver failed to load a controller.
    #[error("failed to resolve controller \"{controller}\"")]
    Resolution {
        /// Identifier handed to the resolver.
        controller: String,
        /// Resolver error.
        #[source]
        source: BoxError,
    },

    /// The superseded controller failed to remove its view.
    #[error("controller \"{controller}\" failed to remove its view")]
    Teardown {
        /// Label of the superseded controller.
        controller: String,
        /// Controller error.
        #[source]
        source: BoxError,
    },

    /// The target controller failed to dispatch the route.
    #[error("controller failed to dispatch route \"{route}\"")]
    Dispatch {
        /// Name of the route being dispatched.
        route: String,
        /// Controller error.
        #[source]
        source: BoxError,
    },

    /// Navigation fell through to the catch-all but no default route exists.
    #[error("navigation fell through to the catch-all route, but no default route is configured")]
    NoDefaultRoute,
}

/// Errors that can occur in the host navigation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A route pattern could not be compiled into a matcher.
    #[error("invalid route pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
}

// Convenience conversions
impl From<BoxError> for WaypointError {
    fn from(err: BoxError) -> Self {
        WaypointError::Custom(err)
    }
}
