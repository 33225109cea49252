//! # waypoint-core
//!
//! Core types and traits for the waypoint declarative client-side router.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! controllers and navigation engines that don't need the full `waypoint-std`
//! implementation.
//!
//! # Building Blocks
//!
//! - **Configuration** ([`RouteConfigGroup`], [`RouteEntry`]): one group per
//!   screen controller, listing the routes it owns.
//! - **Canonical routes** ([`RouteDefinition`]): what the route compiler
//!   produces from every entry.
//! - **Controllers** ([`Controller`], [`ControllerRef`]): the screens being
//!   navigated between, referenced by identifier, type or instance.
//! - **Resolution** ([`ControllerResolver`]): the injected loader for
//!   controllers referenced by identifier.
//! - **Host engine** ([`Navigator`]): matches locations and calls back into
//!   the router.
//!
//! # Error Types
//!
//! - [`WaypointError`] - Top-level error type
//! - [`ConfigError`] - Construction-time configuration errors
//! - [`NavigationError`] - Navigation-time errors
//! - [`RoutingError`] - Navigation engine errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod controller;
mod error;
mod navigator;
mod resolver;
mod route;

// Re-exports
pub use controller::{
    Argument, Controller, ControllerInstance, ControllerRef, ControllerStage, ControllerType,
    Dispatch, NextRoute,
};
pub use error::{BoxError, ConfigError, NavigationError, RoutingError, WaypointError};
pub use navigator::{Navigator, RouteHandler};
pub use resolver::{ControllerResolver, DynControllerResolver};
pub use route::{Parts, RouteConfigGroup, RouteDefinition, RouteEntry, RouteSpec};
