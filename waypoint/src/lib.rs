//! # waypoint - Declarative Client-Side Router
//!
//! `waypoint` maps location fragments to screen controllers. A configuration
//! lists route groups, each owning one controller and the routes it handles.
//! The router compiles every route, registers it with a navigation engine and,
//! on every navigation, makes sure exactly one controller is active.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypoint::{prelude::*, routes};
//!
//! let configs = routes![
//!     "screens/home" => [RouteSpec::new("home").default_route()],
//!     "screens/items" => ["items", "items/:id"],
//! ];
//!
//! let router = Router::builder(configs)
//!     .resolver(ResolverRegistry::builder()
//!         .register("screens/home", ControllerType::of::<Home>())
//!         .register("screens/items", ControllerType::of::<Items>())
//!         .build())
//!     .build()?;
//!
//! router.navigate("#items/42").await?;
//! ```
//!
//! ## Controller lifecycle
//!
//! A controller referenced by identifier is resolved on first navigation,
//! instantiated once and reused afterwards. When a navigation targets a
//! different controller, the active one is asked to remove its view first.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Configuration
pub use waypoint_core::{Parts, RouteConfigGroup, RouteDefinition, RouteEntry, RouteSpec};

// Controllers
pub use waypoint_core::{
    Argument, Controller, ControllerInstance, ControllerRef, ControllerStage, ControllerType,
    Dispatch, NextRoute,
};

// Resolution
pub use waypoint_core::{ControllerResolver, DynControllerResolver};

// Navigation engine
pub use waypoint_core::{Navigator, RouteHandler};

// Error types
pub use waypoint_core::{BoxError, ConfigError, NavigationError, RoutingError, WaypointError};

// Assembly
pub use waypoint_std::router::{Router, RouterBuilder, RouterOptions};

// Compilation and dispatch
pub use waypoint_std::{
    compiler::compile,
    dispatch::NavigationDispatcher,
    history::{HistoryRouter, RouteMatch},
    table::{Registration, RouteBinding, RouteTable},
};

/// Controller resolvers.
pub mod resolvers {
    pub use waypoint_std::resolvers::{
        FnResolver, NoResolver, ResolveError, ResolverRegistry, ResolverRegistryBuilder,
    };
}

/// Configuration documents.
pub mod config {
    pub use waypoint_std::config::{from_json, from_toml, load};
}

/// Testing utilities.
pub mod testing {
    pub use waypoint_std::testing::{
        CountingResolver, FailingController, Journal, JournalEntry, RecordingController,
    };
}

/// Prelude module - common imports for waypoint.
///
/// # Usage
///
/// ```rust,ignore
/// use waypoint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Controller, ControllerRef, ControllerResolver, ControllerType, Dispatch,
        NavigationError, NextRoute, RouteConfigGroup, RouteSpec, Router, RouterOptions,
        WaypointError, resolvers::ResolverRegistry,
    };
}

/// Build a route configuration.
///
/// Each arm pairs a controller (anything convertible into a
/// [`ControllerRef`]) with the routes it owns (anything convertible into a
/// [`RouteEntry`]).
///
/// ```rust,ignore
/// let configs = routes![
///     "screens/home" => [RouteSpec::new("home").default_route()],
///     ControllerType::of::<Items>() => ["items", "items/:id"],
/// ];
/// ```
#[macro_export]
macro_rules! routes {
    ($($controller:expr => [$($entry:expr),* $(,)?]),* $(,)?) => {
        ::std::vec![$(
            $crate::RouteConfigGroup::new(
                $crate::ControllerRef::from($controller),
                <::std::vec::Vec<$crate::RouteEntry>>::from([$($crate::RouteEntry::from($entry)),*]),
            )
        ),*]
    };
}
