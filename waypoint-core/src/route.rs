//! # Route Configuration Model
//!
//! The input side of the router is a list of [`RouteConfigGroup`]s, one per
//! screen controller. Each group lists its routes as [`RouteEntry`] values,
//! which are either a bare pattern string or a detailed [`RouteSpec`].
//!
//! The route compiler turns every entry into a canonical [`RouteDefinition`];
//! the entry union never travels past that point.
//!
//! # Document Form
//!
//! Groups deserialize from the same shape the configuration files use:
//!
//! ```json
//! [
//!     {
//!         "controller": "screens/home",
//!         "routes": [
//!             { "isDefault": true, "route": "home", "name": "homeRoute" },
//!             "bundles",
//!             "bundle/:id",
//!             { "route": "bundle/edit/:id", "parts": "bundle/edit" }
//!         ]
//!     }
//! ]
//! ```

use crate::controller::ControllerRef;
use serde::Deserialize;

/// Caller-declared path segments of a route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Parts {
    /// Segments given as a list, used as is.
    List(Vec<String>),
    /// Segments given as a path, split on `/` verbatim.
    Path(String),
}

impl From<&str> for Parts {
    fn from(path: &str) -> Self {
        Parts::Path(path.to_string())
    }
}

impl From<String> for Parts {
    fn from(path: String) -> Self {
        Parts::Path(path)
    }
}

impl From<Vec<String>> for Parts {
    fn from(parts: Vec<String>) -> Self {
        Parts::List(parts)
    }
}

impl<const N: usize> From<[&str; N]> for Parts {
    fn from(parts: [&str; N]) -> Self {
        Parts::List(parts.iter().map(|part| part.to_string()).collect())
    }
}

/// The detailed form of a route entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    /// Marks the route as the catch-all default. At most one per configuration.
    #[serde(default)]
    pub is_default: bool,
    /// The route pattern.
    pub route: String,
    /// Route name; falls back to the pattern.
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit path segments; derived from the pattern when absent.
    #[serde(default)]
    pub parts: Option<Parts>,
}

impl RouteSpec {
    /// Create a spec for the given pattern with every optional field unset.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            ..Self::default()
        }
    }

    /// Set the route name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Flag this route as the default route.
    pub fn default_route(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Declare the path segments explicitly.
    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }
}

/// A raw route entry as written in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RouteEntry {
    /// Shorthand: only the pattern.
    Pattern(String),
    /// Full form with optional name, parts and default flag.
    Detailed(RouteSpec),
}

impl From<&str> for RouteEntry {
    fn from(route: &str) -> Self {
        RouteEntry::Pattern(route.to_string())
    }
}

impl From<String> for RouteEntry {
    fn from(route: String) -> Self {
        RouteEntry::Pattern(route)
    }
}

impl From<RouteSpec> for RouteEntry {
    fn from(spec: RouteSpec) -> Self {
        RouteEntry::Detailed(spec)
    }
}

/// The canonical, compiled form of a route entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    /// The route pattern handed to the navigation engine.
    pub route: String,
    /// The route name.
    pub name: String,
    /// Static path segments, passed to the controller on dispatch.
    pub parts: Vec<String>,
    /// Whether this is the catch-all default route.
    pub is_default: bool,
}

/// One screen controller and the routes it owns.
///
/// Both fields are optional so that configurations read from documents can
/// omit them; the route table rejects a group missing either one.
#[derive(Debug, Default, Deserialize)]
pub struct RouteConfigGroup {
    /// The controller that handles every route of this group.
    #[serde(default)]
    pub controller: Option<ControllerRef>,
    /// Routes owned by the controller.
    #[serde(default)]
    pub routes: Option<Vec<RouteEntry>>,
}

impl RouteConfigGroup {
    /// Create a complete group.
    pub fn new<C, I>(controller: C, routes: I) -> Self
    where
        C: Into<ControllerRef>,
        I: IntoIterator,
        I::Item: Into<RouteEntry>,
    {
        Self {
            controller: Some(controller.into()),
            routes: Some(routes.into_iter().map(Into::into).collect()),
        }
    }
}
