//! # waypoint-std
//!
//! Standard implementations for the waypoint declarative router.
//!
//! This crate provides:
//! - **Route compilation**: [`compiler`], [`table::RouteTable`]
//! - **Navigation dispatch**: [`dispatch::NavigationDispatcher`]
//! - **Assembly**: [`router::Router`], [`router::RouterBuilder`]
//! - **Navigation engine**: [`history::HistoryRouter`]
//! - **Controller resolvers**: [`resolvers::ResolverRegistry`], [`resolvers::FnResolver`]
//! - **Configuration documents**: [`config`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use waypoint_core;

// Modules
pub mod compiler;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod resolvers;
pub mod router;
pub mod table;
pub mod testing;
