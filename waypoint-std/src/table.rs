//! Route table construction.
//!
//! Validates a configuration, compiles every entry and fixes the evaluation
//! order of the resulting registrations. Nothing is registered anywhere until
//! the whole configuration has been accepted.
//!
//! # Precedence
//!
//! [`RouteTable::registrations`] lists routes highest precedence first:
//!
//! 1. explicit routes, later-declared before earlier-declared;
//! 2. the catch-all default route, always last.

use crate::{compiler::compile, router::RouterOptions};
use futures::lock::Mutex;
use std::sync::Arc;
use tracing::debug;
use waypoint_core::{ConfigError, ControllerRef, RouteConfigGroup, RouteDefinition};

/// A compiled route bound to the group that owns it.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    /// Position of the owning group in the configuration.
    pub group: usize,
    /// The compiled route.
    pub route: Arc<RouteDefinition>,
}

/// A route ready to be handed to the navigation engine.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Pattern matched by the engine.
    pub pattern: String,
    /// Route name.
    pub name: String,
    /// Route the handler dispatches to; `None` for a catch-all without a default route.
    pub target: Option<RouteBinding>,
}

/// A route group's controller cell.
pub struct RouteGroup {
    label: String,
    controller: Mutex<ControllerRef>,
}

impl RouteGroup {
    fn new(controller: ControllerRef) -> Self {
        Self {
            label: controller.label().to_string(),
            controller: Mutex::new(controller),
        }
    }

    /// The controller label as configured.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn controller(&self) -> &Mutex<ControllerRef> {
        &self.controller
    }
}

/// A validated and compiled configuration.
pub struct RouteTable {
    groups: Vec<RouteGroup>,
    registrations: Vec<Registration>,
}

impl RouteTable {
    /// Validate and compile `configs`.
    pub fn compile(
        configs: Vec<RouteConfigGroup>,
        options: &RouterOptions,
    ) -> Result<Self, ConfigError> {
        if configs.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut groups = Vec::with_capacity(configs.len());
        let mut registrations = Vec::new();
        let mut default_route: Option<RouteBinding> = None;

        for (index, config) in configs.into_iter().enumerate() {
            let controller = config.controller.ok_or(ConfigError::MissingField {
                group: index,
                field: "controller",
            })?;
            let routes = config.routes.ok_or(ConfigError::MissingField {
                group: index,
                field: "routes",
            })?;

            for entry in routes {
                let binding = RouteBinding {
                    group: index,
                    route: Arc::new(compile(entry)),
                };

                if binding.route.is_default {
                    if let Some(first) = &default_route {
                        return Err(ConfigError::DuplicateDefault {
                            first_name: first.route.name.clone(),
                            first_route: first.route.route.clone(),
                            second_name: binding.route.name.clone(),
                            second_route: binding.route.route.clone(),
                        });
                    }
                    default_route = Some(binding.clone());
                }

                debug!(
                    name = %binding.route.name,
                    route = %binding.route.route,
                    "route created"
                );
                registrations.push(Registration {
                    pattern: binding.route.route.clone(),
                    name: binding.route.name.clone(),
                    target: Some(binding),
                });
            }

            groups.push(RouteGroup::new(controller));
        }

        if default_route.is_none() && options.require_default {
            return Err(ConfigError::MissingDefault);
        }

        // Later-declared routes are evaluated first.
        registrations.reverse();

        match &default_route {
            Some(binding) => debug!(
                name = %binding.route.name,
                route = %binding.route.route,
                "default route created"
            ),
            None => debug!("catch-all created without a default route"),
        }
        registrations.push(Registration {
            pattern: options.default_pattern.clone(),
            name: options.default_name.clone(),
            target: default_route,
        });

        Ok(Self {
            groups,
            registrations,
        })
    }

    /// Registrations, highest precedence first.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The compiled route groups, in configuration order.
    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// The route bound to the catch-all, if one was flagged default.
    pub fn default_route(&self) -> Option<&RouteBinding> {
        self.registrations
            .last()
            .and_then(|registration| registration.target.as_ref())
    }

    pub(crate) fn into_parts(self) -> (Vec<RouteGroup>, Vec<Registration>) {
        (self.groups, self.registrations)
    }
}
