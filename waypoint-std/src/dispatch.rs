//! # Navigation Dispatch
//!
//! [`NavigationDispatcher`] runs the per-navigation state machine:
//!
//! ```text
//! Matched ──▶ Resolving ──▶ Superseding ──▶ Instantiating ──▶ Dispatching
//!             (identifier     (remove_view on   (type becomes     (params + parts
//!              → type)         a different       the group's       handed to the
//!                              controller)       singleton)        controller)
//! ```
//!
//! # Serialization
//!
//! A navigation holds its group's controller cell for its whole duration and
//! takes the active cell after it, always in that order. Concurrent
//! navigations to an unresolved group therefore wait for the first resolution
//! instead of resolving twice.
//!
//! # Failure
//!
//! Nothing is rolled back. A failed resolution runs before any teardown and
//! leaves the previous controller active. A failed teardown leaves the
//! superseded controller active. A failed dispatch leaves the new controller
//! active.

use crate::table::{RouteBinding, RouteGroup};
use futures::{FutureExt, lock::Mutex};
use std::sync::Arc;
use tracing::{Instrument, debug};
use waypoint_core::{
    ControllerInstance, ControllerStage, Dispatch, DynControllerResolver, NavigationError,
    NextRoute, RouteHandler,
};

/// Owns the controller groups and the single active controller.
pub struct NavigationDispatcher {
    groups: Vec<RouteGroup>,
    active: Mutex<Option<ControllerInstance>>,
    resolver: Arc<dyn DynControllerResolver>,
}

impl NavigationDispatcher {
    /// Create a dispatcher over compiled groups.
    pub fn new(groups: Vec<RouteGroup>, resolver: Arc<dyn DynControllerResolver>) -> Self {
        Self {
            groups,
            active: Mutex::new(None),
            resolver,
        }
    }

    /// Build the navigation engine callback for a registration target.
    pub fn handler(self: &Arc<Self>, target: Option<RouteBinding>) -> RouteHandler {
        let dispatcher = Arc::clone(self);
        Arc::new(move |params: Vec<Option<String>>| {
            let dispatcher = Arc::clone(&dispatcher);
            let target = target.clone();
            async move { dispatcher.handle(target.as_ref(), params).await }.boxed()
        })
    }

    /// Handle a navigation to `target` with the captured parameters.
    ///
    /// A missing target means the catch-all matched without a default route.
    pub async fn handle(
        &self,
        target: Option<&RouteBinding>,
        params: Vec<Option<String>>,
    ) -> Result<(), NavigationError> {
        let target = target.ok_or(NavigationError::NoDefaultRoute)?;
        let span = tracing::debug_span!(
            "navigate",
            route = %target.route.name,
            pattern = %target.route.route
        );
        self.run(target, params).instrument(span).await
    }

    async fn run(
        &self,
        target: &RouteBinding,
        mut params: Vec<Option<String>>,
    ) -> Result<(), NavigationError> {
        let route = target.route.as_ref();
        debug!("navigate to \"{}\" (url://{})", route.name, route.route);

        // Engines append a `None` sentinel after the captured parameters.
        if matches!(params.last(), Some(None)) {
            params.pop();
        }

        let group = &self.groups[target.group];
        let mut controller = group.controller().lock().await;

        if let Some(identifier) = controller.as_identifier().map(str::to_string) {
            debug!(controller = %identifier, "loading controller");
            let ty = self
                .resolver
                .resolve_dyn(&identifier)
                .await
                .map_err(|source| NavigationError::Resolution {
                    controller: identifier.clone(),
                    source,
                })?;
            controller.resolve_with(ty);
        }

        let mut active = self.active.lock().await;
        if let Some(current) = active.as_ref() {
            let same = controller
                .as_instance()
                .is_some_and(|candidate| candidate.same_as(current));
            if !same {
                debug!(previous = %current.name(), "removing previous controller view");
                let next = NextRoute {
                    group: target.group,
                    controller: group.label(),
                    route,
                };
                current
                    .remove_view(&next)
                    .map_err(|source| NavigationError::Teardown {
                        controller: current.name().to_string(),
                        source,
                    })?;
                *active = None;
            }
        }

        let instance = controller
            .instantiate()
            .ok_or_else(|| NavigationError::Resolution {
                controller: group.label().to_string(),
                source: "controller reference is still unresolved".into(),
            })?;
        *active = Some(instance.clone());

        instance
            .dispatch(&Dispatch::new(route, &params))
            .map_err(|source| NavigationError::Dispatch {
                route: route.name.clone(),
                source,
            })?;

        debug!("navigated to \"{}\" (url://{})", route.name, route.route);
        Ok(())
    }

    /// The currently active controller.
    pub async fn active_controller(&self) -> Option<ControllerInstance> {
        self.active.lock().await.clone()
    }

    /// How far the controller of group `group` has progressed.
    pub async fn stage(&self, group: usize) -> Option<ControllerStage> {
        let group = self.groups.get(group)?;
        Some(group.controller().lock().await.stage())
    }

    /// Number of route groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
