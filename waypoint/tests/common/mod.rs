#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use waypoint::{
    Argument, BoxError, Controller, ControllerType, Dispatch, NextRoute, RouteConfigGroup,
    RouteSpec, routes, testing::Journal, testing::RecordingController,
};

// ============================================================================
// Parameter Helpers
// ============================================================================

pub fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| value.map(str::to_string)).collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

// ============================================================================
// Test Controllers
// ============================================================================

/// Flattens every dispatch into one line of `Argument`s.
#[derive(Default)]
pub struct ArgumentsController {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ArgumentsController {
    pub fn controller_type(calls: &Arc<Mutex<Vec<Vec<String>>>>) -> ControllerType {
        let calls = Arc::clone(calls);
        ControllerType::new("arguments", move || ArgumentsController {
            calls: Arc::clone(&calls),
        })
    }
}

impl Controller for ArgumentsController {
    fn dispatch(&self, request: &Dispatch<'_>) -> Result<(), BoxError> {
        let line = request
            .arguments()
            .map(|argument| match argument {
                Argument::Param(Some(value)) => value.to_string(),
                Argument::Param(None) => "-".to_string(),
                Argument::Parts(parts) => format!("[{}]", parts.join(",")),
            })
            .collect();
        self.calls.lock().unwrap().push(line);
        Ok(())
    }

    fn remove_view(&self, _next: &NextRoute<'_>) -> Result<(), BoxError> {
        Ok(())
    }
}

// ============================================================================
// Configurations
// ============================================================================

/// `home` (default) and `about` on one controller, `items` routes on another.
pub fn two_screens(journal: &Journal) -> Vec<RouteConfigGroup> {
    routes![
        RecordingController::controller_type("home", journal) => [
            RouteSpec::new("home").default_route(),
            "about",
        ],
        RecordingController::controller_type("items", journal) => [
            "items",
            "items/:id",
        ],
    ]
}
