//! Testing utilities for waypoint.
//!
//! This module provides controllers and resolvers that record what the
//! dispatcher does to them.
//!
//! # Features
//!
//! - [`Journal`]: A shared, ordered log of controller activity
//! - [`RecordingController`]: A controller that writes every call to a journal
//! - [`FailingController`]: A controller that fails on dispatch or teardown
//! - [`CountingResolver`]: A resolver wrapper that counts resolutions

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use waypoint_core::{
    BoxError, Controller, ControllerInstance, ControllerResolver, ControllerType, Dispatch,
    NextRoute,
};

// ============================================================================
// Journal
// ============================================================================

/// One recorded controller event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    /// A controller instance was constructed.
    Created {
        /// Controller label.
        controller: String,
    },
    /// A controller dispatched a route.
    Dispatched {
        /// Controller label.
        controller: String,
        /// Route name.
        route: String,
        /// Captured parameters as received.
        params: Vec<Option<String>>,
        /// Route parts as received.
        parts: Vec<String>,
    },
    /// A controller removed its view.
    Removed {
        /// Controller label.
        controller: String,
        /// Name of the route that superseded it.
        next_route: String,
    },
}

/// A shared, ordered log of controller events.
///
/// # Example
///
/// ```rust,ignore
/// let journal = Journal::new();
/// let home = RecordingController::controller_type("home", &journal);
///
/// // Use in a router...
/// router.navigate("home").await?;
///
/// assert_eq!(journal.created("home"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: JournalEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    /// Get a clone of every entry, oldest first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Recorded dispatches as `(controller, params, parts)`.
    pub fn dispatches(&self) -> Vec<(String, Vec<Option<String>>, Vec<String>)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                JournalEntry::Dispatched {
                    controller,
                    params,
                    parts,
                    ..
                } => Some((controller, params, parts)),
                _ => None,
            })
            .collect()
    }

    /// Recorded teardowns as `(controller, next_route)`.
    pub fn removals(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                JournalEntry::Removed {
                    controller,
                    next_route,
                } => Some((controller, next_route)),
                _ => None,
            })
            .collect()
    }

    /// How many instances of `controller` were constructed.
    pub fn created(&self, controller: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| {
                matches!(entry, JournalEntry::Created { controller: c } if c == controller)
            })
            .count()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Controller
// ============================================================================

/// A controller that records every call in a [`Journal`].
#[derive(Debug, Clone)]
pub struct RecordingController {
    label: String,
    journal: Journal,
}

impl RecordingController {
    /// Create a controller writing to `journal` under `label`.
    pub fn new(label: impl Into<String>, journal: &Journal) -> Self {
        Self {
            label: label.into(),
            journal: journal.clone(),
        }
    }

    /// A type whose instances record their construction.
    pub fn controller_type(label: impl Into<String>, journal: &Journal) -> ControllerType {
        let label = label.into();
        let journal = journal.clone();
        ControllerType::new(label.clone(), move || {
            journal.record(JournalEntry::Created {
                controller: label.clone(),
            });
            RecordingController::new(label.clone(), &journal)
        })
    }

    /// An already built instance, shareable between route groups.
    pub fn shared(label: impl Into<String>, journal: &Journal) -> ControllerInstance {
        let label = label.into();
        ControllerInstance::new(
            label.clone(),
            Arc::new(RecordingController::new(label, journal)),
        )
    }
}

impl Controller for RecordingController {
    fn dispatch(&self, request: &Dispatch<'_>) -> Result<(), BoxError> {
        self.journal.record(JournalEntry::Dispatched {
            controller: self.label.clone(),
            route: request.route.name.clone(),
            params: request.params.to_vec(),
            parts: request.parts().to_vec(),
        });
        Ok(())
    }

    fn remove_view(&self, next: &NextRoute<'_>) -> Result<(), BoxError> {
        self.journal.record(JournalEntry::Removed {
            controller: self.label.clone(),
            next_route: next.route.name.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// Failing Controller
// ============================================================================

/// A controller that fails in one of its operations.
#[derive(Debug, Clone, Copy)]
pub struct FailingController {
    fail_dispatch: bool,
    fail_remove: bool,
}

impl FailingController {
    /// Fails every dispatch.
    pub fn on_dispatch() -> Self {
        Self {
            fail_dispatch: true,
            fail_remove: false,
        }
    }

    /// Fails when asked to remove its view.
    pub fn on_remove() -> Self {
        Self {
            fail_dispatch: false,
            fail_remove: true,
        }
    }
}

impl Controller for FailingController {
    fn dispatch(&self, request: &Dispatch<'_>) -> Result<(), BoxError> {
        if self.fail_dispatch {
            return Err(format!("intentional dispatch failure for {}", request.route.name).into());
        }
        Ok(())
    }

    fn remove_view(&self, _next: &NextRoute<'_>) -> Result<(), BoxError> {
        if self.fail_remove {
            return Err("intentional teardown failure".into());
        }
        Ok(())
    }
}

// ============================================================================
// Counting Resolver
// ============================================================================

/// A resolver wrapper that counts how often it is asked to resolve.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = CountingResolver::new(registry);
/// let counter = resolver.clone();
///
/// // Use in a router...
///
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingResolver<R> {
    inner: Arc<R>,
    count: Arc<AtomicUsize>,
}

impl<R> CountingResolver<R> {
    /// Wrap a resolver.
    pub fn new(inner: R) -> Self {
        Self {
            inner: Arc::new(inner),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of resolutions so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<R> Clone for CountingResolver<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            count: Arc::clone(&self.count),
        }
    }
}

impl<R: ControllerResolver> ControllerResolver for CountingResolver<R> {
    async fn resolve(&self, identifier: &str) -> Result<ControllerType, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(identifier).await
    }
}
