//! # Screen Controllers
//!
//! A [`Controller`] owns one or more routes. Exactly one controller is active
//! at a time; the dispatcher tears the active one down when navigation moves to
//! a route owned by a different controller.
//!
//! # Reference Progression
//!
//! A route group refers to its controller through a [`ControllerRef`], which
//! only ever moves forward:
//!
//! ```text
//! Identifier("screens/home") --resolve_with--> Type(ControllerType) --instantiate--> Instance
//! ```
//!
//! Identity between controllers is pointer identity of the shared instance, so
//! two groups holding clones of the same [`ControllerInstance`] count as the
//! same controller.

use crate::{error::BoxError, route::RouteDefinition};
use serde::{Deserialize, Deserializer};
use std::{fmt, sync::Arc};

/// A stateful screen handler.
///
/// # Contract
///
/// - [`dispatch`](Controller::dispatch) runs on every navigation to a route
///   owned by this controller, including repeated navigations.
/// - [`remove_view`](Controller::remove_view) runs exactly once when another
///   controller supersedes this one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Controller`",
    label = "missing `Controller` implementation",
    note = "Controllers must implement `dispatch` and `remove_view`."
)]
pub trait Controller: Send + Sync + 'static {
    /// Handle a navigation to one of this controller's routes.
    fn dispatch(&self, request: &Dispatch<'_>) -> Result<(), BoxError>;

    /// Tear down before `next` takes over.
    fn remove_view(&self, next: &NextRoute<'_>) -> Result<(), BoxError>;
}

/// The normalized arguments of a dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Dispatch<'a> {
    /// The matched route.
    pub route: &'a RouteDefinition,
    /// Captured path parameters, left to right.
    pub params: &'a [Option<String>],
}

impl<'a> Dispatch<'a> {
    /// Bundle a route with its captured parameters.
    pub fn new(route: &'a RouteDefinition, params: &'a [Option<String>]) -> Self {
        Self { route, params }
    }

    /// The static path segments of the matched route.
    pub fn parts(&self) -> &'a [String] {
        &self.route.parts
    }

    /// The captured parameter at `index`, if it was matched.
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).and_then(|param| param.as_deref())
    }

    /// Positional view: every captured parameter, then the parts.
    pub fn arguments(self) -> impl Iterator<Item = Argument<'a>> {
        let parts: &'a [String] = &self.route.parts;
        self.params
            .iter()
            .map(|param| Argument::Param(param.as_deref()))
            .chain(std::iter::once(Argument::Parts(parts)))
    }
}

/// One positional dispatch argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// A captured path parameter.
    Param(Option<&'a str>),
    /// The route's path segments; always the final argument.
    Parts(&'a [String]),
}

/// Context handed to a controller that is being superseded.
#[derive(Debug, Clone, Copy)]
pub struct NextRoute<'a> {
    /// Position of the target route group in the configuration.
    pub group: usize,
    /// Label of the target group's controller.
    pub controller: &'a str,
    /// The route being navigated to.
    pub route: &'a RouteDefinition,
}

type Constructor = dyn Fn() -> Arc<dyn Controller> + Send + Sync;

/// A constructor for a controller, produced by resolving an identifier or
/// given directly in the configuration.
#[derive(Clone)]
pub struct ControllerType {
    name: Arc<str>,
    constructor: Arc<Constructor>,
}

impl ControllerType {
    /// Create a type from a constructor closure.
    pub fn new<C, F>(name: impl Into<Arc<str>>, constructor: F) -> Self
    where
        C: Controller,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            constructor: Arc::new(move || Arc::new(constructor()) as Arc<dyn Controller>),
        }
    }

    /// Create a type that builds `C::default()`, named after `C`.
    pub fn of<C: Controller + Default>() -> Self {
        Self::new(std::any::type_name::<C>(), C::default)
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a new instance.
    pub fn instantiate(&self) -> ControllerInstance {
        ControllerInstance {
            name: Arc::clone(&self.name),
            controller: (self.constructor)(),
        }
    }
}

impl fmt::Debug for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerType").field(&self.name).finish()
    }
}

/// A live, shared controller.
#[derive(Clone)]
pub struct ControllerInstance {
    name: Arc<str>,
    controller: Arc<dyn Controller>,
}

impl ControllerInstance {
    /// Wrap an already shared controller.
    pub fn new(name: impl Into<Arc<str>>, controller: Arc<dyn Controller>) -> Self {
        Self {
            name: name.into(),
            controller,
        }
    }

    /// The instance's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped controller.
    pub fn controller(&self) -> &Arc<dyn Controller> {
        &self.controller
    }

    /// Whether both handles point at the same controller.
    pub fn same_as(&self, other: &ControllerInstance) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.controller), Arc::as_ptr(&other.controller))
    }

    /// Forward to [`Controller::dispatch`].
    pub fn dispatch(&self, request: &Dispatch<'_>) -> Result<(), BoxError> {
        self.controller.dispatch(request)
    }

    /// Forward to [`Controller::remove_view`].
    pub fn remove_view(&self, next: &NextRoute<'_>) -> Result<(), BoxError> {
        self.controller.remove_view(next)
    }
}

impl fmt::Debug for ControllerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerInstance").field(&self.name).finish()
    }
}

/// How far a [`ControllerRef`] has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerStage {
    /// Only an identifier is known.
    Unresolved,
    /// A type is known but has not been instantiated.
    Resolved,
    /// A singleton instance exists.
    Instantiated,
}

/// A route group's reference to its controller.
#[derive(Clone)]
pub enum ControllerRef {
    /// An opaque token handed to the controller resolver.
    Identifier(String),
    /// A constructor, instantiated on first navigation.
    Type(ControllerType),
    /// A live controller.
    Instance(ControllerInstance),
}

impl ControllerRef {
    /// Reference a controller by identifier.
    pub fn identifier(identifier: impl Into<String>) -> Self {
        ControllerRef::Identifier(identifier.into())
    }

    /// Reference `C::default()` as a lazily built type.
    pub fn of<C: Controller + Default>() -> Self {
        ControllerRef::Type(ControllerType::of::<C>())
    }

    /// Reference an already built controller.
    pub fn instance<C: Controller>(controller: C) -> Self {
        ControllerRef::Instance(ControllerInstance::new(
            std::any::type_name::<C>(),
            Arc::new(controller),
        ))
    }

    /// Human-readable label: the identifier, type name or instance name.
    pub fn label(&self) -> &str {
        match self {
            ControllerRef::Identifier(identifier) => identifier,
            ControllerRef::Type(ty) => ty.name(),
            ControllerRef::Instance(instance) => instance.name(),
        }
    }

    /// Current progression stage.
    pub fn stage(&self) -> ControllerStage {
        match self {
            ControllerRef::Identifier(_) => ControllerStage::Unresolved,
            ControllerRef::Type(_) => ControllerStage::Resolved,
            ControllerRef::Instance(_) => ControllerStage::Instantiated,
        }
    }

    /// The identifier, while still unresolved.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            ControllerRef::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }

    /// The live instance, once instantiated.
    pub fn as_instance(&self) -> Option<&ControllerInstance> {
        match self {
            ControllerRef::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Advance `Identifier` to `Type`. Later stages are left untouched.
    pub fn resolve_with(&mut self, ty: ControllerType) {
        if let ControllerRef::Identifier(_) = self {
            *self = ControllerRef::Type(ty);
        }
    }

    /// Advance `Type` to `Instance` and return the instance.
    ///
    /// Returns `None` while the reference is still an identifier.
    pub fn instantiate(&mut self) -> Option<ControllerInstance> {
        match self {
            ControllerRef::Identifier(_) => None,
            ControllerRef::Type(ty) => {
                let instance = ty.instantiate();
                *self = ControllerRef::Instance(instance.clone());
                Some(instance)
            }
            ControllerRef::Instance(instance) => Some(instance.clone()),
        }
    }
}

impl fmt::Debug for ControllerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerRef::Identifier(identifier) => {
                f.debug_tuple("Identifier").field(identifier).finish()
            }
            ControllerRef::Type(ty) => f.debug_tuple("Type").field(&ty.name).finish(),
            ControllerRef::Instance(instance) => {
                f.debug_tuple("Instance").field(&instance.name).finish()
            }
        }
    }
}

impl From<&str> for ControllerRef {
    fn from(identifier: &str) -> Self {
        ControllerRef::Identifier(identifier.to_string())
    }
}

impl From<String> for ControllerRef {
    fn from(identifier: String) -> Self {
        ControllerRef::Identifier(identifier)
    }
}

impl From<ControllerType> for ControllerRef {
    fn from(ty: ControllerType) -> Self {
        ControllerRef::Type(ty)
    }
}

impl From<ControllerInstance> for ControllerRef {
    fn from(instance: ControllerInstance) -> Self {
        ControllerRef::Instance(instance)
    }
}

// Documents can only name controllers; types and instances come from code.
impl<'de> Deserialize<'de> for ControllerRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ControllerRef::Identifier)
    }
}
