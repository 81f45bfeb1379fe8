//! Controller and handler descriptors.
//!
//! The host framework describes each controller as an explicit list of
//! named handlers. Registering a route writes an [`Operation`] marker
//! into the metadata store for that handler; controller-level annotation
//! later filters on that marker so only real route handlers receive
//! parameter metadata.

use serde::Serialize;

use crate::metadata::{MetadataKey, MetadataStore, Target};

/// A registered route operation: HTTP method plus path pattern.
///
/// # Examples
///
/// ```
/// use anota::handler::Operation;
///
/// let op = Operation::new("GET", "/users/:id");
/// assert_eq!(op.method, "GET");
/// assert_eq!(op.path, "/users/:id");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Operation {
    /// The HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: String,
    /// The path pattern with parameters (e.g., "/users/:id").
    pub path: String,
}

impl Operation {
    /// Creates a new Operation with the given metadata.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

/// A named handler slot on a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    controller: String,
    name: String,
}

impl Handler {
    pub fn new(controller: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            name: name.into(),
        }
    }

    /// The handler's own name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the controller this handler belongs to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The metadata target identifying this handler.
    pub fn target(&self) -> Target {
        Target::handler(self.controller.clone(), self.name.clone())
    }
}

/// A controller and the handlers it declares, in declaration order.
///
/// Not every declared handler is a route handler; only those marked via
/// [`MetadataStore::mark_operation`] are treated as operations.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    name: String,
    handlers: Vec<Handler>,
}

impl Controller {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    /// Declares a handler on this controller.
    pub fn handler(mut self, name: impl Into<String>) -> Self {
        let handler = Handler::new(self.name.clone(), name);
        self.handlers.push(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared handlers, in declaration order.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }
}

impl MetadataStore {
    /// Marks `handler` as a registered route operation.
    ///
    /// Called by the host when the route is wired up; controller-level
    /// annotation attaches parameter metadata only to marked handlers.
    pub fn mark_operation(&mut self, handler: &Handler, operation: Operation) {
        tracing::debug!(
            handler = handler.name(),
            method = %operation.method,
            path = %operation.path,
            "registering operation"
        );
        let value = serde_json::to_value(&operation).unwrap_or_default();
        self.set(MetadataKey::OPERATION, &handler.target(), value);
    }
}
