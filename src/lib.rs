//! Declarative OpenAPI parameter annotations for route handlers.
//!
//! `anota` lets a host web framework describe the HTTP parameters of its
//! route handlers (path, query, header, cookie) as structured metadata,
//! collected into an explicit [`MetadataStore`](metadata::MetadataStore)
//! that a document-generation pipeline reads later. The crate does not
//! route requests, validate values, or emit OpenAPI documents itself; it
//! only normalizes declarative options into canonical parameter records
//! and attaches them to the right handlers.
//!
//! Annotation runs once, while the host wires up its controllers, before
//! any request handling starts. There is no global state: the store is
//! owned by the host and passed into every operation.
//!
//! # Quick Start
//!
//! ```
//! use anota::prelude::*;
//!
//! # fn main() -> anota::Result<()> {
//! let controller = Controller::new("UsersController")
//!     .handler("get_user")
//!     .handler("build_response");
//!
//! let mut store = MetadataStore::new();
//! // The host marks real route handlers as it registers them.
//! store.mark_operation(&controller.handlers()[0], Operation::new("GET", "/users/:id"));
//!
//! // Controller-level annotation reaches only marked handlers.
//! ParamAnnotator::path(ParameterOptions::new().name("id"))?
//!     .annotate_controller(&mut store, &controller);
//!
//! let params = store.parameters(&controller.handlers()[0].target());
//! assert_eq!(params[0].name, "id");
//! assert!(store.parameters(&controller.handlers()[1].target()).is_empty());
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod error;
pub mod handler;
pub mod metadata;
pub mod param;
pub mod schema;

pub use annotate::ParamAnnotator;
pub use error::{Error, Result};

/// Commonly used types, re-exported for one-line imports.
pub mod prelude {
    pub use crate::annotate::ParamAnnotator;
    pub use crate::error::{Error, Result};
    pub use crate::handler::{Controller, Handler, Operation};
    pub use crate::metadata::{MetadataKey, MetadataStore, Target};
    pub use crate::param::{ParameterLocation, ParameterOptions, ParameterRecord};
    pub use crate::schema::SchemaObject;
}
