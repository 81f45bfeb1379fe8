//! The parameter annotator.
//!
//! A [`ParamAnnotator`] is built once per annotation site, fixing the
//! parameter location and normalizing the options into a record. The
//! caller then applies it to a single handler or to a whole controller;
//! the controller form attaches only to handlers carrying a registered
//! operation, so helper methods on a controller stay untouched.

use crate::error::Result;
use crate::handler::{Controller, Handler};
use crate::metadata::{MetadataKey, MetadataStore};
use crate::param::{ParameterLocation, ParameterOptions, ParameterRecord};

/// Attaches one parameter's metadata to route handlers.
///
/// # Examples
///
/// ```
/// use anota::prelude::*;
///
/// # fn main() -> anota::Result<()> {
/// let mut store = MetadataStore::new();
/// let handler = Handler::new("UsersController", "get_user");
///
/// ParamAnnotator::path(ParameterOptions::new().name("id"))?
///     .annotate_handler(&mut store, &handler);
///
/// let params = store.parameters(&handler.target());
/// assert_eq!(params[0].name, "id");
/// assert!(params[0].required);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParamAnnotator {
    record: ParameterRecord,
}

impl ParamAnnotator {
    /// Annotator for a path parameter (`in: "path"`).
    pub fn path(options: ParameterOptions) -> Result<Self> {
        Self::with_location(ParameterLocation::Path, options)
    }

    /// Annotator for a query parameter (`in: "query"`).
    pub fn query(options: ParameterOptions) -> Result<Self> {
        Self::with_location(ParameterLocation::Query, options)
    }

    /// Annotator for a header parameter (`in: "header"`).
    pub fn header(options: ParameterOptions) -> Result<Self> {
        Self::with_location(ParameterLocation::Header, options)
    }

    /// Annotator for a cookie parameter (`in: "cookie"`).
    pub fn cookie(options: ParameterOptions) -> Result<Self> {
        Self::with_location(ParameterLocation::Cookie, options)
    }

    fn with_location(location: ParameterLocation, options: ParameterOptions) -> Result<Self> {
        let record = ParameterRecord::from_options(location, options)?;
        Ok(Self { record })
    }

    /// The normalized record this annotator attaches.
    pub fn record(&self) -> &ParameterRecord {
        &self.record
    }

    /// Appends the record to one handler's parameter list, creating the
    /// list when absent. Applying the same annotator twice appends two
    /// records; merging duplicates is left to document generation.
    pub fn annotate_handler(&self, store: &mut MetadataStore, handler: &Handler) {
        tracing::debug!(
            controller = handler.controller(),
            handler = handler.name(),
            parameter = %self.record.name,
            "attaching parameter metadata"
        );
        let value = serde_json::to_value(&self.record).unwrap_or_default();
        store.append(MetadataKey::API_PARAMETERS, &handler.target(), value);
    }

    /// Attaches the record to every operation-marked handler of a
    /// controller. Handlers without a registered operation are skipped;
    /// a controller with none is a no-op.
    pub fn annotate_controller(&self, store: &mut MetadataStore, controller: &Controller) {
        for handler in controller.handlers() {
            if !store.is_operation_handler(&handler.target()) {
                tracing::trace!(
                    controller = controller.name(),
                    handler = handler.name(),
                    "skipping member without a registered operation"
                );
                continue;
            }
            self.annotate_handler(store, handler);
        }
    }
}
