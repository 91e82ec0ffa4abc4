//! Per-entity-type exposure table.

use exhibit_types::{EntityError, Exposable, Options, Result, Value};
use tracing::{debug, warn};

use crate::{ExposeOptions, Exposure};

/// Ordered table of exposures for one entity type.
///
/// Entries keep declaration order, which is also output key order.
/// Registration needs `&mut self`; once the owning [`crate::EntityType`] is
/// shared, the table is read-only.
#[derive(Debug, Clone, Default)]
pub struct ExposureRegistry {
    exposures: Vec<Exposure>,
}

impl ExposureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `attributes` with shared `options`.
    ///
    /// Fails with [`EntityError::InvalidExposureDeclaration`] when several
    /// attributes are given together with an alias or a computation, or when
    /// none are given. A failed declaration leaves the table untouched.
    ///
    /// Declaring an attribute again replaces its exposure in place.
    pub fn register(&mut self, attributes: &[&str], options: ExposeOptions) -> Result<()> {
        if let Err(err) = validate(attributes, &options) {
            warn!(?attributes, error = %err, "Rejected exposure declaration");
            return Err(err);
        }

        for attribute in attributes {
            let exposure = Exposure::new(attribute, &options);
            match self.exposures.iter().position(|e| e.attribute() == *attribute) {
                Some(index) => {
                    debug!(attribute, "Exposure redeclared");
                    self.exposures[index] = exposure;
                }
                None => {
                    debug!(attribute, key = exposure.key(), "Exposure registered");
                    self.exposures.push(exposure);
                }
            }
        }
        Ok(())
    }

    /// [`ExposureRegistry::register`] with the computation given as a trailing
    /// function. It takes precedence over one set in `options`.
    pub fn register_with<F>(&mut self, attributes: &[&str], options: ExposeOptions, compute: F) -> Result<()>
    where
        F: Fn(&dyn Exposable, &Options) -> Value + Send + Sync + 'static,
    {
        self.register(attributes, options.compute(compute))
    }

    /// All exposures in declaration order.
    #[must_use]
    pub fn all(&self) -> &[Exposure] {
        &self.exposures
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Exposure> {
        self.exposures.iter().find(|e| e.attribute() == attribute)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }
}

fn validate(attributes: &[&str], options: &ExposeOptions) -> Result<()> {
    if attributes.is_empty() {
        return Err(EntityError::invalid_declaration("no attributes given"));
    }
    if attributes.len() > 1 {
        if options.alias.is_some() {
            return Err(EntityError::invalid_declaration(
                "an alias applies to a single attribute",
            ));
        }
        if options.compute.is_some() {
            return Err(EntityError::invalid_declaration(
                "a custom computation applies to a single attribute",
            ));
        }
    }
    Ok(())
}
