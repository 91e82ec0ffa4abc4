use std::fmt;

use exhibit_types::{Exposable, Options, Result, merge_options};
use tracing::trace;

use crate::{EntityType, condition, resolver};

/// One domain object bound to an entity type and an options context.
///
/// Built by [`EntityType::represent`], used to produce one output mapping.
/// The object is only ever read.
pub struct Entity<'a> {
    entity_type: &'a EntityType,
    object: &'a dyn Exposable,
    options: Options,
}

impl<'a> Entity<'a> {
    pub fn new(entity_type: &'a EntityType, object: &'a dyn Exposable, options: Options) -> Self {
        Self {
            entity_type,
            object,
            options,
        }
    }

    #[must_use]
    pub fn entity_type(&self) -> &'a EntityType {
        self.entity_type
    }

    #[must_use]
    pub fn object(&self) -> &'a dyn Exposable {
        self.object
    }

    /// Options given at construction.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds the ordered output mapping.
    ///
    /// `runtime_options` override construction options on key collision.
    /// Exposures are visited in declaration order; inactive ones are skipped.
    /// The first error (missing attribute, failing computation or predicate)
    /// aborts the whole build.
    pub fn serializable_hash(&self, runtime_options: &Options) -> Result<Options> {
        let context = merge_options(&self.options, runtime_options);
        let mut output = Options::new();

        for exposure in self.entity_type.exposures() {
            if !condition::is_active(exposure, self.object, &context)? {
                trace!(
                    entity = self.entity_type.name(),
                    attribute = exposure.attribute(),
                    "Exposure skipped"
                );
                continue;
            }
            let value = resolver::resolve(exposure, self.object, &context, self.entity_type.config())?;
            output.insert(exposure.key().to_string(), value);
        }

        Ok(output)
    }
}

impl fmt::Debug for Entity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("entity_type", &self.entity_type.name())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
