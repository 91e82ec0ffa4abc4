use exhibit_types::{Exposable, Options, Result, Value, merge_options};
use tracing::debug;

use crate::{Entity, ExposeOptions, Exposure, ExposureRegistry, RepresentConfig, Representation, Target};

/// Describes how one kind of domain object is represented.
///
/// Declare exposures first, then share it (typically behind an `Arc`) and
/// call [`EntityType::represent`] from any number of threads.
#[derive(Debug, Clone)]
pub struct EntityType {
    name: String,
    registry: ExposureRegistry,
    config: RepresentConfig,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RepresentConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: RepresentConfig) -> Self {
        Self {
            name: name.into(),
            registry: ExposureRegistry::new(),
            config,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> &RepresentConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &ExposureRegistry {
        &self.registry
    }

    /// Exposures in declaration order.
    #[must_use]
    pub fn exposures(&self) -> &[Exposure] {
        self.registry.all()
    }

    /// Declares exposures. See [`ExposureRegistry::register`].
    pub fn expose(&mut self, attributes: &[&str], options: ExposeOptions) -> Result<&mut Self> {
        self.registry.register(attributes, options)?;
        Ok(self)
    }

    /// Declares a computed exposure. See [`ExposureRegistry::register_with`].
    pub fn expose_with<F>(&mut self, attributes: &[&str], options: ExposeOptions, compute: F) -> Result<&mut Self>
    where
        F: Fn(&dyn Exposable, &Options) -> Value + Send + Sync + 'static,
    {
        self.registry.register_with(attributes, options, compute)?;
        Ok(self)
    }

    /// Binds `target` to this type.
    ///
    /// A sequence yields one entity per element, each with the collection flag
    /// set to `true` unless `options` sets it explicitly. A single object
    /// keeps `options` as given.
    pub fn represent<'a>(&'a self, target: impl Into<Target<'a>>, options: Options) -> Representation<'a> {
        match target.into() {
            Target::One(object) => Representation::One(Entity::new(self, object, options)),
            Target::Many(objects) => {
                let mut defaults = Options::new();
                defaults.insert(self.config.collection_flag.clone(), Value::Bool(true));
                let options = merge_options(&defaults, &options);
                debug!(entity = %self.name, len = objects.len(), "Representing collection");
                Representation::Many(
                    objects
                        .into_iter()
                        .map(|object| Entity::new(self, object, options.clone()))
                        .collect(),
                )
            }
        }
    }

    /// Documentation of every documented exposure, keyed by output key.
    #[must_use]
    pub fn documentation(&self) -> Options {
        self.exposures()
            .iter()
            .filter_map(|e| e.documentation().map(|doc| (e.key().to_string(), doc.clone())))
            .collect()
    }
}
