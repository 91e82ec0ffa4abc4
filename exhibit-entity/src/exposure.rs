//! Exposure declarations.

use std::fmt;
use std::sync::Arc;

use exhibit_types::{Exposable, Options, Value};

use crate::{Condition, EntityType};

/// Caller-supplied computation of an exposure's value.
pub type ComputeFn = Arc<dyn Fn(&dyn Exposable, &Options) -> anyhow::Result<Value> + Send + Sync>;

/// Options accepted when declaring one or more exposures.
///
/// `alias` and the computation only make sense for a single attribute;
/// the registry rejects them on multi-attribute declarations.
#[derive(Clone, Default)]
pub struct ExposeOptions {
    pub(crate) alias: Option<String>,
    pub(crate) if_condition: Condition,
    pub(crate) unless_condition: Condition,
    pub(crate) delegate: Option<Arc<EntityType>>,
    pub(crate) compute: Option<ComputeFn>,
    pub(crate) documentation: Option<Value>,
}

impl ExposeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Output key to use instead of the attribute name. An empty alias is ignored.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    /// Include the exposure only when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.if_condition = condition.into();
        self
    }

    /// Exclude the exposure when `condition` holds.
    #[must_use]
    pub fn unless(mut self, condition: impl Into<Condition>) -> Self {
        self.unless_condition = condition.into();
        self
    }

    /// Represent the attribute's value with another entity type.
    #[must_use]
    pub fn using(mut self, delegate: Arc<EntityType>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Compute the value instead of reading the attribute.
    #[must_use]
    pub fn compute<F>(self, compute: F) -> Self
    where
        F: Fn(&dyn Exposable, &Options) -> Value + Send + Sync + 'static,
    {
        self.try_compute(move |object: &dyn Exposable, context: &Options| -> anyhow::Result<Value> {
            Ok(compute(object, context))
        })
    }

    /// Fallible form of [`ExposeOptions::compute`].
    #[must_use]
    pub fn try_compute<F>(mut self, compute: F) -> Self
    where
        F: Fn(&dyn Exposable, &Options) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.compute = Some(Arc::new(compute));
        self
    }

    /// Free-form documentation attached to the exposure.
    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<Value>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

impl fmt::Debug for ExposeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposeOptions")
            .field("alias", &self.alias)
            .field("if", &self.if_condition)
            .field("unless", &self.unless_condition)
            .field("using", &self.delegate.as_ref().map(|d| d.name()))
            .field("compute", &self.compute.is_some())
            .finish()
    }
}

/// One declared attribute→output-key mapping.
#[derive(Clone)]
pub struct Exposure {
    attribute: String,
    alias: Option<String>,
    if_condition: Condition,
    unless_condition: Condition,
    delegate: Option<Arc<EntityType>>,
    compute: Option<ComputeFn>,
    documentation: Option<Value>,
}

impl Exposure {
    pub(crate) fn new(attribute: &str, options: &ExposeOptions) -> Self {
        Self {
            attribute: attribute.to_string(),
            alias: options.alias.clone(),
            if_condition: options.if_condition.clone(),
            unless_condition: options.unless_condition.clone(),
            delegate: options.delegate.clone(),
            compute: options.compute.clone(),
            documentation: options.documentation.clone(),
        }
    }

    /// Name of the attribute read from the domain object.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Output key: the alias if set, else the attribute name.
    #[must_use]
    pub fn key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.attribute)
    }

    #[must_use]
    pub fn if_condition(&self) -> &Condition {
        &self.if_condition
    }

    #[must_use]
    pub fn unless_condition(&self) -> &Condition {
        &self.unless_condition
    }

    #[must_use]
    pub fn delegate(&self) -> Option<&Arc<EntityType>> {
        self.delegate.as_ref()
    }

    #[must_use]
    pub fn compute_fn(&self) -> Option<&ComputeFn> {
        self.compute.as_ref()
    }

    #[must_use]
    pub fn has_compute(&self) -> bool {
        self.compute.is_some()
    }

    #[must_use]
    pub fn documentation(&self) -> Option<&Value> {
        self.documentation.as_ref()
    }
}

impl fmt::Debug for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exposure")
            .field("attribute", &self.attribute)
            .field("alias", &self.alias)
            .field("if", &self.if_condition)
            .field("unless", &self.unless_condition)
            .field("using", &self.delegate.as_ref().map(|d| d.name()))
            .field("compute", &self.compute.is_some())
            .finish()
    }
}
