use std::fmt;

use exhibit_types::{Exposable, Options, Result, Value};

use crate::Entity;

/// What to represent: one domain object or an ordered sequence of them.
pub enum Target<'a> {
    One(&'a dyn Exposable),
    Many(Vec<&'a dyn Exposable>),
}

impl<'a> Target<'a> {
    pub fn one<T: Exposable>(object: &'a T) -> Self {
        Self::One(object)
    }

    pub fn many<T: Exposable>(objects: &'a [T]) -> Self {
        Self::Many(objects.iter().map(|o| o as &dyn Exposable).collect())
    }

    /// A sequence if `object` reports [`Exposable::elements`], else a single object.
    pub fn of(object: &'a dyn Exposable) -> Self {
        match object.elements() {
            Some(items) => Self::Many(items),
            None => Self::One(object),
        }
    }

    /// JSON arrays are sequences; any other value is a single object.
    pub fn detect(value: &'a Value) -> Self {
        Self::of(value)
    }

    #[must_use]
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

impl<'a, T: Exposable> From<&'a T> for Target<'a> {
    fn from(object: &'a T) -> Self {
        Self::of(object)
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(_) => f.write_str("One(..)"),
            Self::Many(objects) => write!(f, "Many(len={})", objects.len()),
        }
    }
}

/// Result of [`crate::EntityType::represent`].
#[derive(Debug)]
pub enum Representation<'a> {
    One(Entity<'a>),
    Many(Vec<Entity<'a>>),
}

impl<'a> Representation<'a> {
    /// Builds the output: a mapping for a single entity, a sequence of
    /// mappings for a collection. `runtime_options` apply to every entity.
    pub fn serializable_hash(&self, runtime_options: &Options) -> Result<Value> {
        match self {
            Self::One(entity) => Ok(Value::Object(entity.serializable_hash(runtime_options)?)),
            Self::Many(entities) => entities
                .iter()
                .map(|e| e.serializable_hash(runtime_options).map(Value::Object))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
        }
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Number of entities (1 for a single object).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities().is_empty()
    }

    /// The entities, in target order.
    #[must_use]
    pub fn entities(&self) -> &[Entity<'a>] {
        match self {
            Self::One(entity) => std::slice::from_ref(entity),
            Self::Many(entities) => entities,
        }
    }

    /// The single entity, if this is not a collection.
    #[must_use]
    pub fn into_one(self) -> Option<Entity<'a>> {
        match self {
            Self::One(entity) => Some(entity),
            Self::Many(_) => None,
        }
    }

    /// The entities, wrapping a single one in a vector.
    #[must_use]
    pub fn into_entities(self) -> Vec<Entity<'a>> {
        match self {
            Self::One(entity) => vec![entity],
            Self::Many(entities) => entities,
        }
    }
}
