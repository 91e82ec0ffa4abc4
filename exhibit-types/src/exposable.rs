//! The domain-object contract.
//!
//! Representation only ever reads from a domain object, one named attribute
//! at a time. Anything that can answer [`Exposable::read`] can be represented;
//! no other interface is required.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{EntityError, Result};

/// A domain object whose attributes can be read by name.
///
/// Implementations return [`EntityError::MissingAttribute`] for attributes
/// they do not know.
///
/// ```
/// use exhibit_types::{Attribute, EntityError, Exposable, Result};
///
/// struct Person {
///     id: u64,
///     name: String,
/// }
///
/// impl Exposable for Person {
///     fn read(&self, attribute: &str) -> Result<Attribute<'_>> {
///         match attribute {
///             "id" => Ok(Attribute::value(self.id)),
///             "name" => Ok(Attribute::value(self.name.as_str())),
///             _ => Err(EntityError::missing_attribute(attribute)),
///         }
///     }
/// }
///
/// let ann = Person { id: 1, name: "Ann".into() };
/// assert!(ann.read("name").is_ok());
/// assert!(ann.read("email").is_err());
/// ```
pub trait Exposable {
    /// Reads the named attribute.
    fn read(&self, attribute: &str) -> Result<Attribute<'_>>;

    /// Elements, when this object is itself a sequence of domain objects.
    ///
    /// Representing such an object yields one entity per element.
    fn elements(&self) -> Option<Vec<&dyn Exposable>> {
        None
    }
}

/// What reading an attribute yields.
pub enum Attribute<'a> {
    /// A scalar or plain value tree.
    Value(Value),
    /// A nested domain object.
    One(&'a dyn Exposable),
    /// A nested sequence of domain objects.
    Many(Vec<&'a dyn Exposable>),
}

impl<'a> Attribute<'a> {
    /// Wraps anything convertible into a [`Value`].
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Converts a serde-serializable field into a value.
    pub fn serialized<S: Serialize + ?Sized>(field: &S) -> Result<Self> {
        Ok(Self::Value(serde_json::to_value(field)?))
    }

    /// Wraps a nested domain object.
    pub fn one<T: Exposable>(object: &'a T) -> Self {
        Self::One(object)
    }

    /// Wraps a slice of nested domain objects.
    pub fn many<T: Exposable>(objects: &'a [T]) -> Self {
        Self::Many(objects.iter().map(|o| o as &dyn Exposable).collect())
    }

    /// Returns the plain value, if this attribute is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for Attribute<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::One(_) => f.write_str("One(..)"),
            Self::Many(items) => write!(f, "Many(len={})", items.len()),
        }
    }
}

impl Exposable for Map<String, Value> {
    fn read(&self, attribute: &str) -> Result<Attribute<'_>> {
        self.get(attribute)
            .map(|v| Attribute::Value(v.clone()))
            .ok_or_else(|| EntityError::missing_attribute(attribute))
    }
}

/// JSON objects expose their keys. Other values expose nothing.
/// JSON arrays are sequences.
impl Exposable for Value {
    fn read(&self, attribute: &str) -> Result<Attribute<'_>> {
        match self {
            Value::Object(map) => map.read(attribute),
            _ => Err(EntityError::missing_attribute(attribute)),
        }
    }

    fn elements(&self) -> Option<Vec<&dyn Exposable>> {
        match self {
            Value::Array(items) => Some(items.iter().map(|i| i as &dyn Exposable).collect()),
            _ => None,
        }
    }
}
