//! Declarative entity representations.
//!
//! An [`EntityType`] declares, once, which attributes of a domain object are
//! exposed, under which output keys, and when. At call time it binds a domain
//! object (or a sequence of them) plus caller options into [`Entity`]
//! instances whose [`Entity::serializable_hash`] builds an ordered
//! key→value mapping ready for a formatter.
//!
//! - [`ExposureRegistry`] — append-only, ordered table of [`Exposure`]s
//! - [`Condition`] — `if`/`unless` inclusion rules (key equality or predicate)
//! - [`ExposeOptions`] — declaration options (alias, conditions, delegate, computation)
//! - [`RepresentConfig`] — engine configuration, loadable from TOML
//!
//! ```
//! use exhibit_entity::{Condition, EntityType, ExposeOptions};
//! use exhibit_types::{Options, options};
//! use serde_json::json;
//!
//! let mut person = EntityType::new("Person");
//! person
//!     .expose(&["id"], ExposeOptions::new())?
//!     .expose(&["name"], ExposeOptions::new().alias("full_name"))?
//!     .expose(&["email"], ExposeOptions::new().when(Condition::key_equals([("type", "full")])))?;
//!
//! let ann = json!({"id": 1, "name": "Ann", "email": "a@x.com"});
//! let summary = person.represent(&ann, Options::new()).serializable_hash(&Options::new())?;
//! assert_eq!(summary, json!({"id": 1, "full_name": "Ann"}));
//!
//! let full = person
//!     .represent(&ann, Options::new())
//!     .serializable_hash(&options([("type", "full")]))?;
//! assert_eq!(full, json!({"id": 1, "full_name": "Ann", "email": "a@x.com"}));
//! # Ok::<(), exhibit_types::EntityError>(())
//! ```

mod condition;
mod config;
mod entity;
mod entity_type;
mod exposure;
mod registry;
mod representation;
mod resolver;

pub use condition::{Condition, PredicateFn};
pub use config::{ConfigError, DelegateOptions, RepresentConfig};
pub use entity::Entity;
pub use entity_type::EntityType;
pub use exposure::{ComputeFn, ExposeOptions, Exposure};
pub use registry::ExposureRegistry;
pub use representation::{Representation, Target};
