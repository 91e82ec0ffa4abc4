//! Shared fixtures for entity tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use exhibit_entity::{Condition, EntityType, ExposeOptions};
use exhibit_types::{Attribute, EntityError, Exposable, Result};
use serde_json::{Value, json};

pub struct Address {
    pub city: String,
    pub zip: String,
}

pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub home: Address,
    pub addresses: Vec<Address>,
}

impl Exposable for Address {
    fn read(&self, attribute: &str) -> Result<Attribute<'_>> {
        match attribute {
            "city" => Ok(Attribute::value(self.city.as_str())),
            "zip" => Ok(Attribute::value(self.zip.as_str())),
            _ => Err(EntityError::missing_attribute(attribute)),
        }
    }
}

impl Exposable for Person {
    fn read(&self, attribute: &str) -> Result<Attribute<'_>> {
        match attribute {
            "id" => Ok(Attribute::value(self.id)),
            "name" => Ok(Attribute::value(self.name.as_str())),
            "email" => Ok(Attribute::value(self.email.as_str())),
            "home" => Ok(Attribute::one(&self.home)),
            "addresses" => Ok(Attribute::many(&self.addresses)),
            _ => Err(EntityError::missing_attribute(attribute)),
        }
    }
}

pub fn ann() -> Person {
    Person {
        id: 1,
        name: "Ann".into(),
        email: "a@x.com".into(),
        home: Address {
            city: "Oslo".into(),
            zip: "0150".into(),
        },
        addresses: vec![
            Address {
                city: "Oslo".into(),
                zip: "0150".into(),
            },
            Address {
                city: "Bergen".into(),
                zip: "5003".into(),
            },
        ],
    }
}

/// The JSON-backed object used throughout the end-to-end scenario.
pub fn ann_json() -> Value {
    json!({"id": 1, "name": "Ann", "email": "a@x.com"})
}

/// `Person`: `id`, `name` as `full_name`, `email` only when `type` is `full`.
pub fn person_entity() -> EntityType {
    let mut person = EntityType::new("Person");
    person
        .expose(&["id"], ExposeOptions::new())
        .unwrap()
        .expose(&["name"], ExposeOptions::new().alias("full_name"))
        .unwrap()
        .expose(
            &["email"],
            ExposeOptions::new().when(Condition::key_equals([("type", "full")])),
        )
        .unwrap();
    person
}

pub fn address_entity() -> Arc<EntityType> {
    let mut address = EntityType::new("Address");
    address
        .expose(&["city", "zip"], ExposeOptions::new())
        .unwrap();
    Arc::new(address)
}

/// Predicate that records how many times it ran.
pub fn counting_predicate(result: bool) -> (Condition, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let condition = Condition::predicate(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        result
    });
    (condition, calls)
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
