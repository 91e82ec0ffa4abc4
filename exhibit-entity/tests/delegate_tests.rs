mod common;

use std::sync::Arc;

use common::{address_entity, ann, calls, counting_predicate};
use exhibit_entity::{Condition, DelegateOptions, EntityType, ExposeOptions, RepresentConfig};
use exhibit_types::{Options, options};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn person_with_home(config: RepresentConfig, delegate: Arc<EntityType>) -> EntityType {
    let mut person = EntityType::with_config("Person", config);
    person
        .expose(&["id"], ExposeOptions::new())
        .unwrap()
        .expose(&["home"], ExposeOptions::new().using(delegate))
        .unwrap();
    person
}

/// Echoes the options it was represented with.
fn options_probe() -> Arc<EntityType> {
    let mut probe = EntityType::new("OptionsProbe");
    probe
        .expose_with(&["seen"], ExposeOptions::new(), |_, context| {
            Value::Object(context.clone())
        })
        .unwrap();
    Arc::new(probe)
}

// ── Nesting ──────────────────────────────────────────────────────

#[test]
fn single_nested_object_becomes_mapping() {
    let person = person_with_home(RepresentConfig::default(), address_entity());
    let obj = ann();
    let output = person
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(
        output,
        json!({"id": 1, "home": {"city": "Oslo", "zip": "0150"}})
    );
}

#[test]
fn nested_sequence_becomes_array_of_mappings() {
    let mut person = EntityType::new("Person");
    person
        .expose(
            &["addresses"],
            ExposeOptions::new().alias("places").using(address_entity()),
        )
        .unwrap();
    let obj = ann();
    let output = person
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(
        output,
        json!({"places": [
            {"city": "Oslo", "zip": "0150"},
            {"city": "Bergen", "zip": "5003"},
        ]})
    );
}

#[test]
fn json_nested_values_are_delegated() {
    let mut order = EntityType::new("Order");
    order
        .expose(&["lines"], ExposeOptions::new().using(address_entity()))
        .unwrap()
        .expose(&["ship_to"], ExposeOptions::new().using(address_entity()))
        .unwrap();
    let obj = json!({
        "lines": [{"city": "A", "zip": "1", "extra": true}],
        "ship_to": {"city": "B", "zip": "2"},
    });
    let output = order
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(
        output,
        json!({
            "lines": [{"city": "A", "zip": "1"}],
            "ship_to": {"city": "B", "zip": "2"},
        })
    );
}

// ── Option propagation ───────────────────────────────────────────

#[test]
fn delegate_starts_from_empty_options_by_default() {
    let person = person_with_home(RepresentConfig::default(), options_probe());
    let obj = ann();
    let output = person
        .represent(&obj, options([("type", "full")]))
        .serializable_hash(&options([("lang", "en")]))
        .unwrap();
    assert_eq!(output["home"], json!({"seen": {}}));
}

#[test]
fn delegated_sequence_gets_only_collection_flag() {
    let mut person = EntityType::new("Person");
    person
        .expose(&["addresses"], ExposeOptions::new().using(options_probe()))
        .unwrap();
    let obj = ann();
    let output = person
        .represent(&obj, options([("type", "full")]))
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(
        output["addresses"],
        json!([{"seen": {"collection": true}}, {"seen": {"collection": true}}])
    );
}

#[test]
fn inherit_mode_passes_merge_context() {
    let config = RepresentConfig {
        delegate_options: DelegateOptions::Inherit,
        ..RepresentConfig::default()
    };
    let person = person_with_home(config, options_probe());
    let obj = ann();
    let output = person
        .represent(&obj, options([("type", "full")]))
        .serializable_hash(&options([("lang", "en")]))
        .unwrap();
    assert_eq!(output["home"], json!({"seen": {"type": "full", "lang": "en"}}));
}

#[test]
fn inherit_mode_drops_parent_collection_flag() {
    let config = RepresentConfig {
        delegate_options: DelegateOptions::Inherit,
        ..RepresentConfig::default()
    };
    let person = person_with_home(config, options_probe());
    let people = [ann()];
    let output = person
        .represent(exhibit_entity::Target::many(&people), Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(output[0]["home"], json!({"seen": {}}));
}

// ── Priority ─────────────────────────────────────────────────────

#[test]
fn computation_wins_over_delegate() {
    let mut delegate = EntityType::new("Address");
    let (spy, spy_calls) = counting_predicate(true);
    delegate
        .expose(&["city"], ExposeOptions::new().when(spy))
        .unwrap();

    let mut person = EntityType::new("Person");
    person
        .expose(
            &["home"],
            ExposeOptions::new()
                .using(Arc::new(delegate))
                .compute(|_, _| json!("computed")),
        )
        .unwrap();
    let obj = ann();
    let output = person
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(output, json!({"home": "computed"}));
    assert_eq!(calls(&spy_calls), 0);
}

#[test]
fn excluded_delegate_never_runs() {
    let mut delegate = EntityType::new("Address");
    let (spy, spy_calls) = counting_predicate(true);
    delegate
        .expose(&["city"], ExposeOptions::new().when(spy))
        .unwrap();

    let mut person = EntityType::new("Person");
    person
        .expose(
            &["home"],
            ExposeOptions::new()
                .using(Arc::new(delegate))
                .when(Condition::key_equals([("type", "full")])),
        )
        .unwrap();
    let obj = ann();
    let output = person
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(output, json!({}));
    assert_eq!(calls(&spy_calls), 0);
}

#[test]
fn delegate_missing_attribute_propagates() {
    let mut delegate = EntityType::new("Address");
    delegate
        .expose(&["country"], ExposeOptions::new())
        .unwrap();
    let person = person_with_home(RepresentConfig::default(), Arc::new(delegate));
    let obj = ann();
    let err = person
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "missing attribute: country");
}

// ── Null relations ───────────────────────────────────────────────

fn order_with_optional_ship_to(guard: bool) -> EntityType {
    let mut options = ExposeOptions::new().using(address_entity());
    if guard {
        options = options.when(Condition::predicate(|object, _| {
            object
                .read("ship_to")
                .ok()
                .and_then(|a| a.as_value().map(|v| !v.is_null()))
                .unwrap_or(false)
        }));
    }
    let mut order = EntityType::new("Order");
    order
        .expose(&["id"], ExposeOptions::new())
        .unwrap()
        .expose(&["ship_to"], options)
        .unwrap();
    order
}

#[test]
fn delegated_null_is_represented_as_an_object() {
    let order = order_with_optional_ship_to(false);
    let obj = json!({"id": 9, "ship_to": null});
    let err = order
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap_err();
    assert!(matches!(err, exhibit_types::EntityError::MissingAttribute(ref a) if a == "city"));
}

#[test]
fn delegated_null_skipped_by_condition() {
    let order = order_with_optional_ship_to(true);
    let obj = json!({"id": 9, "ship_to": null});
    let output = order
        .represent(&obj, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(output, json!({"id": 9}));

    let shipped = json!({"id": 9, "ship_to": {"city": "Oslo", "zip": "0150"}});
    let output = order
        .represent(&shipped, Options::new())
        .serializable_hash(&Options::new())
        .unwrap();
    assert_eq!(output, json!({"id": 9, "ship_to": {"city": "Oslo", "zip": "0150"}}));
}
