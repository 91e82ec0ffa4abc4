//! Value resolution for active exposures.

use exhibit_types::{Attribute, EntityError, Exposable, Options, Result, Value};
use tracing::debug;

use crate::{EntityType, Exposure, RepresentConfig, Target};

/// Computes the output value of `exposure`.
///
/// Priority: custom computation, then delegation, then direct attribute read.
/// Delegated values are represented eagerly: the result is already a mapping
/// (or a sequence of mappings), never an unbuilt entity. A delegated `null`
/// is represented like any other single object, so the delegate's first
/// exposure fails with [`EntityError::MissingAttribute`]; guard optional
/// relations with a condition.
pub(crate) fn resolve(
    exposure: &Exposure,
    object: &dyn Exposable,
    context: &Options,
    config: &RepresentConfig,
) -> Result<Value> {
    if let Some(compute) = exposure.compute_fn() {
        return Ok(compute(object, context)?);
    }

    let raw = object.read(exposure.attribute())?;
    match exposure.delegate() {
        Some(delegate) => {
            debug!(
                attribute = exposure.attribute(),
                delegate = delegate.name(),
                "Representing delegated attribute"
            );
            represent_delegated(delegate, raw, config.delegate_context(context))
        }
        None => match raw {
            Attribute::Value(value) => Ok(value),
            Attribute::One(_) | Attribute::Many(_) => Err(EntityError::NestedWithoutDelegate(
                exposure.attribute().to_string(),
            )),
        },
    }
}

fn represent_delegated(delegate: &EntityType, raw: Attribute<'_>, options: Options) -> Result<Value> {
    let target = match &raw {
        Attribute::Value(value) => Target::detect(value),
        Attribute::One(object) => Target::of(*object),
        Attribute::Many(objects) => Target::Many(objects.clone()),
    };
    delegate
        .represent(target, options)
        .serializable_hash(&Options::new())
}
