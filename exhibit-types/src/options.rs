use serde_json::{Map, Value};

/// Ordered key→value mapping.
///
/// Used for construction options, runtime options, merge contexts and the
/// output mapping itself. Insertion order is preserved.
pub type Options = Map<String, Value>;

/// Builds an [`Options`] mapping from key/value pairs, keeping their order.
pub fn options<I, K, V>(pairs: I) -> Options
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Returns `base` overridden by `overrides` on key collision.
///
/// Keys only present in `base` keep their value and position; new keys from
/// `overrides` are appended in their own order.
pub fn merge_options(base: &Options, overrides: &Options) -> Options {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
