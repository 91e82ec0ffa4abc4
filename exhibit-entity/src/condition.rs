//! Inclusion rules for exposures.

use std::fmt;
use std::sync::Arc;

use exhibit_types::{Exposable, Options, Result, Value};

use crate::Exposure;

/// Caller-supplied predicate over the domain object and the merge context.
pub type PredicateFn = Arc<dyn Fn(&dyn Exposable, &Options) -> anyhow::Result<bool> + Send + Sync>;

/// An `if` or `unless` rule attached to an exposure.
#[derive(Clone, Default)]
pub enum Condition {
    /// No rule; the step always passes.
    #[default]
    None,
    /// Expected values for keys of the merge context.
    ///
    /// A key absent from the context compares as `null`.
    KeyEquals(Options),
    /// Decided by a function of the object and the merge context.
    Predicate(PredicateFn),
}

impl Condition {
    /// Key-equality rule built from key/value pairs.
    pub fn key_equals<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::KeyEquals(exhibit_types::options(pairs))
    }

    /// Predicate rule.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&dyn Exposable, &Options) -> bool + Send + Sync + 'static,
    {
        let f: PredicateFn = Arc::new(
            move |object: &dyn Exposable, context: &Options| -> anyhow::Result<bool> {
                Ok(predicate(object, context))
            },
        );
        Self::Predicate(f)
    }

    /// Predicate rule whose errors abort the representation.
    pub fn try_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&dyn Exposable, &Options) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Returns true when no rule is set.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// `if` semantics: every expected key must match.
    fn holds(&self, object: &dyn Exposable, context: &Options) -> Result<bool> {
        match self {
            Self::None => Ok(true),
            Self::KeyEquals(expected) => Ok(expected
                .iter()
                .all(|(key, value)| context_value(context, key) == value)),
            Self::Predicate(predicate) => Ok(predicate(object, context)?),
        }
    }

    /// `unless` semantics: a single matching key is enough to exclude.
    fn excludes(&self, object: &dyn Exposable, context: &Options) -> Result<bool> {
        match self {
            Self::None => Ok(false),
            Self::KeyEquals(expected) => Ok(expected
                .iter()
                .any(|(key, value)| context_value(context, key) == value)),
            Self::Predicate(predicate) => Ok(predicate(object, context)?),
        }
    }
}

impl From<Options> for Condition {
    fn from(expected: Options) -> Self {
        Self::KeyEquals(expected)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::KeyEquals(expected) => f.debug_tuple("KeyEquals").field(expected).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

fn context_value<'c>(context: &'c Options, key: &str) -> &'c Value {
    context.get(key).unwrap_or(&Value::Null)
}

/// Decides whether `exposure` is part of the output for `object`.
///
/// `if` is evaluated before `unless`, and evaluation stops at the first
/// failing step, so each predicate runs at most once.
pub(crate) fn is_active(exposure: &Exposure, object: &dyn Exposable, context: &Options) -> Result<bool> {
    if !exposure.if_condition().holds(object, context)? {
        return Ok(false);
    }
    Ok(!exposure.unless_condition().excludes(object, context)?)
}
