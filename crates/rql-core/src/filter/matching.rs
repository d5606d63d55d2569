//! Condition matching logic and helper functions.

use std::cmp::Ordering;

use super::{Condition, RangeOp};
use crate::pattern::like_match;
use crate::record::{resolve, resolve_many, Record};

impl RangeOp {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Lt => ordering == Ordering::Less,
            Self::Le => ordering != Ordering::Greater,
            Self::Gt => ordering == Ordering::Greater,
            Self::Ge => ordering != Ordering::Less,
        }
    }
}

impl Condition {
    /// Evaluates the condition against a record.
    #[must_use]
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::AlwaysFalse => false,
            // Both sides are evaluated; evaluation has no side effects.
            Self::And { left, right } => {
                let l = left.matches(record);
                let r = right.matches(record);
                l && r
            }
            Self::Or { left, right } => {
                let l = left.matches(record);
                let r = right.matches(record);
                l || r
            }
            Self::Equal { field, value } => resolve(record, field).is_some_and(|v| v == *value),
            Self::NotEqual { field, value } => {
                resolve(record, field).is_some_and(|v| v != *value)
            }
            Self::Comparison {
                field,
                operator,
                value,
            } => resolve(record, field)
                .and_then(|v| compare_text(&v, value))
                .is_some_and(|ordering| operator.accepts(ordering)),
            Self::Like {
                field,
                pattern,
                case_insensitive,
            } => resolve(record, field).is_some_and(|v| like_match(&v, pattern, *case_insensitive)),
            Self::ArrayContains { field, value } => {
                array_values(record, field).is_some_and(|elements| elements.contains(value))
            }
            Self::ArrayNotContains { field, value } => {
                array_values(record, field).is_some_and(|elements| !elements.contains(value))
            }
            Self::ArrayContainsAny { field, values } => array_values(record, field)
                .is_some_and(|elements| elements.iter().any(|e| values.contains(e))),
            Self::ArrayNotContainsAny { field, values } => array_values(record, field)
                .is_some_and(|elements| !elements.iter().any(|e| values.contains(e))),
        }
    }
}

fn array_values<R: Record + ?Sized>(record: &R, field: &str) -> Option<Vec<String>> {
    let elements = resolve_many(record, field);
    tracing::trace!(field, ?elements, "array membership check");
    elements
}

/// Numeric-first ordering of two texts.
///
/// When both parse as `f64` they compare numerically (`None` if either is
/// NaN); otherwise they compare lexicographically.
fn compare_text(field: &str, value: &str) -> Option<Ordering> {
    match (field.parse::<f64>(), value.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b),
        _ => Some(field.cmp(value)),
    }
}
