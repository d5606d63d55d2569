//! Builder methods for creating Condition instances.

use super::{Condition, RangeOp};

impl Condition {
    /// Creates an equality condition.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equal {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a not-equal condition.
    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an ordering comparison.
    #[must_use]
    pub fn range(field: impl Into<String>, operator: RangeOp, value: impl Into<String>) -> Self {
        Self::Comparison {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates a greater-than condition.
    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::range(field, RangeOp::Gt, value)
    }

    /// Creates a greater-than-or-equal condition.
    #[must_use]
    pub fn ge(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::range(field, RangeOp::Ge, value)
    }

    /// Creates a less-than condition.
    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::range(field, RangeOp::Lt, value)
    }

    /// Creates a less-than-or-equal condition.
    #[must_use]
    pub fn le(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::range(field, RangeOp::Le, value)
    }

    /// Creates a LIKE condition (case-sensitive).
    #[must_use]
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Like {
            field: field.into(),
            pattern: pattern.into(),
            case_insensitive: false,
        }
    }

    /// Creates an ILIKE condition (case-insensitive).
    #[must_use]
    pub fn ilike(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Like {
            field: field.into(),
            pattern: pattern.into(),
            case_insensitive: true,
        }
    }

    /// Creates an AND of two conditions.
    #[must_use]
    pub fn and(left: Condition, right: Condition) -> Self {
        Self::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates an OR of two conditions.
    #[must_use]
    pub fn or(left: Condition, right: Condition) -> Self {
        Self::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates an `ANY(field) = value` condition.
    #[must_use]
    pub fn array_contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ArrayContains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an `ANY(field) != value` condition.
    #[must_use]
    pub fn array_not_contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ArrayNotContains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an `ANY(field) = ANY(values)` condition.
    #[must_use]
    pub fn array_contains_any<S: Into<String>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ArrayContainsAny {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an `ANY(field) != ANY(values)` condition.
    #[must_use]
    pub fn array_not_contains_any<S: Into<String>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ArrayNotContainsAny {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
