//! Lowering of parsed RQL expressions into conditions.

use super::{Condition, RangeOp};
use crate::rql::{CompareOp, Comparison, FilterExpr, Rhs};

impl From<FilterExpr> for Condition {
    fn from(expr: FilterExpr) -> Self {
        match expr {
            FilterExpr::And(left, right) => Self::and(Self::from(*left), Self::from(*right)),
            FilterExpr::Or(left, right) => Self::or(Self::from(*left), Self::from(*right)),
            FilterExpr::Comparison(cmp) => Self::from(cmp),
        }
    }
}

impl From<Comparison> for Condition {
    fn from(cmp: Comparison) -> Self {
        let Comparison {
            field,
            operator,
            rhs,
            field_is_any,
            field_is_literal,
        } = cmp;

        if field_is_literal {
            return Self::AlwaysFalse;
        }

        // `true = true` style comparisons never test a real field.
        if field.eq_ignore_ascii_case("true") || field.eq_ignore_ascii_case("false") {
            return Self::AlwaysTrue;
        }

        if field_is_any && operator.supports_any() {
            let negated = operator == CompareOp::Ne;
            return match rhs {
                Rhs::List(values) => {
                    let values = values.into_iter().map(|v| v.into_text()).collect();
                    if negated {
                        Self::ArrayNotContainsAny { field, values }
                    } else {
                        Self::ArrayContainsAny { field, values }
                    }
                }
                Rhs::Scalar(value) => {
                    let value = value.into_text();
                    if negated {
                        Self::ArrayNotContains { field, value }
                    } else {
                        Self::ArrayContains { field, value }
                    }
                }
            };
        }

        // A value list only has meaning against ANY(field); elsewhere it
        // compares as the empty string.
        let value = match rhs {
            Rhs::Scalar(value) => value.into_text(),
            Rhs::List(_) => String::new(),
        };

        match operator {
            CompareOp::Eq => Self::Equal { field, value },
            CompareOp::Ne => Self::NotEqual { field, value },
            CompareOp::Lt => Self::range(field, RangeOp::Lt, value),
            CompareOp::Le => Self::range(field, RangeOp::Le, value),
            CompareOp::Gt => Self::range(field, RangeOp::Gt, value),
            CompareOp::Ge => Self::range(field, RangeOp::Ge, value),
            CompareOp::Like => Self::like(field, value),
            CompareOp::ILike => Self::ilike(field, value),
        }
    }
}
