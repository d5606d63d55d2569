//! Evaluable filter conditions.
//!
//! A [`Condition`] tree is the lowered form of a parsed
//! [`FilterExpr`](crate::rql::FilterExpr). It is built once per filter and is
//! read-only during evaluation, so one tree can be shared across threads and
//! evaluated against many records.
//!
//! ## Usage
//!
//! ```rust
//! use rql_core::filter::{Condition, Filter};
//! use serde_json::json;
//!
//! // Built by hand
//! let filter = Filter::new(Condition::and(
//!     Condition::eq("Department.Name", "Engineering"),
//!     Condition::ge("Age", "30"),
//! ));
//! assert!(filter.matches(&json!({"Age": 31, "Department": {"Name": "Engineering"}})));
//!
//! // Or parsed from filter text
//! let filter = Filter::parse("ANY(Tags) = 'react' OR Age < 30").unwrap();
//! assert!(filter.matches(&json!({"Age": 25, "Tags": []})));
//! ```
//!
//! ## Comparison semantics
//!
//! Field values are resolved to canonical text (see [`crate::record`]) and
//! every condition compares text:
//!
//! - `Equal`/`NotEqual` and the array conditions use exact string equality.
//! - `Comparison` (`<`, `<=`, `>`, `>=`) is numeric-first: when both the
//!   field text and the literal parse as `f64` they are compared as numbers,
//!   otherwise lexicographically. `Age >= 40` therefore works whether `Age`
//!   is stored as a number or as text.
//! - A field that does not resolve makes every leaf `false`, including the
//!   negative ones (`NotEqual`, `ArrayNotContains`, ...).

mod builders;
mod conversion;
mod matching;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pager::{paginate, FilterOptions, FilterResult};
use crate::record::Record;
use crate::rql::{FilterExpr, Parser};

/// A compiled filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// The root condition of the filter.
    pub condition: Condition,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(Condition::AlwaysTrue)
    }
}

impl Filter {
    /// Creates a new filter with the given condition.
    #[must_use]
    pub fn new(condition: Condition) -> Self {
        Self { condition }
    }

    /// Parses and compiles filter text.
    ///
    /// Empty (or whitespace-only) text matches every record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Syntax`] if the text is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let expr = Parser::parse(text)?;
        Ok(Self::new(Condition::from(expr)))
    }

    /// Returns the root condition.
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Evaluates the filter against one record.
    #[must_use]
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.condition.matches(record)
    }

    /// Keeps the matching items in their original order, then applies the
    /// pagination window. `count` is the number of matches before paging.
    pub fn apply<T, I>(&self, items: I, options: &FilterOptions) -> FilterResult<T>
    where
        T: Record,
        I: IntoIterator<Item = T>,
    {
        let matched: Vec<T> = items.into_iter().filter(|item| self.matches(item)).collect();
        let count = matched.len();
        let items = paginate(matched, options);

        tracing::debug!(
            matched = count,
            returned = items.len(),
            limit = options.limit,
            offset = options.offset,
            "filter applied"
        );

        FilterResult { items, count }
    }
}

/// Evaluates an optional root condition; `None` matches everything.
#[must_use]
pub fn evaluate<R: Record + ?Sized>(condition: Option<&Condition>, record: &R) -> bool {
    condition.is_none_or(|c| c.matches(record))
}

/// Lowers a parsed expression into a condition tree.
#[must_use]
pub fn compile(expr: FilterExpr) -> Condition {
    Condition::from(expr)
}

/// Ordering operators of [`Condition::Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOp {
    /// field < value
    Lt,
    /// field <= value
    Le,
    /// field > value
    Gt,
    /// field >= value
    Ge,
}

/// A condition evaluated against a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Logical AND of two conditions
    And {
        /// Left operand
        left: Box<Condition>,
        /// Right operand
        right: Box<Condition>,
    },
    /// Logical OR of two conditions
    Or {
        /// Left operand
        left: Box<Condition>,
        /// Right operand
        right: Box<Condition>,
    },
    /// Matches every record.
    AlwaysTrue,
    /// Matches no record, e.g. `'Alice' = Name`.
    AlwaysFalse,
    /// field == value
    Equal {
        /// Field path (dot notation for nested fields)
        field: String,
        /// Value to compare against
        value: String,
    },
    /// field != value
    NotEqual {
        /// Field path
        field: String,
        /// Value to compare against
        value: String,
    },
    /// Ordering comparison, numeric when both sides parse as numbers.
    Comparison {
        /// Field path
        field: String,
        /// Ordering operator
        operator: RangeOp,
        /// Value to compare against
        value: String,
    },
    /// SQL LIKE / ILIKE.
    Like {
        /// Field path
        field: String,
        /// Pattern with `%` and `_` wildcards
        pattern: String,
        /// True for ILIKE
        #[serde(default)]
        case_insensitive: bool,
    },
    /// `ANY(field) = value`: some element equals `value`.
    ArrayContains {
        /// Path of the array field
        field: String,
        /// Element to look for
        value: String,
    },
    /// `ANY(field) != value`: no element equals `value`.
    ArrayNotContains {
        /// Path of the array field
        field: String,
        /// Element to look for
        value: String,
    },
    /// `ANY(field) = ANY(values)`: some element equals one of `values`.
    ArrayContainsAny {
        /// Path of the array field
        field: String,
        /// Candidate elements
        values: Vec<String>,
    },
    /// `ANY(field) != ANY(values)`: no element equals any of `values`.
    ArrayNotContainsAny {
        /// Path of the array field
        field: String,
        /// Candidate elements
        values: Vec<String>,
    },
}

impl Condition {
    /// Number of leaf conditions in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::And { left, right } | Self::Or { left, right } => {
                left.leaf_count() + right.leaf_count()
            }
            _ => 1,
        }
    }
}
