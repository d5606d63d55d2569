//! Abstract syntax tree for RQL filter expressions.
//!
//! The parser produces a [`FilterExpr`]; [`crate::filter::Condition`] is the
//! evaluable form it gets lowered into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed filter expression.
///
/// Leaves are always [`Comparison`]s; `And`/`Or` are strictly binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterExpr {
    /// `field op value`, optionally with `ANY(...)` on either side.
    Comparison(Comparison),
    /// Logical AND
    And(Box<FilterExpr>, Box<FilterExpr>),
    /// Logical OR
    Or(Box<FilterExpr>, Box<FilterExpr>),
}

impl FilterExpr {
    /// Combines two expressions with AND.
    #[must_use]
    pub fn and(left: FilterExpr, right: FilterExpr) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Combines two expressions with OR.
    #[must_use]
    pub fn or(left: FilterExpr, right: FilterExpr) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Number of comparison leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Comparison(_) => 1,
            Self::And(left, right) | Self::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }
}

/// A single comparison between a field path and a literal (or literal list).
///
/// The left operand may also be a quoted string, e.g. `'Alice' = Name`. Such
/// a comparison names no field and never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Dot-separated field path, e.g. `Department.Name`.
    pub field: String,
    /// Comparison operator.
    pub operator: CompareOp,
    /// Right-hand side.
    pub rhs: Rhs,
    /// True when the field was written as `ANY(field)`.
    #[serde(default)]
    pub field_is_any: bool,
    /// True when the left operand was written as a quoted string.
    #[serde(default)]
    pub field_is_literal: bool,
}

impl Comparison {
    /// Creates a plain comparison with a scalar right-hand side.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: CompareOp, value: Literal) -> Self {
        Self {
            field: field.into(),
            operator,
            rhs: Rhs::Scalar(value),
            field_is_any: false,
            field_is_literal: false,
        }
    }

    /// True when the right-hand side was written as `ANY(v1, v2, ...)`.
    #[must_use]
    pub fn rhs_is_any(&self) -> bool {
        matches!(self.rhs, Rhs::List(_))
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (!= or <>)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// SQL LIKE, case-sensitive
    Like,
    /// SQL ILIKE, case-insensitive
    ILike,
}

impl CompareOp {
    /// Returns the operator as written in filter text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
        }
    }

    /// True for the operators `ANY(field)` may be combined with.
    #[must_use]
    pub const fn supports_any(&self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rhs {
    /// A single literal.
    Scalar(Literal),
    /// `ANY('x', 'y', ...)`
    List(Vec<Literal>),
}

/// A literal value.
///
/// Quoted strings and bare words are kept apart so the expression can be
/// printed back faithfully; evaluation only ever sees [`Literal::text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Single-quoted string, unescaped.
    Quoted(String),
    /// Unquoted literal: number, `true`/`false`, or a bare word.
    Bare(String),
}

impl Literal {
    /// The literal's text as used for comparison.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Quoted(s) | Self::Bare(s) => s,
        }
    }

    /// Consumes the literal, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Quoted(s) | Self::Bare(s) => s,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quoted(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Bare(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(lit) => write!(f, "{lit}"),
            Self::List(values) => {
                f.write_str("ANY(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_is_any {
            write!(f, "ANY({})", self.field)?;
        } else if self.field_is_literal {
            write!(f, "{}", Literal::Quoted(self.field.clone()))?;
        } else {
            f.write_str(&self.field)?;
        }
        write!(f, " {} {}", self.operator.as_str(), self.rhs)
    }
}

/// Prints the expression back as filter text, fully parenthesized.
impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(cmp) => write!(f, "{cmp}"),
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}
