//! RQL - SQL `WHERE`-style filter language.
//!
//! RQL accepts the boolean expression part of a SQL `WHERE` clause:
//! comparisons, `AND`/`OR` with parentheses, `LIKE`/`ILIKE`, and the
//! `ANY(...)` set-membership extension.
//!
//! # Example
//!
//! ```
//! use rql_core::rql::{FilterExpr, Parser};
//!
//! let expr = Parser::parse("ANY(Tags) = ANY('python', 'content') OR Age >= 40").unwrap();
//! assert!(matches!(expr, FilterExpr::Or(_, _)));
//! assert_eq!(expr.leaf_count(), 2);
//! ```

mod ast;
mod decode;
mod error;
mod parser;

pub use ast::*;
pub use decode::decode_filter;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{Parser, MAX_NESTING_DEPTH};
