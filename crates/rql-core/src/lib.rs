//! # RQL Core
//!
//! Filter expression engine for in-memory collections.
//!
//! A caller writes a filter as the boolean expression of a SQL `WHERE`
//! clause and applies it to any collection of records. The result is the
//! matching subset, paginated, plus the number of matches before
//! pagination.
//!
//! ## Features
//!
//! - **SQL-style comparisons**: `=`, `!=`/`<>`, `<`, `<=`, `>`, `>=`
//! - **Pattern matching**: `LIKE` and case-insensitive `ILIKE` with `%`/`_`
//! - **Boolean structure**: `AND`, `OR` and parentheses
//! - **Set membership**: `ANY(Tags) = 'x'`, `ANY(Tags) = ANY('x', 'y')`
//! - **Nested fields**: dot paths (`Department.Name`), case-insensitive
//!
//! ## Quick Start
//!
//! ```rust
//! use rql_core::{apply_filter, impl_record, FilterOptions};
//!
//! struct Department {
//!     name: String,
//! }
//!
//! struct Employee {
//!     id: u32,
//!     age: u32,
//!     department: Department,
//!     tags: Vec<String>,
//! }
//!
//! impl_record!(Department { name });
//! impl_record!(Employee { id, age, department, tags });
//!
//! let staff = vec![
//!     Employee { id: 1, age: 25, department: Department { name: "Engineering".into() }, tags: vec!["react".into()] },
//!     Employee { id: 2, age: 45, department: Department { name: "HR".into() }, tags: vec![] },
//! ];
//!
//! let result = apply_filter(
//!     "Age < 30 AND Department.Name = 'Engineering'",
//!     &staff,
//!     FilterOptions::default(),
//! )?;
//! assert_eq!(result.count, 1);
//! assert_eq!(result.items[0].id, 1);
//! # Ok::<(), rql_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod engine;
#[cfg(test)]
mod engine_tests;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod pager;
pub mod pattern;
pub mod record;
pub mod rql;

pub use config::{ConfigError, PaginationConfig, ParserConfig, RqlConfig};
pub use engine::{apply_filter, FilterEngine};
pub use error::{Error, Result};
pub use filter::{Condition, Filter, RangeOp};
pub use pager::{FilterOptions, FilterResult};
pub use record::{FieldValue, Record, ToFieldValue};
