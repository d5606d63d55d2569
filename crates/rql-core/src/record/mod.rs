//! Record access by runtime field path.
//!
//! Filters name fields by dot path (`Department.Name`) without knowing the
//! record type at compile time. A type opts in by implementing [`Record`],
//! either by hand or through [`impl_record!`](crate::impl_record):
//!
//! ```rust
//! use rql_core::impl_record;
//! use rql_core::record::resolve;
//!
//! struct Department {
//!     name: String,
//! }
//!
//! struct Employee {
//!     age: u32,
//!     department: Option<Department>,
//!     tags: Vec<String>,
//! }
//!
//! impl_record!(Department { name });
//! impl_record!(Employee { age, department, tags });
//!
//! let e = Employee {
//!     age: 25,
//!     department: Some(Department { name: "Engineering".into() }),
//!     tags: vec!["frontend".into()],
//! };
//! assert_eq!(resolve(&e, "Department.Name").as_deref(), Some("Engineering"));
//! ```
//!
//! `serde_json::Value` objects are records out of the box.

mod json;
mod resolve;
mod value;

pub use resolve::{resolve, resolve_many};
pub use value::{FieldValue, ToFieldValue};

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// A struct-like value whose members can be looked up by name.
///
/// Lookups are case-sensitive here; the resolver falls back to a
/// case-insensitive match over [`Record::field_names`].
pub trait Record {
    /// Returns the member called `name`, or `None` if there is none.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Names of every member, in declaration order.
    fn field_names(&self) -> Vec<&str>;

    /// Generic textual form, used when a record appears where text is
    /// expected (e.g. as an element of an array field).
    fn to_text(&self) -> String {
        let values: Vec<String> = self
            .field_names()
            .into_iter()
            .filter_map(|name| self.field(name))
            .map(|value| value.to_text())
            .collect();
        format!("{{{}}}", values.join(" "))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }

    fn field_names(&self) -> Vec<&str> {
        (**self).field_names()
    }

    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

macro_rules! forward_record {
    ($($wrapper:ident),*) => {
        $(
            impl<R: Record + ?Sized> Record for $wrapper<R> {
                fn field(&self, name: &str) -> Option<FieldValue<'_>> {
                    (**self).field(name)
                }

                fn field_names(&self) -> Vec<&str> {
                    (**self).field_names()
                }

                fn to_text(&self) -> String {
                    (**self).to_text()
                }
            }
        )*
    };
}

forward_record!(Box, Rc, Arc);

impl<V: ToFieldValue> Record for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl<V: ToFieldValue> Record for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// Implements [`Record`] and [`ToFieldValue`] for a struct.
///
/// Fields are exposed under their Rust names; filter text may use any
/// casing (`Age` finds `age`). Every listed field's type must implement
/// [`ToFieldValue`]. Nested structs need their own `impl_record!`.
///
/// ```rust
/// use rql_core::impl_record;
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl_record!(Point { x, y });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $ty {
            fn field(&self, name: &str) -> ::std::option::Option<$crate::record::FieldValue<'_>> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(
                            $crate::record::ToFieldValue::to_field_value(&self.$field),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$(stringify!($field)),*]
            }
        }

        impl $crate::record::ToFieldValue for $ty {
            fn to_field_value(&self) -> $crate::record::FieldValue<'_> {
                $crate::record::FieldValue::Record(self)
            }
        }
    };
}
