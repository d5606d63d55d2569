//! Typed field values and their canonical text.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::Record;

/// A member value as seen by the resolver.
///
/// Conditions compare text; the variants only exist so every type is
/// formatted canonically (see [`FieldValue::to_text`]).
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// Absent value (`None`, JSON `null`).
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Str(Cow<'a, str>),
    /// Nested struct-like value.
    Record(&'a dyn Record),
    /// Ordered sequence.
    List(Vec<FieldValue<'a>>),
}

impl FieldValue<'_> {
    /// Canonical text form.
    ///
    /// Integers in decimal, floats in shortest round-trip form (`25`, not
    /// `25.0`), booleans as `true`/`false`, lists as `[a b c]`, records via
    /// [`Record::to_text`].
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::UInt(u) => u.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Str(s) => s.to_string(),
            Self::Record(r) => r.to_text(),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(FieldValue::to_text).collect();
                format!("[{}]", parts.join(" "))
            }
        }
    }

    /// True for [`FieldValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Record(r) => f.debug_tuple("Record").field(&r.to_text()).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

/// Conversion of a struct member into a [`FieldValue`].
pub trait ToFieldValue {
    /// Borrows `self` as a field value.
    fn to_field_value(&self) -> FieldValue<'_>;
}

macro_rules! int_field_value {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl ToFieldValue for $t {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

int_field_value!(Int as i64: i8, i16, i32, i64);
int_field_value!(UInt as u64: u8, u16, u32, u64);

impl ToFieldValue for isize {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::UInt(*self as u64)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        // Widening to f64 would print 0.1f32 as 0.10000000149011612.
        FieldValue::Str(Cow::Owned(self.to_string()))
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Owned(self.to_string()))
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self))
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToFieldValue for Cow<'_, str> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_ref().map_or(FieldValue::Null, ToFieldValue::to_field_value)
    }
}

impl<T: ToFieldValue> ToFieldValue for [T] {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue, const N: usize> ToFieldValue for [T; N] {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_slice().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_slice().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for VecDeque<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

macro_rules! forward_field_value {
    ($($wrapper:ident),*) => {
        $(
            impl<T: ToFieldValue + ?Sized> ToFieldValue for $wrapper<T> {
                fn to_field_value(&self) -> FieldValue<'_> {
                    (**self).to_field_value()
                }
            }
        )*
    };
}

forward_field_value!(Box, Rc, Arc);
