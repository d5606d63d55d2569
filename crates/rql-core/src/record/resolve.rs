//! Dot-path field resolution.

use super::{FieldValue, Record};

/// Resolves a scalar field to its canonical text.
///
/// Returns `None` when any segment is missing, an intermediate value is
/// null or not a record, or the leaf is null.
#[must_use]
pub fn resolve<R: Record + ?Sized>(record: &R, path: &str) -> Option<String> {
    match resolve_value(record, path)? {
        FieldValue::Null => None,
        value => Some(value.to_text()),
    }
}

/// Resolves a sequence field to the canonical text of each element.
///
/// Returns `None` under the same conditions as [`resolve`], and also when
/// the leaf is not a sequence.
#[must_use]
pub fn resolve_many<R: Record + ?Sized>(record: &R, path: &str) -> Option<Vec<String>> {
    match resolve_value(record, path)? {
        FieldValue::List(items) => Some(items.iter().map(FieldValue::to_text).collect()),
        _ => None,
    }
}

fn resolve_value<'a, R: Record + ?Sized>(record: &'a R, path: &str) -> Option<FieldValue<'a>> {
    match path.split_once('.') {
        None => lookup(record, path),
        Some((head, rest)) => match lookup(record, head)? {
            FieldValue::Record(inner) => resolve_value(inner, rest),
            _ => None,
        },
    }
}

/// Exact member lookup, then a case-insensitive scan of the member names.
fn lookup<'a, R: Record + ?Sized>(record: &'a R, name: &str) -> Option<FieldValue<'a>> {
    if let Some(value) = record.field(name) {
        return Some(value);
    }
    let wanted = name.to_lowercase();
    let actual = record
        .field_names()
        .into_iter()
        .find(|candidate| candidate.to_lowercase() == wanted)?;
    record.field(actual)
}
