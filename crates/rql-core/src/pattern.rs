//! SQL `LIKE`/`ILIKE` pattern matching.
//!
//! - `%` matches zero or more characters
//! - `_` matches exactly one character
//!
//! There is no escape character: `%` and `_` are always wildcards.

use std::borrow::Cow;

use regex::Regex;

/// Matches `text` against a SQL LIKE `pattern`.
///
/// Simple shapes (`%`, `lit`, `lit%`, `%lit`, `%lit%`) are answered with
/// plain string operations; everything else is compiled to an anchored
/// regular expression. With `case_insensitive` both sides are lower-cased
/// first (ILIKE).
///
/// Never fails: if the derived expression does not compile, the pattern
/// with its wildcards stripped is used as a substring test.
#[must_use]
pub fn like_match(text: &str, pattern: &str, case_insensitive: bool) -> bool {
    let (text, pattern): (Cow<'_, str>, Cow<'_, str>) = if case_insensitive {
        (text.to_lowercase().into(), pattern.to_lowercase().into())
    } else {
        (text.into(), pattern.into())
    };

    if let Some(result) = match_simple(&text, &pattern) {
        return result;
    }

    match like_to_regex(&pattern) {
        Ok(re) => re.is_match(&text),
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "LIKE pattern fell back to substring match");
            text.contains(pattern.replace(['%', '_'], "").as_str())
        }
    }
}

fn is_wildcard(c: char) -> bool {
    c == '%' || c == '_'
}

/// Answers the pattern shapes that need no regex, or `None`.
fn match_simple(text: &str, pattern: &str) -> Option<bool> {
    if !pattern.is_empty() && pattern.chars().all(|c| c == '%') {
        return Some(true);
    }
    if !pattern.contains(is_wildcard) {
        return Some(text == pattern);
    }

    match (pattern.strip_prefix('%'), pattern.strip_suffix('%')) {
        (Some(_), Some(_)) if pattern.len() >= 2 => {
            let lit = &pattern[1..pattern.len() - 1];
            (!lit.contains(is_wildcard)).then(|| text.contains(lit))
        }
        (None, Some(prefix)) => (!prefix.contains(is_wildcard)).then(|| text.starts_with(prefix)),
        (Some(suffix), None) => (!suffix.contains(is_wildcard)).then(|| text.ends_with(suffix)),
        _ => None,
    }
}

/// Compiles a LIKE pattern to an anchored regex. Literal runs are escaped,
/// then `%` becomes `.*` and `_` becomes `.`.
fn like_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push_str("(?s)^");

    let mut literal = String::new();
    for c in pattern.chars() {
        if is_wildcard(c) {
            expr.push_str(&regex::escape(&literal));
            literal.clear();
            expr.push_str(if c == '%' { ".*" } else { "." });
        } else {
            literal.push(c);
        }
    }
    expr.push_str(&regex::escape(&literal));
    expr.push('$');

    Regex::new(&expr)
}

#[cfg(test)]
pub(crate) fn regex_for(pattern: &str) -> Option<String> {
    like_to_regex(pattern).ok().map(|re| re.as_str().to_string())
}
