//! Percent-decoding of filter text carried in URL query strings.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Percent-decodes raw filter text.
///
/// Text without `%` escapes is returned unchanged (borrowed), so decoding an
/// already-decoded filter is a no-op. Malformed escapes such as `%zz` are
/// passed through verbatim; only escapes that decode to invalid UTF-8 fail.
///
/// Note that LIKE patterns use `%` as a wildcard: `'%ab%'` contains the
/// escape `%ab`. Only decode text that was actually percent-encoded.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the decoded bytes are not valid UTF-8.
pub fn decode_filter(raw: &str) -> Result<Cow<'_, str>> {
    if !raw.contains('%') {
        return Ok(Cow::Borrowed(raw));
    }
    urlencoding::decode(raw).map_err(|e| Error::Decode(e.to_string()))
}
