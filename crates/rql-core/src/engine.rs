//! Top-level filter application.
//!
//! [`apply_filter`] is the plain operation: text in, matching items and
//! match count out. [`FilterEngine`] wraps it with the policy from an
//! [`RqlConfig`] (percent-decoding, length limit, default and maximum page
//! size).

use crate::config::RqlConfig;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::pager::{FilterOptions, FilterResult};
use crate::record::Record;
use crate::rql::{decode_filter, ParseError};

/// Filters `items` with `filter_text` and applies the pagination window.
///
/// Empty filter text matches everything. Matching items keep their input
/// order; `count` is the number of matches before pagination.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the text is non-empty and malformed. No
/// partial result is produced.
///
/// # Example
///
/// ```rust
/// use rql_core::{apply_filter, FilterOptions};
/// use serde_json::json;
///
/// let people = vec![
///     json!({"Name": "Alice", "Age": 25}),
///     json!({"Name": "Bob", "Age": 41}),
/// ];
/// let result = apply_filter("Age >= 40", people, FilterOptions::default()).unwrap();
/// assert_eq!(result.count, 1);
/// assert_eq!(result.items[0]["Name"], "Bob");
/// ```
pub fn apply_filter<T, I>(
    filter_text: &str,
    items: I,
    options: FilterOptions,
) -> Result<FilterResult<T>>
where
    T: Record,
    I: IntoIterator<Item = T>,
{
    let filter = Filter::parse(filter_text).inspect_err(|e| {
        tracing::debug!(filter = filter_text, error = %e, "filter rejected");
    })?;
    tracing::debug!(filter = filter_text, "applying filter");
    Ok(filter.apply(items, &options))
}

/// Applies filters under a configured policy.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: RqlConfig,
}

impl FilterEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: RqlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an engine from `rql.toml` and `RQL_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if loading or validation fails.
    pub fn from_env() -> Result<Self> {
        Self::new(RqlConfig::load()?)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &RqlConfig {
        &self.config
    }

    /// Decodes (if configured) and compiles filter text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if decoding fails, or [`Error::Syntax`] if
    /// the text is too long or malformed.
    pub fn compile(&self, filter_text: &str) -> Result<Filter> {
        let text = if self.config.parser.decode_percent_escapes {
            decode_filter(filter_text)?
        } else {
            filter_text.into()
        };

        let max = self.config.parser.max_filter_length;
        if max > 0 && text.len() > max {
            return Err(Error::Syntax(ParseError::too_long(text.len(), max)));
        }

        Filter::parse(&text)
    }

    /// Filters `items` with `filter_text`.
    ///
    /// With `options` set to `None` the configured default limit applies;
    /// any limit is clamped to the configured maximum.
    ///
    /// # Errors
    ///
    /// See [`FilterEngine::compile`].
    pub fn apply<T, I>(
        &self,
        filter_text: &str,
        items: I,
        options: Option<FilterOptions>,
    ) -> Result<FilterResult<T>>
    where
        T: Record,
        I: IntoIterator<Item = T>,
    {
        let filter = self.compile(filter_text).inspect_err(|e| {
            tracing::debug!(filter = filter_text, error = %e, "filter rejected");
        })?;

        let pagination = &self.config.pagination;
        let mut options =
            options.unwrap_or_else(|| FilterOptions::default().with_limit(pagination.default_limit));
        options.limit = pagination.effective_limit(options.limit);

        tracing::debug!(filter = filter_text, limit = options.limit, "applying filter");
        Ok(filter.apply(items, &options))
    }
}
