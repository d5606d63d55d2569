//! Literal parsing.

use super::Rule;
use crate::rql::ast::Literal;
use crate::rql::error::ParseError;
use crate::rql::Parser;

impl Parser {
    pub(crate) fn parse_literal(pair: pest::iterators::Pair<Rule>) -> Result<Literal, ParseError> {
        let position = pair.as_span().start();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| ParseError::syntax(position, "", "Expected value"))?;

        match inner.as_rule() {
            Rule::string => Ok(Literal::Quoted(Self::parse_literal_text(inner))),
            Rule::bare_literal => Ok(Literal::Bare(inner.as_str().to_string())),
            _ => Err(ParseError::syntax(
                inner.as_span().start(),
                inner.as_str(),
                "Unknown value type",
            )),
        }
    }

    /// Unescapes a `string` pair: `'it''s'` -> `it's`.
    pub(crate) fn parse_literal_text(pair: pest::iterators::Pair<Rule>) -> String {
        let raw = pair.into_inner().next().map_or("", |p| p.as_str());
        raw.replace("''", "'")
    }
}
