//! RQL parser implementation using pest.

mod conditions;
mod values;

use pest::iterators::Pair;
use pest::Parser as PestParser;
use pest_derive::Parser;

use super::ast::FilterExpr;
use super::error::{ParseError, ParseErrorKind};

#[derive(Parser)]
#[grammar = "rql/grammar.pest"]
pub(crate) struct RqlParser;

/// Extracts the identifier string from either identifier form.
/// Handles: regular_identifier, doublequote_identifier
pub(crate) fn extract_identifier(pair: &Pair<'_, Rule>) -> String {
    match pair.as_rule() {
        Rule::identifier => {
            // identifier = { doublequote_identifier | regular_identifier }
            if let Some(inner) = pair.clone().into_inner().next() {
                extract_identifier(&inner)
            } else {
                pair.as_str().to_string()
            }
        }
        Rule::doublequote_identifier => {
            // "col""name" -> col"name
            let s = pair.as_str();
            let inner = &s[1..s.len() - 1];
            inner.replace("\"\"", "\"")
        }
        _ => pair.as_str().to_string(),
    }
}

/// Deepest parenthesis nesting [`Parser::parse`] accepts.
///
/// `ANY(...)` counts as one level.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Rejects input whose parentheses nest beyond [`MAX_NESTING_DEPTH`].
///
/// Runs before the grammar: the generated parser recurses once per level
/// and would exhaust the stack long before reporting an error. Parentheses
/// inside `'...'` strings and `"..."` identifiers do not count.
fn check_nesting(input: &str) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (position, c) in input.char_indices() {
        match (quote, c) {
            // A doubled quote closes and reopens, which leaves the state as is.
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::nesting_too_deep(
                        position,
                        input.chars().take(50).collect::<String>(),
                        MAX_NESTING_DEPTH,
                    ));
                }
            }
            (None, ')') => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

/// RQL filter parser.
pub struct Parser;

impl Parser {
    /// Parses filter text into a [`FilterExpr`].
    ///
    /// Empty text is not part of the grammar; callers that accept it (see
    /// [`crate::filter::Filter::parse`]) handle it before calling this.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is not a well-formed filter, or
    /// `NestingTooDeep` if parentheses nest beyond [`MAX_NESTING_DEPTH`].
    ///
    /// # Example
    ///
    /// ```
    /// use rql_core::rql::{FilterExpr, Parser};
    ///
    /// let expr = Parser::parse("Age >= 25 AND Department.Name = 'Engineering'").unwrap();
    /// assert!(matches!(expr, FilterExpr::And(_, _)));
    /// ```
    pub fn parse(input: &str) -> Result<FilterExpr, ParseError> {
        check_nesting(input)?;

        let pairs = RqlParser::parse(Rule::filter, input).map_err(|e| {
            let position = match e.location {
                pest::error::InputLocation::Pos(p) => p,
                pest::error::InputLocation::Span((s, _)) => s,
            };
            ParseError::new(
                ParseErrorKind::SyntaxError,
                position,
                input.chars().take(50).collect::<String>(),
                e.to_string(),
            )
        })?;

        let filter_pair = pairs
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::syntax(0, input, "Empty filter"))?;

        let or_expr = filter_pair
            .into_inner()
            .find(|p| p.as_rule() == Rule::or_expr)
            .ok_or_else(|| ParseError::syntax(0, input, "Expected condition"))?;

        Self::parse_or_expr(or_expr)
    }
}
