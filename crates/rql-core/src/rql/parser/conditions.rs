//! Boolean structure and comparison parsing.

use super::Rule;
use crate::rql::ast::{CompareOp, Comparison, FilterExpr, Rhs};
use crate::rql::error::{ParseError, ParseErrorKind};
use crate::rql::Parser;

/// How the left operand of a comparison was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LhsKind {
    /// `Department.Name`
    Field,
    /// `ANY(Tags)`
    Any,
    /// `'Alice'`
    Literal,
}

impl Parser {
    pub(crate) fn parse_or_expr(pair: pest::iterators::Pair<Rule>) -> Result<FilterExpr, ParseError> {
        let mut inner = pair
            .into_inner()
            .filter(|p| p.as_rule() == Rule::and_expr);

        let first = inner
            .next()
            .ok_or_else(|| ParseError::syntax(0, "", "Expected condition"))?;

        let mut result = Self::parse_and_expr(first)?;

        for and_expr in inner {
            let right = Self::parse_and_expr(and_expr)?;
            result = FilterExpr::or(result, right);
        }

        Ok(result)
    }

    pub(crate) fn parse_and_expr(
        pair: pest::iterators::Pair<Rule>,
    ) -> Result<FilterExpr, ParseError> {
        let mut inner = pair.into_inner().filter(|p| p.as_rule() == Rule::term);

        let first = inner
            .next()
            .ok_or_else(|| ParseError::syntax(0, "", "Expected condition"))?;

        let mut result = Self::parse_term(first)?;

        for term in inner {
            let right = Self::parse_term(term)?;
            result = FilterExpr::and(result, right);
        }

        Ok(result)
    }

    pub(crate) fn parse_term(pair: pest::iterators::Pair<Rule>) -> Result<FilterExpr, ParseError> {
        let position = pair.as_span().start();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| ParseError::syntax(position, "", "Expected primary condition"))?;

        match inner.as_rule() {
            // Parentheses only shape the tree; no Group node survives.
            Rule::or_expr => Self::parse_or_expr(inner),
            Rule::comparison => Self::parse_comparison(inner),
            _ => Err(ParseError::syntax(
                inner.as_span().start(),
                inner.as_str(),
                "Expected comparison or parenthesized expression",
            )),
        }
    }

    pub(crate) fn parse_comparison(
        pair: pest::iterators::Pair<Rule>,
    ) -> Result<FilterExpr, ParseError> {
        let position = pair.as_span().start();
        let text = pair.as_str();
        let mut inner = pair.into_inner();

        let lhs = inner
            .next()
            .ok_or_else(|| ParseError::syntax(position, text, "Expected field name"))?;
        let (field, lhs_kind) = Self::parse_lhs(lhs)?;
        let field_is_any = lhs_kind == LhsKind::Any;

        let op_pair = inner
            .next()
            .ok_or_else(|| ParseError::syntax(position, text, "Expected operator"))?;
        let operator = Self::parse_compare_op(&op_pair)?;

        let rhs = Self::parse_rhs(
            inner
                .next()
                .ok_or_else(|| ParseError::syntax(position, text, "Expected value"))?,
        )?;

        if field_is_any && !operator.supports_any() {
            return Err(ParseError::unsupported_any(position, text, operator.as_str()));
        }
        if !field_is_any && matches!(rhs, Rhs::List(_)) {
            return Err(ParseError::new(
                ParseErrorKind::UnsupportedAnyOperator,
                position,
                text,
                "ANY(...) value list requires ANY(field) on the left",
            ));
        }

        Ok(FilterExpr::Comparison(Comparison {
            field,
            operator,
            rhs,
            field_is_any,
            field_is_literal: lhs_kind == LhsKind::Literal,
        }))
    }

    fn parse_lhs(pair: pest::iterators::Pair<Rule>) -> Result<(String, LhsKind), ParseError> {
        let position = pair.as_span().start();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| ParseError::syntax(position, "", "Expected field name"))?;

        match inner.as_rule() {
            Rule::identifier_path => Ok((Self::parse_identifier_path(inner), LhsKind::Field)),
            Rule::any_field => {
                let path = inner
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::identifier_path)
                    .ok_or_else(|| ParseError::syntax(position, "", "Expected field in ANY()"))?;
                Ok((Self::parse_identifier_path(path), LhsKind::Any))
            }
            Rule::string => Ok((Self::parse_literal_text(inner), LhsKind::Literal)),
            _ => Err(ParseError::syntax(
                inner.as_span().start(),
                inner.as_str(),
                "Expected field name",
            )),
        }
    }

    pub(crate) fn parse_identifier_path(pair: pest::iterators::Pair<Rule>) -> String {
        pair.into_inner()
            .filter(|p| p.as_rule() == Rule::identifier)
            .map(|p| super::extract_identifier(&p))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn parse_compare_op(pair: &pest::iterators::Pair<Rule>) -> Result<CompareOp, ParseError> {
        let position = pair.as_span().start();
        let inner = pair
            .clone()
            .into_inner()
            .next()
            .ok_or_else(|| ParseError::syntax(position, pair.as_str(), "Expected operator"))?;

        match inner.as_rule() {
            Rule::like_op => {
                let case_insensitive = inner
                    .into_inner()
                    .next()
                    .is_some_and(|kw| kw.as_rule() == Rule::ilike_kw);
                Ok(if case_insensitive {
                    CompareOp::ILike
                } else {
                    CompareOp::Like
                })
            }
            Rule::symbol_op => match inner.as_str() {
                "=" => Ok(CompareOp::Eq),
                "!=" | "<>" => Ok(CompareOp::Ne),
                "<" => Ok(CompareOp::Lt),
                "<=" => Ok(CompareOp::Le),
                ">" => Ok(CompareOp::Gt),
                ">=" => Ok(CompareOp::Ge),
                other => Err(ParseError::syntax(position, other, "Invalid operator")),
            },
            _ => Err(ParseError::syntax(position, inner.as_str(), "Invalid operator")),
        }
    }

    fn parse_rhs(pair: pest::iterators::Pair<Rule>) -> Result<Rhs, ParseError> {
        let position = pair.as_span().start();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| ParseError::syntax(position, "", "Expected value"))?;

        match inner.as_rule() {
            Rule::literal => Ok(Rhs::Scalar(Self::parse_literal(inner)?)),
            Rule::any_values => {
                let values: Result<Vec<_>, _> = inner
                    .into_inner()
                    .filter(|p| p.as_rule() == Rule::literal)
                    .map(Self::parse_literal)
                    .collect();
                Ok(Rhs::List(values?))
            }
            _ => Err(ParseError::syntax(
                inner.as_span().start(),
                inner.as_str(),
                "Expected value",
            )),
        }
    }
}
