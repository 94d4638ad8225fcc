// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Precedence-climbing parser for filter strings.
//!
//! Precedence from loosest to tightest is `OR`, then conjunction (`AND` or
//! juxtaposition), then prefix `NOT`. A term directly followed by anything
//! that can start another term is an implicit conjunction, so
//! `label:bug -is:pr` reads as `label:bug AND NOT is:pr`.

use chrono::NaiveDate;
use tracing::debug;

use super::expr::FilterExpr;
use super::lexer::{lex, Token, TokenType};
use super::qualifier::{Qualifier, QualifierContent, QualifierType, SortKey};
use super::range::{DateRange, NumberRange, Range};
use crate::error::{Error, Result};

const DISJUNCTION: u8 = 1;
const CONJUNCTION: u8 = 2;
const PREFIX: u8 = 3;

/// Binding power of a token in infix position; 0 ends the expression.
fn infix_precedence(kind: TokenType) -> u8 {
    match kind {
        TokenType::Or => DISJUNCTION,
        TokenType::And
        | TokenType::Qualifier
        | TokenType::Symbol
        | TokenType::LBracket
        | TokenType::Quote => CONJUNCTION,
        TokenType::Not => PREFIX,
        _ => 0,
    }
}

/// Outcome of a syntax check on possibly unfinished input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Valid,
    /// The input stopped where more was expected, e.g. `label:`.
    Incomplete,
    Invalid,
}

/// Parses a filter string.
///
/// Blank input yields [`FilterExpr::EMPTY`] without lexing.
pub fn parse(input: &str) -> Result<FilterExpr> {
    if input.trim().is_empty() {
        return Ok(FilterExpr::EMPTY);
    }

    let mut parser = Parser::new(lex(input)?);
    let expr = parser.parse_expression(0)?;

    let rest = parser.peek();
    if rest.kind != TokenType::Eof {
        return Err(Error::Parse {
            message: format!("Unexpected {rest} after end of filter"),
            offset: rest.offset,
        });
    }

    debug!(input, filter = %expr, "parsed filter");
    Ok(expr)
}

/// Classifies `input` without building a tree for the caller.
pub fn check(input: &str) -> CheckResult {
    match parse(input) {
        Ok(_) => CheckResult::Valid,
        Err(err) if is_incomplete(&err, input) => CheckResult::Incomplete,
        Err(_) => CheckResult::Invalid,
    }
}

/// True if `err` was raised because `input` ended too early.
pub fn is_incomplete(err: &Error, input: &str) -> bool {
    err.is_parse_error()
        && !matches!(err, Error::UnrecognisedToken { .. })
        && err.offset().is_some_and(|o| o >= input.trim_end().len())
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenType::Eof {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenType) -> Result<Token> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Error::Parse {
                message: format!("Expected {kind} but got {token}"),
                offset: token.offset,
            })
        }
    }

    fn parse_expression(&mut self, precedence: u8) -> Result<FilterExpr> {
        let token = self.advance();
        let mut left = self.parse_prefix(token)?;

        while precedence < infix_precedence(self.peek().kind) {
            left = self.parse_infix(left)?;
        }
        Ok(left)
    }

    fn parse_prefix(&mut self, token: Token) -> Result<FilterExpr> {
        match token.kind {
            TokenType::LBracket => {
                let expr = self.parse_expression(0)?;
                self.expect(TokenType::RBracket)?;
                Ok(expr)
            }
            TokenType::Not => Ok(FilterExpr::not(self.parse_expression(PREFIX)?)),
            TokenType::Qualifier => self.parse_qualifier(&token),
            TokenType::Quote => Ok(Qualifier::keyword(self.parse_quoted()?).into()),
            TokenType::Symbol => Ok(Qualifier::keyword(token.text).into()),
            TokenType::Eof => Err(Error::UnexpectedEnd {
                offset: token.offset,
            }),
            _ => Err(Error::Parse {
                message: format!("Unexpected {token}"),
                offset: token.offset,
            }),
        }
    }

    fn parse_infix(&mut self, left: FilterExpr) -> Result<FilterExpr> {
        match self.peek().kind {
            TokenType::And => {
                self.advance();
                Ok(FilterExpr::and(left, self.parse_expression(CONJUNCTION)?))
            }
            TokenType::Or => {
                self.advance();
                Ok(FilterExpr::or(left, self.parse_expression(DISJUNCTION)?))
            }
            // Implicit conjunction: the operand starts here, nothing is consumed.
            _ => Ok(FilterExpr::and(left, self.parse_expression(CONJUNCTION)?)),
        }
    }

    /// `name:content`, or `name:a;b;c` as a left-nested disjunction.
    fn parse_qualifier(&mut self, token: &Token) -> Result<FilterExpr> {
        let name = token.qualifier_name().to_lowercase();
        let kind = QualifierType::from_name(&name);

        let content = self.parse_content(&name, kind)?;
        let mut expr = FilterExpr::from(Qualifier::new(&name, content)?);

        while self.peek().kind == TokenType::Semicolon {
            self.advance();
            let content = self.parse_content(&name, kind)?;
            expr = FilterExpr::or(expr, Qualifier::new(&name, content)?.into());
        }
        Ok(expr)
    }

    fn parse_content(&mut self, name: &str, kind: QualifierType) -> Result<QualifierContent> {
        let token = self.peek().clone();
        if token.kind == TokenType::Eof {
            return Err(Error::Parse {
                message: format!("Qualifier {name} must be given an input"),
                offset: token.offset,
            });
        }

        if kind == QualifierType::Sort {
            return self.parse_sort_keys(name);
        }

        match (token.kind, parse_number(&token)) {
            (op, _) if op.is_range_operator() => {
                self.advance();
                self.parse_half_open_range(name, op)
            }
            (TokenType::Date, _) => {
                self.advance();
                let start = parse_date(&token)?;
                if self.peek().kind != TokenType::DotDot {
                    return Ok(QualifierContent::Date(start));
                }
                self.advance();
                let end = self.advance();
                match end.kind {
                    TokenType::Star => Ok(QualifierContent::DateRange(DateRange::above(
                        start, false,
                    ))),
                    TokenType::Date => Ok(QualifierContent::DateRange(DateRange::between(
                        start,
                        parse_date(&end)?,
                    ))),
                    _ => Err(invalid_content(name, &end)),
                }
            }
            (TokenType::Symbol, Some(start)) => {
                self.advance();
                if self.peek().kind != TokenType::DotDot {
                    return Ok(QualifierContent::Number(start));
                }
                self.advance();
                let end = self.advance();
                match (end.kind, parse_number(&end)) {
                    (TokenType::Star, _) => Ok(QualifierContent::NumberRange(NumberRange::above(
                        start, false,
                    ))),
                    (_, Some(end)) => Ok(QualifierContent::NumberRange(NumberRange::between(
                        start, end,
                    ))),
                    _ => Err(invalid_content(name, &end)),
                }
            }
            (TokenType::Quote, _) => {
                self.advance();
                Ok(QualifierContent::Text(self.parse_quoted()?))
            }
            (TokenType::Symbol, None) => {
                self.advance();
                Ok(QualifierContent::Text(token.text))
            }
            _ => Err(invalid_content(name, &token)),
        }
    }

    /// Content after `<`, `<=`, `>` or `>=`.
    fn parse_half_open_range(&mut self, name: &str, op: TokenType) -> Result<QualifierContent> {
        let token = self.advance();
        let strict = matches!(op, TokenType::Lt | TokenType::Gt);
        let upper = matches!(op, TokenType::Lt | TokenType::Lte);

        fn half_open<T: Copy + Ord>(bound: T, upper: bool, strict: bool) -> Range<T> {
            if upper {
                Range::below(bound, strict)
            } else {
                Range::above(bound, strict)
            }
        }

        match token.kind {
            TokenType::Date => Ok(QualifierContent::DateRange(half_open(
                parse_date(&token)?,
                upper,
                strict,
            ))),
            TokenType::Symbol => match parse_number(&token) {
                Some(n) => Ok(QualifierContent::NumberRange(half_open(n, upper, strict))),
                None => Err(invalid_content(name, &token)),
            },
            TokenType::Eof => Err(Error::Parse {
                message: format!("Qualifier {name} needs a date or number after {op}"),
                offset: token.offset,
            }),
            _ => Err(invalid_content(name, &token)),
        }
    }

    /// Words up to the closing quote, joined by single spaces. The opening
    /// quote has already been consumed.
    fn parse_quoted(&mut self) -> Result<String> {
        let mut words = Vec::new();
        loop {
            let token = self.advance();
            match token.kind {
                TokenType::Symbol | TokenType::Date => words.push(token.text),
                TokenType::Quote => break,
                TokenType::Eof => {
                    return Err(Error::Parse {
                        message: "Unterminated quote".to_string(),
                        offset: token.offset,
                    })
                }
                _ => {
                    return Err(Error::Parse {
                        message: format!("Unexpected {token} inside quotes"),
                        offset: token.offset,
                    })
                }
            }
        }
        Ok(words.join(" ").trim().to_string())
    }

    /// `key[,key...]`, each key optionally prefixed by a negation to sort
    /// descending.
    fn parse_sort_keys(&mut self, name: &str) -> Result<QualifierContent> {
        let mut keys = Vec::new();
        loop {
            let descending = self.peek().kind == TokenType::Not;
            if descending {
                self.advance();
            }
            let token = self.advance();
            match token.kind {
                TokenType::Symbol => keys.push(SortKey::new(token.text, descending)),
                TokenType::Eof => {
                    return Err(Error::Parse {
                        message: format!("Qualifier {name} must be given an input"),
                        offset: token.offset,
                    })
                }
                _ => return Err(invalid_content(name, &token)),
            }
            if self.peek().kind != TokenType::Comma {
                return Ok(QualifierContent::SortKeys(keys));
            }
            self.advance();
        }
    }
}

fn parse_number(token: &Token) -> Option<i64> {
    if token.kind != TokenType::Symbol {
        return None;
    }
    token.text.parse().ok()
}

fn parse_date(token: &Token) -> Result<NaiveDate> {
    let mut parts = token.text.splitn(3, '-').map(str::parse::<u32>);
    let date = match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(y)), Some(Ok(m)), Some(Ok(d))) => i32::try_from(y)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, m, d)),
        _ => None,
    };
    date.ok_or_else(|| Error::Parse {
        message: format!("Invalid date {}", token.text),
        offset: token.offset,
    })
}

fn invalid_content(name: &str, token: &Token) -> Error {
    Error::Parse {
        message: format!("Invalid content for qualifier {name}: {token}"),
        offset: token.offset,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
