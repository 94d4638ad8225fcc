// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for filter strings.
//!
//! Rules are tried in a fixed priority order at each position and the first
//! anchored match wins. Dates are tried before symbols so `2020-01-01` stays
//! one token, and qualifier names are tried before symbols so `label:` is
//! never split into a symbol and a stray colon.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    And,
    Or,
    Not,
    Date,
    Qualifier,
    Semicolon,
    Symbol,
    LBracket,
    RBracket,
    Quote,
    Comma,
    Percent,
    DotDot,
    Lte,
    Gte,
    Lt,
    Gt,
    Star,
    Eof,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Not => "NOT",
            TokenType::Date => "DATE",
            TokenType::Qualifier => "QUALIFIER",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Symbol => "SYMBOL",
            TokenType::LBracket => "LBRACKET",
            TokenType::RBracket => "RBRACKET",
            TokenType::Quote => "QUOTE",
            TokenType::Comma => "COMMA",
            TokenType::Percent => "PERCENT",
            TokenType::DotDot => "DOTDOT",
            TokenType::Lte => "LTE",
            TokenType::Gte => "GTE",
            TokenType::Lt => "LT",
            TokenType::Gt => "GT",
            TokenType::Star => "STAR",
            TokenType::Eof => "EOF",
        }
    }

    /// True for `<`, `<=`, `>` and `>=`.
    pub fn is_range_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Lt | TokenType::Lte | TokenType::Gt | TokenType::Gte
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lexeme with its type and byte offset in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
    pub offset: usize,
}

impl Token {
    fn eof(offset: usize) -> Self {
        Token {
            kind: TokenType::Eof,
            text: String::new(),
            offset,
        }
    }

    /// Qualifier name without the trailing colon and whitespace.
    pub fn qualifier_name(&self) -> &str {
        self.text.trim_end_matches(':').trim_end()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenType::Eof => write!(f, "EOF"),
            kind => write!(f, "{}({})", kind, self.text),
        }
    }
}

struct Rule {
    pattern: Regex,
    kind: TokenType,
}

fn anchored(pattern: &str) -> Regex {
    match Regex::new(&format!("^(?:{pattern})")) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
}

/// Lexical rules in priority order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (r"AND|&&?", TokenType::And),
        (r"OR|\|\|?", TokenType::Or),
        (r"NOT|~|!|-", TokenType::Not),
        (r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}", TokenType::Date),
        (r"[A-Za-z]+(?:-[A-Za-z]+)*\s*:", TokenType::Qualifier),
        (r";", TokenType::Semicolon),
        (r"[\w#][\w/.'+-]*", TokenType::Symbol),
        (r"\(", TokenType::LBracket),
        (r"\)", TokenType::RBracket),
        (r#"""#, TokenType::Quote),
        (r",", TokenType::Comma),
        (r"%", TokenType::Percent),
        (r"\.\.", TokenType::DotDot),
        (r"<=", TokenType::Lte),
        (r">=", TokenType::Gte),
        (r"<", TokenType::Lt),
        (r">", TokenType::Gt),
        (r"\*", TokenType::Star),
    ]
    .into_iter()
    .map(|(pattern, kind)| Rule {
        pattern: anchored(pattern),
        kind,
    })
    .collect()
});

/// Streaming tokenizer over one filter string.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.trim_end(),
            position: 0,
        }
    }

    /// Returns the next token, or an EOF token once the input is consumed.
    pub fn next_token(&mut self) -> Result<Token> {
        let rest = &self.input[self.position..];
        self.position += rest.len() - rest.trim_start().len();

        let rest = &self.input[self.position..];
        let Some(ch) = rest.chars().next() else {
            return Ok(Token::eof(self.position));
        };

        for rule in RULES.iter() {
            if let Some(m) = rule.pattern.find(rest) {
                let token = Token {
                    kind: rule.kind,
                    text: m.as_str().to_string(),
                    offset: self.position,
                };
                self.position += m.end();
                return Ok(token);
            }
        }

        Err(Error::UnrecognisedToken {
            ch,
            offset: self.position,
        })
    }

    /// Consumes the lexer, returning every token up to and including EOF.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenType::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

/// Tokenizes `input`. The last token is always EOF.
pub fn lex(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).lex()
}

/// True if `text` lexes as exactly one symbol token spanning all of it.
pub(crate) fn is_single_symbol(text: &str) -> bool {
    match lex(text) {
        Ok(tokens) => matches!(
            tokens.as_slice(),
            [Token { kind: TokenType::Symbol, text: t, .. }, Token { kind: TokenType::Eof, .. }]
                if t == text
        ),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
