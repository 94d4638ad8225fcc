// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn kinds(input: &str) -> Vec<TokenType> {
    lex(input).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    lex(input).unwrap().into_iter().map(|t| t.text).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Single tokens
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    and_word = { "AND", TokenType::And },
    and_single = { "&", TokenType::And },
    and_double = { "&&", TokenType::And },
    or_word = { "OR", TokenType::Or },
    or_single = { "|", TokenType::Or },
    or_double = { "||", TokenType::Or },
    not_word = { "NOT", TokenType::Not },
    not_tilde = { "~", TokenType::Not },
    not_bang = { "!", TokenType::Not },
    not_dash = { "-", TokenType::Not },
    date = { "2020-01-01", TokenType::Date },
    date_short = { "2020-1-1", TokenType::Date },
    qualifier = { "label:", TokenType::Qualifier },
    qualifier_hyphenated = { "due-date:", TokenType::Qualifier },
    qualifier_spaced = { "label :", TokenType::Qualifier },
    semicolon = { ";", TokenType::Semicolon },
    symbol = { "bug", TokenType::Symbol },
    symbol_hash = { "#12", TokenType::Symbol },
    symbol_version = { "v1.0", TokenType::Symbol },
    symbol_path = { "a/b", TokenType::Symbol },
    symbol_underscore = { "snake_case", TokenType::Symbol },
    lbracket = { "(", TokenType::LBracket },
    rbracket = { ")", TokenType::RBracket },
    quote = { "\"", TokenType::Quote },
    comma = { ",", TokenType::Comma },
    percent = { "%", TokenType::Percent },
    dotdot = { "..", TokenType::DotDot },
    lte = { "<=", TokenType::Lte },
    gte = { ">=", TokenType::Gte },
    lt = { "<", TokenType::Lt },
    gt = { ">", TokenType::Gt },
    star = { "*", TokenType::Star },
)]
fn lex_single_token(input: &str, expected: TokenType) {
    assert_eq!(kinds(input), vec![expected, TokenType::Eof]);
}

#[test]
fn date_is_one_token() {
    let tokens = lex("2020-01-01").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenType::Date);
    assert_eq!(tokens[0].text, "2020-01-01");
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenType::Eof]);
    assert_eq!(kinds("   "), vec![TokenType::Eof]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequences
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn qualifier_with_content() {
    assert_eq!(
        kinds("label:bug"),
        vec![TokenType::Qualifier, TokenType::Symbol, TokenType::Eof]
    );
    assert_eq!(texts("label:bug"), vec!["label:", "bug", ""]);
}

#[test]
fn range_content() {
    assert_eq!(
        kinds("created:>=2020-01-01"),
        vec![
            TokenType::Qualifier,
            TokenType::Gte,
            TokenType::Date,
            TokenType::Eof
        ]
    );
}

#[test]
fn date_range_content() {
    assert_eq!(
        kinds("created:2020-01-01 .. *"),
        vec![
            TokenType::Qualifier,
            TokenType::Date,
            TokenType::DotDot,
            TokenType::Star,
            TokenType::Eof
        ]
    );
}

#[test]
fn number_dotdot_is_one_symbol() {
    assert_eq!(
        kinds("id:1..5"),
        vec![TokenType::Qualifier, TokenType::Symbol, TokenType::Eof]
    );
}

#[test]
fn negated_qualifier() {
    assert_eq!(
        kinds("-is:pr"),
        vec![
            TokenType::Not,
            TokenType::Qualifier,
            TokenType::Symbol,
            TokenType::Eof
        ]
    );
}

#[test]
fn keyword_operators_match_as_prefix() {
    assert_eq!(
        kinds("ORANGE"),
        vec![TokenType::Or, TokenType::Symbol, TokenType::Eof]
    );
    assert_eq!(
        kinds("NOTE"),
        vec![TokenType::Not, TokenType::Symbol, TokenType::Eof]
    );
    let tokens = lex("ANDROID").unwrap();
    assert_eq!(tokens[0].kind, TokenType::And);
    assert_eq!(tokens[1].text, "ROID");
    assert_eq!(
        kinds("a AND(b)"),
        vec![
            TokenType::Symbol,
            TokenType::And,
            TokenType::LBracket,
            TokenType::Symbol,
            TokenType::RBracket,
            TokenType::Eof
        ]
    );
}

#[test]
fn sort_keys() {
    assert_eq!(
        kinds("sort:~id,comments"),
        vec![
            TokenType::Qualifier,
            TokenType::Not,
            TokenType::Symbol,
            TokenType::Comma,
            TokenType::Symbol,
            TokenType::Eof
        ]
    );
}

#[test]
fn offsets_skip_whitespace() {
    let tokens = lex("  a   b ").unwrap();
    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![2, 6, 7]);
}

#[test]
fn qualifier_name_strips_colon() {
    let tokens = lex("label :x").unwrap();
    assert_eq!(tokens[0].qualifier_name(), "label");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    at_sign = { "a @b", '@', 2 },
    leading = { "$", '$', 0 },
    lone_dot = { "a . b", '.', 2 },
    colon = { "1 :", ':', 2 },
    leading_colon = { ": a", ':', 0 },
)]
fn unrecognised_token(input: &str, ch: char, offset: usize) {
    let err = lex(input).unwrap_err();
    match err {
        Error::UnrecognisedToken { ch: c, offset: o } => {
            assert_eq!(c, ch);
            assert_eq!(o, offset);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[parameterized(
    plain = { "bug", true },
    version = { "v1.0", true },
    spaced = { "two words", false },
    operator = { "AND", false },
    date = { "2020-01-01", false },
    empty = { "", false },
)]
fn single_symbol_detection(input: &str, expected: bool) {
    assert_eq!(is_single_symbol(input), expected);
}
