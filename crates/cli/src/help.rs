// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_filters}
  {list}         List issues matching a filter
  {apply}        Change an issue so it matches a filter
  {check}        Validate a filter and print its canonical form
  {tokens}       Show how a filter is tokenized
  {saved}        Manage saved filters
  {qualifiers}   Show recognised qualifiers

{header_setup}
  {init}         Initialize a project
  {completions}  Generate shell completions
",
        header_filters = colors::header("Filters:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        apply = colors::literal("apply"),
        check = colors::literal("check"),
        tokens = colors::literal("tokens"),
        saved = colors::literal("saved"),
        qualifiers = colors::literal("qualifiers"),
        init = colors::literal("init"),
        completions = colors::literal("completions"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  hf init                           Initialize with ./model.json
  hf list \"is:open label:bug\"       List open bugs
  hf apply \"milestone:v1.0\" 12      Move issue #12 to milestone v1.0
  hf saved add mine assignee:alice  Save a filter, then use it as @mine",
    )
}

/// Filter syntax summary for commands that take a filter.
pub fn filter_syntax() -> String {
    colors::examples(
        "\
Filter syntax:
  Terms: word  \"quoted words\"  qualifier:value
  Operators: AND, OR, NOT (or !, ~, -)  and parentheses
  Ranges: created:2020-01-01..2020-06-30  comments:>5  id:<=10
  Alternatives: label:bug;crash
  Meta: in:title  sort:~updated,id
  Saved: @name expands a saved filter",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
