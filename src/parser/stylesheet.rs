//! Stylesheet parsing.
//!
//! Splits a stylesheet into rules with their declaration blocks. Grouping
//! at-rules (`@media`, `@supports`, ...) are flattened into the rules they
//! contain, statement at-rules such as `@import` are skipped.

use cssparser::{Delimiter, Parser, ParserInput, Token};

use crate::error::Result;
use crate::types::Declaration;

use super::declaration::parse_declaration_list;
use super::values::{syntax_error, CssResult};

/// At-rules whose block holds rules rather than declarations.
const GROUPING_RULES: &[&str] = &["media", "supports", "layer", "container", "document"];

/// A rule and its declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Selector text, or the at-rule prelude for `@font-face`, `@page`, etc.
    pub prelude: String,
    /// Line of the prelude, starting at 1.
    pub line: u32,
    pub declarations: Vec<Declaration>,
}

/// Parse a stylesheet into its rules, in source order.
pub fn parse_stylesheet(source: &str) -> Result<Vec<Rule>> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();

    parse_rule_list(&mut parser, &mut rules).map_err(syntax_error)?;
    Ok(rules)
}

fn parse_rule_list<'i>(input: &mut Parser<'i, '_>, rules: &mut Vec<Rule>) -> CssResult<'i, ()> {
    loop {
        input.skip_whitespace();
        if input.is_exhausted() {
            return Ok(());
        }

        let line = input.current_source_location().line + 1;
        let start = input.position();
        input.parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| skip_all(p))?;
        let prelude = input.slice_from(start).trim().to_string();

        let location = input.current_source_location();
        let token = input.next().cloned()?;
        match token {
            Token::CurlyBracketBlock if is_grouping(&prelude) => {
                input.parse_nested_block(|p| parse_rule_list(p, rules))?;
            }
            Token::CurlyBracketBlock => {
                let declarations = input.parse_nested_block(|p| parse_declaration_list(p))?;
                rules.push(Rule {
                    prelude,
                    line,
                    declarations,
                });
            }
            Token::Semicolon => {}
            other => return Err(location.new_unexpected_token_error(other)),
        }
    }
}

fn skip_all<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, ()> {
    while input.next().is_ok() {}
    Ok(())
}

fn is_grouping(prelude: &str) -> bool {
    let Some(at_rule) = prelude.strip_prefix('@') else {
        return false;
    };
    let name = at_rule
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    GROUPING_RULES.contains(&name.as_str())
}
