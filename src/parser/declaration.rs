//! Declaration and declaration-block parsing.

use cssparser::{parse_important, Delimiter, Parser, ParserInput};

use crate::error::{ExpandError, Result};
use crate::types::Declaration;

use super::values::{parse_value_list, syntax_error, CssResult};

/// Parse a declaration block: `name: values [!important]` entries separated
/// by semicolons. Comments and empty entries are ignored.
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);

    parse_declaration_list(&mut parser).map_err(syntax_error)
}

/// Parse declarations until the parser (or its current block) is exhausted.
pub(crate) fn parse_declaration_list<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Declaration>> {
    let mut declarations = Vec::new();

    while !input.is_exhausted() {
        if input.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }
        let declaration = input.parse_until_after(Delimiter::Semicolon, |p| parse_declaration_body(p))?;
        declarations.push(declaration);
    }

    Ok(declarations)
}

/// Parse exactly one declaration, with or without a trailing semicolon.
///
/// ```
/// use shorthand::parser::parse_declaration;
///
/// let declaration = parse_declaration("Margin: 0 auto !important").unwrap();
/// assert_eq!(declaration.name, "margin");
/// assert!(declaration.important);
/// ```
pub fn parse_declaration(source: &str) -> Result<Declaration> {
    let mut declarations = parse_declarations(source)?;
    match declarations.len() {
        1 => Ok(declarations.remove(0)),
        count => Err(ExpandError::Parse {
            message: format!("Expected one declaration, found {}", count),
            help: Some("Write a single `property: value` pair".to_string()),
        }),
    }
}

fn parse_declaration_body<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Declaration> {
    let name = input.expect_ident()?.to_string();
    input.expect_colon()?;
    let values = input.parse_until_before(Delimiter::Bang, |p| parse_value_list(p))?;
    let important = input.try_parse(parse_important).is_ok();
    input.expect_exhausted()?;

    let declaration = Declaration::new(name, values);
    Ok(if important {
        declaration.important()
    } else {
        declaration
    })
}
