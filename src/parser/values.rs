//! Value tokenizer.
//!
//! Converts CSS value text into `Value` tokens using the `cssparser`
//! tokenizer. Identifiers are lowercased, named colours and colour
//! functions become `Value::Color`.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, SourceLocation, Token};

use crate::error::{ExpandError, Result};
use crate::types::{unit_to_byte, Color, Colour, FunctionCall, Value};

pub(crate) type CssResult<'i, T> = std::result::Result<T, ParseError<'i, String>>;

/// Parse a space-separated list of CSS values.
///
/// ```
/// use shorthand::parser::parse_values;
///
/// let values = parse_values("6px dashed green").unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[0].to_string(), "6px");
/// ```
pub fn parse_values(source: &str) -> Result<Vec<Value>> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);

    parse_value_list(&mut parser)
        .and_then(|values| {
            parser.expect_exhausted()?;
            Ok(values)
        })
        .map_err(syntax_error)
}

/// Parse values until the parser (or its current block) is exhausted.
pub(crate) fn parse_value_list<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Value>> {
    let mut values = Vec::new();
    while !input.is_exhausted() {
        values.push(parse_value(input)?);
    }
    Ok(values)
}

fn parse_value<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Value> {
    let location = input.current_source_location();
    let token = input.next()?.clone();

    let value = match token {
        Token::Number { value, .. } => Value::Number(value),
        Token::Percentage {
            unit_value,
            int_value,
            ..
        } => Value::Percentage(int_value.map(|i| i as f32).unwrap_or(unit_value * 100.0)),
        Token::Dimension { value, ref unit, .. } => Value::dimension(value, unit.to_string()),
        Token::Ident(ref ident) => {
            Value::named_color(ident).unwrap_or_else(|| Value::keyword(ident.to_string()))
        }
        Token::Hash(ref hex) | Token::IDHash(ref hex) => {
            let rgba = Colour::from_hex(hex).map_err(|e| custom_error(location, e.to_string()))?;
            Value::Color(Color {
                text: format!("#{}", hex.to_ascii_lowercase()),
                rgba: Some(rgba),
            })
        }
        Token::QuotedString(ref s) => Value::String(s.to_string()),
        Token::UnquotedUrl(ref url) => Value::url(url.to_string()),
        Token::Function(ref name) => {
            let call = FunctionCall::new(name.to_string(), input.parse_nested_block(|p| parse_arguments(p))?);
            function_value(call, location)?
        }
        other => return Err(location.new_unexpected_token_error(other)),
    };

    Ok(value)
}

fn parse_arguments<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Value>> {
    let mut args = Vec::new();
    while !input.is_exhausted() {
        if input.try_parse(|p| p.expect_comma()).is_ok() {
            continue;
        }
        args.push(parse_value(input)?);
    }
    Ok(args)
}

/// Resolve colour functions; leave other calls as they are.
fn function_value<'i>(call: FunctionCall, location: SourceLocation) -> CssResult<'i, Value> {
    let rgba = match call.name.as_str() {
        "rgb" | "rgba" => rgb_function(&call.args),
        "hsl" | "hsla" => hsl_function(&call.args),
        _ => return Ok(Value::Function(call)),
    };

    match rgba {
        Some(rgba) => Ok(Value::Color(Color {
            text: call.to_string(),
            rgba: Some(rgba),
        })),
        None => Err(custom_error(location, format!("Invalid colour function: {}", call))),
    }
}

fn rgb_function(args: &[Value]) -> Option<Colour> {
    let (channels, alpha) = split_alpha(args)?;
    let [r, g, b] = channels else {
        return None;
    };
    Some(Colour::new(channel(r)?, channel(g)?, channel(b)?, alpha_byte(alpha)?))
}

fn hsl_function(args: &[Value]) -> Option<Colour> {
    let (channels, alpha) = split_alpha(args)?;
    let [h, s, l] = channels else {
        return None;
    };
    let hue = match h {
        Value::Number(n) => *n,
        Value::Dimension(d) if d.unit == "deg" => d.value,
        _ => return None,
    };
    let (Value::Percentage(s), Value::Percentage(l)) = (s, l) else {
        return None;
    };
    let alpha = match alpha {
        Some(a) => unit_fraction(a)?,
        None => 1.0,
    };
    Some(Colour::from_hsl(hue, s / 100.0, l / 100.0, alpha))
}

fn split_alpha(args: &[Value]) -> Option<(&[Value], Option<&Value>)> {
    match args.len() {
        3 => Some((args, None)),
        4 => Some((&args[..3], args.get(3))),
        _ => None,
    }
}

fn channel(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => Some(n.clamp(0.0, 255.0).round() as u8),
        Value::Percentage(p) => Some(unit_to_byte(p / 100.0)),
        _ => None,
    }
}

fn unit_fraction(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Percentage(p) => Some(p / 100.0),
        _ => None,
    }
}

fn alpha_byte(alpha: Option<&Value>) -> Option<u8> {
    match alpha {
        Some(a) => Some(unit_to_byte(unit_fraction(a)?)),
        None => Some(255),
    }
}

fn custom_error<'i>(location: SourceLocation, message: String) -> ParseError<'i, String> {
    location.new_custom_error(message)
}

/// Convert a cssparser error into a parse error with its location.
pub(crate) fn syntax_error(err: ParseError<'_, String>) -> ExpandError {
    let reason = match err.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => "unexpected end of input".to_string(),
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {:?}", token)
        }
        ParseErrorKind::Basic(other) => format!("{:?}", other),
        ParseErrorKind::Custom(message) => message,
    };

    ExpandError::Parse {
        message: format!(
            "{} at line {}, column {}",
            reason,
            err.location.line + 1,
            err.location.column
        ),
        help: None,
    }
}
