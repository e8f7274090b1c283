//! Parser for helper subexpressions.
//!
//! Accepts the subexpression form used inside event-binding markup:
//!
//! ```text
//! (bind model.submodel.method "adios" 1 model target=model.submodel)
//! ```
//!
//! Parameters are separated by whitespace. A `key=value` pair becomes a hash
//! argument; everything else is positional.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use super::{HelperExpr, Literal, Param};
use crate::path::{DottedPath, InvalidPathError};

/// Errors that can occur while parsing a helper expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
  #[error("unexpected end of expression")]
  UnexpectedEnd,

  #[error("unexpected character {ch:?} at position {pos}")]
  UnexpectedChar { pos: usize, ch: char },

  #[error("unclosed string starting at position {0}")]
  UnclosedString(usize),

  #[error("invalid number: {0}")]
  InvalidNumber(String),

  #[error("expected helper name at position {0}")]
  ExpectedHelperName(usize),

  #[error("invalid hash key '{0}'")]
  InvalidHashKey(String),

  #[error(transparent)]
  InvalidPath(#[from] InvalidPathError),
}

/// Parse a complete helper expression, e.g. `(bind model.method target=this)`.
///
/// # Errors
///
/// Returns an error if the input is not a single well-formed subexpression.
pub fn parse(input: &str) -> Result<HelperExpr, ExprError> {
  let mut parser = Parser::new(input);
  parser.skip_whitespace();
  parser.expect('(')?;
  parser.skip_whitespace();

  let name_pos = parser.position();
  let name = parser.word();
  if name.is_empty() {
    return Err(ExprError::ExpectedHelperName(name_pos));
  }

  let mut params = Vec::new();
  let mut hash = Vec::new();

  loop {
    parser.skip_whitespace();
    match parser.peek() {
      None => return Err(ExprError::UnexpectedEnd),
      Some((_, ')')) => {
        parser.next();
        break;
      }
      Some(_) => {
        let (key, value) = parser.param()?;
        match key {
          Some(key) => hash.push((key, value)),
          None => params.push(value),
        }
      }
    }
  }

  parser.skip_whitespace();
  if let Some((pos, ch)) = parser.peek() {
    return Err(ExprError::UnexpectedChar { pos, ch });
  }

  Ok(HelperExpr { name, params, hash })
}

/// Parse a single value (`"text"`, `1`, `true`, `this`, `model.name`, ...).
///
/// Used for call-time arguments supplied outside of an expression.
pub fn parse_value(input: &str) -> Result<Param, ExprError> {
  let mut parser = Parser::new(input);
  parser.skip_whitespace();
  let value = parser.value()?;
  parser.skip_whitespace();
  if let Some((pos, ch)) = parser.peek() {
    return Err(ExprError::UnexpectedChar { pos, ch });
  }
  Ok(value)
}

struct Parser<'a> {
  input: &'a str,
  chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
  fn new(input: &'a str) -> Self {
    Self {
      input,
      chars: input.char_indices().peekable(),
    }
  }

  fn peek(&mut self) -> Option<(usize, char)> {
    self.chars.peek().copied()
  }

  fn next(&mut self) -> Option<(usize, char)> {
    self.chars.next()
  }

  fn position(&mut self) -> usize {
    self.peek().map(|(pos, _)| pos).unwrap_or(self.input.len())
  }

  fn skip_whitespace(&mut self) {
    while self.peek().is_some_and(|(_, c)| c.is_whitespace()) {
      self.next();
    }
  }

  fn expect(&mut self, expected: char) -> Result<(), ExprError> {
    match self.next() {
      Some((_, ch)) if ch == expected => Ok(()),
      Some((pos, ch)) => Err(ExprError::UnexpectedChar { pos, ch }),
      None => Err(ExprError::UnexpectedEnd),
    }
  }

  /// Consume a bare word: everything up to whitespace or a delimiter.
  fn word(&mut self) -> String {
    let start = self.position();
    while self.peek().is_some_and(|(_, c)| !is_delimiter(c)) {
      self.next();
    }
    let end = self.position();
    self.input[start..end].to_string()
  }

  /// One parameter, returning the hash key if it was written as `key=value`.
  fn param(&mut self) -> Result<(Option<String>, Param), ExprError> {
    if matches!(self.peek(), Some((_, '"' | '\''))) {
      return Ok((None, self.value()?));
    }

    let word = self.word();
    if word.is_empty() {
      return match self.peek() {
        Some((pos, ch)) => Err(ExprError::UnexpectedChar { pos, ch }),
        None => Err(ExprError::UnexpectedEnd),
      };
    }

    if matches!(self.peek(), Some((_, '='))) {
      self.next();
      if !word.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(ExprError::InvalidHashKey(word));
      }
      let value = self.value()?;
      return Ok((Some(word), value));
    }

    classify(&word).map(|value| (None, value))
  }

  fn value(&mut self) -> Result<Param, ExprError> {
    match self.peek() {
      Some((pos, quote @ ('"' | '\''))) => {
        self.next();
        self.string(pos, quote).map(|s| Param::Literal(Literal::String(s)))
      }
      Some(_) => {
        let word = self.word();
        if word.is_empty() {
          return match self.peek() {
            Some((pos, ch)) => Err(ExprError::UnexpectedChar { pos, ch }),
            None => Err(ExprError::UnexpectedEnd),
          };
        }
        classify(&word)
      }
      None => Err(ExprError::UnexpectedEnd),
    }
  }

  fn string(&mut self, start: usize, quote: char) -> Result<String, ExprError> {
    let mut out = String::new();
    while let Some((_, ch)) = self.next() {
      match ch {
        '\\' => match self.next() {
          Some((_, 'n')) => out.push('\n'),
          Some((_, 't')) => out.push('\t'),
          Some((_, other)) => out.push(other),
          None => return Err(ExprError::UnclosedString(start)),
        },
        c if c == quote => return Ok(out),
        c => out.push(c),
      }
    }
    Err(ExprError::UnclosedString(start))
  }
}

fn is_delimiter(c: char) -> bool {
  c.is_whitespace() || matches!(c, '(' | ')' | '=' | '"' | '\'')
}

fn classify(word: &str) -> Result<Param, ExprError> {
  match word {
    "true" => return Ok(Param::Literal(Literal::Bool(true))),
    "false" => return Ok(Param::Literal(Literal::Bool(false))),
    "null" | "undefined" | "nil" => return Ok(Param::Literal(Literal::Nil)),
    "this" => return Ok(Param::This),
    _ => {}
  }

  let unsigned = word.strip_prefix('-').unwrap_or(word);
  if unsigned.starts_with(|c: char| c.is_ascii_digit()) {
    if let Some(number) = parse_number(word) {
      return Ok(Param::Literal(number));
    }
    // `1st.method` is a path whose first segment starts with a digit
    let path_like = word.contains('.') && word.contains(|c: char| !c.is_ascii_digit() && c != '.' && c != '-');
    return match DottedPath::parse(word) {
      Ok(path) if path_like && !word.starts_with('-') => Ok(Param::Path(path)),
      _ => Err(ExprError::InvalidNumber(word.to_string())),
    };
  }

  Ok(Param::Path(DottedPath::parse(word)?))
}

fn parse_number(word: &str) -> Option<Literal> {
  if let Ok(n) = word.parse::<i64>() {
    return Some(Literal::Integer(n));
  }
  word.parse::<f64>().ok().filter(|n| n.is_finite()).map(Literal::Number)
}
