//! Parser for rendered expressions.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! or      := and (("|" | "∨") and)*
//! and     := unary (("&" | "∧") unary)*
//! unary   := ("~" | "!" | "¬") unary | primary
//! primary := "(" or ")" | "true" | "false" | identifier
//! ```
//!
//! Chains of the same connective parse to one n-ary node, so
//! `parse_expr(&e.to_string())` reproduces any canonical form `e`.

use crate::error::ParseError;
use crate::types::Expr;

/// Parses a full expression; trailing input is an error.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
  let (expr, rest) = parse_or(source, source)?;
  let rest = rest.trim_start();
  if !rest.is_empty() {
    return Err(ParseError::new(offset(source, rest), "unexpected trailing input"));
  }
  Ok(expr)
}

fn offset(source: &str, rest: &str) -> usize {
  source.len() - rest.len()
}

/// Strips one of `ops` from the front of `s` (after whitespace).
fn strip_operator<'a>(s: &'a str, ops: &[char]) -> Option<&'a str> {
  let s = s.trim_start();
  let c = s.chars().next()?;
  ops.contains(&c).then(|| &s[c.len_utf8()..])
}

fn parse_or<'a>(source: &str, s: &'a str) -> Result<(Expr, &'a str), ParseError> {
  let (first, mut rest) = parse_and(source, s)?;
  let mut items = vec![first];
  while let Some(after) = strip_operator(rest, &['|', '∨']) {
    let (next, r) = parse_and(source, after)?;
    items.push(next);
    rest = r;
  }
  Ok((collapse(items, Expr::Or), rest))
}

fn parse_and<'a>(source: &str, s: &'a str) -> Result<(Expr, &'a str), ParseError> {
  let (first, mut rest) = parse_unary(source, s)?;
  let mut items = vec![first];
  while let Some(after) = strip_operator(rest, &['&', '∧']) {
    let (next, r) = parse_unary(source, after)?;
    items.push(next);
    rest = r;
  }
  Ok((collapse(items, Expr::And), rest))
}

fn collapse(mut items: Vec<Expr>, build: fn(Vec<Expr>) -> Expr) -> Expr {
  if items.len() == 1 {
    items.remove(0)
  } else {
    build(items)
  }
}

fn parse_unary<'a>(source: &str, s: &'a str) -> Result<(Expr, &'a str), ParseError> {
  if let Some(after) = strip_operator(s, &['~', '!', '¬']) {
    let (inner, rest) = parse_unary(source, after)?;
    return Ok((Expr::negate(inner), rest));
  }
  parse_primary(source, s)
}

fn parse_primary<'a>(source: &str, s: &'a str) -> Result<(Expr, &'a str), ParseError> {
  let s = s.trim_start();
  if let Some(inner) = s.strip_prefix('(') {
    let (expr, rest) = parse_or(source, inner)?;
    let rest = rest.trim_start();
    let rest = rest
      .strip_prefix(')')
      .ok_or_else(|| ParseError::new(offset(source, rest), "expected ')'"))?;
    return Ok((expr, rest));
  }
  let (id, rest) = parse_identifier(s)
    .ok_or_else(|| ParseError::new(offset(source, s), "expected identifier, constant or '('"))?;
  let expr = match id {
    "true" => Expr::Const(true),
    "false" => Expr::Const(false),
    name => Expr::atom(name),
  };
  Ok((expr, rest))
}

/// Splits a leading identifier (letter or `_`, then letters, digits, `_`) off `s`.
pub(crate) fn parse_identifier(s: &str) -> Option<(&str, &str)> {
  let mut chars = s.char_indices();
  match chars.next() {
    Some((_, c)) if c.is_alphabetic() || c == '_' => {}
    _ => return None,
  }
  let end = chars
    .find(|(_, c)| !c.is_alphanumeric() && *c != '_')
    .map(|(i, _)| i)
    .unwrap_or(s.len());
  Some((&s[..end], &s[end..]))
}
