//! The MIXAL expression evaluator: atomic expressions combined through at
//! most one binary operator, left to right, with no precedence.

use crate::assembler::grammar::local_label_reference;
use crate::assembler::symtab::SymbolTable;
use crate::byte::int_to_bytes;
use crate::consts::LITERAL_POOL_START;
use crate::error::AssembleError;
use crate::memory::Memory;
use crate::word::Word;

/// Everything an expression might need to resolve: where it sits (for `*`
/// and local-label lookups), the symbol table, and a place to allocate and
/// write literal constants.
pub struct Context<'a> {
    pub location: i64,
    pub line: usize,
    pub symbols: &'a SymbolTable,
    pub memory: &'a mut Memory,
    pub next_literal: &'a mut i64,
}

impl<'a> Context<'a> {
    fn allocate_literal(&mut self, value: i64) -> Result<i64, AssembleError> {
        let address = *self.next_literal;
        if address < 0 {
            return Err(AssembleError::LiteralPoolExhausted);
        }
        let (sign, bytes) = int_to_bytes(value, 5);
        self.memory
            .store(address, Word::new(sign, bytes[4], bytes[3], bytes[2], bytes[1], bytes[0]))
            .map_err(|_| AssembleError::AddressOutOfRange { line: self.line, value })?;
        *self.next_literal -= 1;
        Ok(address)
    }
}

/// Evaluates a raw expression string (the text captured for an A-part,
/// index part, or field part) to a signed integer.
pub fn evaluate(expr: &str, ctx: &mut Context) -> Result<i64, AssembleError> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(AssembleError::InvalidExpression { line: ctx.line, text: expr.to_string() });
    }

    if let Some(rest) = s.strip_prefix('+') {
        if let Some((text, after)) = take_atomic(rest) {
            if after.is_empty() {
                return eval_atomic(text, ctx);
            }
        }
    }
    if let Some(rest) = s.strip_prefix('-') {
        if let Some((text, after)) = take_atomic(rest) {
            if after.is_empty() {
                return Ok(-eval_atomic(text, ctx)?);
            }
        }
    }

    let (first_text, rest) =
        take_atomic(s).ok_or_else(|| AssembleError::InvalidExpression { line: ctx.line, text: expr.to_string() })?;
    if rest.is_empty() {
        return eval_atomic(first_text, ctx);
    }

    let (op, rest) = if let Some(rest) = rest.strip_prefix("//") {
        ("/", rest)
    } else {
        (&rest[0..1], &rest[1..])
    };
    let (second_text, after) =
        take_atomic(rest).ok_or_else(|| AssembleError::InvalidExpression { line: ctx.line, text: expr.to_string() })?;
    if !after.is_empty() {
        return Err(AssembleError::InvalidExpression { line: ctx.line, text: expr.to_string() });
    }

    let a = eval_atomic(first_text, ctx)?;
    let b = eval_atomic(second_text, ctx)?;
    apply_op(op, a, b, ctx.line, expr)
}

fn apply_op(op: &str, a: i64, b: i64, line: usize, text: &str) -> Result<i64, AssembleError> {
    match op {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => Ok(a / b),
        ":" => Ok(8 * a + b),
        _ => Err(AssembleError::InvalidExpression { line, text: text.to_string() }),
    }
}

/// Splits the leading atomic expression off `s`, returning `(atomic,
/// remainder)`. An atomic is `*`, a digit run, a letter/digit symbol, or a
/// `=...=` literal constant.
fn take_atomic(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    if let Some(rest) = s.strip_prefix('*') {
        return Some((&s[0..1], rest));
    }
    if s.starts_with('=') {
        let close = s[1..].find('=')? + 1;
        return Some((&s[0..=close], &s[close + 1..]));
    }
    let end = s.find(|c: char| !c.is_ascii_alphanumeric() && c != '_').unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((&s[0..end], &s[end..]))
}

fn eval_atomic(text: &str, ctx: &mut Context) -> Result<i64, AssembleError> {
    if text == "*" {
        return Ok(ctx.location);
    }
    if text.starts_with('=') && text.ends_with('=') && text.len() >= 2 {
        let inner = &text[1..text.len() - 1];
        let value = evaluate(inner, ctx)?;
        return ctx.allocate_literal(value);
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse()
            .map_err(|_| AssembleError::InvalidExpression { line: ctx.line, text: text.to_string() });
    }
    if let Some((digit, forward)) = local_label_reference(text) {
        let resolved = if forward {
            ctx.symbols.resolve_local_forward(digit, ctx.location)
        } else {
            ctx.symbols.resolve_local_backward(digit, ctx.location)
        };
        return resolved.ok_or(AssembleError::UnresolvedLocalLabel {
            line: ctx.line,
            digit,
            direction: if forward { "forward" } else { "backward" },
        });
    }
    ctx.symbols
        .lookup(text)
        .ok_or_else(|| AssembleError::UnknownSymbol { line: ctx.line, symbol: text.to_string() })
}
