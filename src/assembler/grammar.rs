//! The regular-expression grammar for one MIXAL line: location field,
//! mnemonic/directive, A-part, optional index, optional field-spec, and
//! local labels (`dH`) and literal constants (`=...=`) within the A-part.

use crate::opcode::Operator;
use regex::Regex;
use std::sync::OnceLock;

/// One source line, split into its grammatical parts. Each part is left as
/// raw text; [`crate::assembler::expr`] resolves it during the emit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub location: Option<String>,
    pub op: String,
    pub address: Option<String>,
    pub index: Option<String>,
    pub field: Option<String>,
}

const SYMBOL: &str = r"[0-9A-Za-z_]*[A-Za-z_][0-9A-Za-z_]*";
// A-part/index/field are captured as raw text up to the next delimiter;
// `crate::assembler::expr` is the one that actually splits an atomic
// expression from its (at most one) binary operator.
const EXPR: &str = r"[^,()\s]+";

const DIRECTIVES: [&str; 5] = ["EQU", "ORIG", "CON", "ALF", "END"];

/// Is `token` (already upper-cased) a mnemonic or directive this assembler
/// understands? Disambiguates the location field from the op: a bare
/// `OP ADDRESS` line (`END START`, `HLT`) has no location, while `LABEL OP
/// ...` does, and whitespace alone can't tell the two apart once a line's
/// leading columns have been discarded.
fn is_known_op(token: &str) -> bool {
    DIRECTIVES.contains(&token) || Operator::from_mnemonic(token).is_some()
}

fn symbol_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{SYMBOL}$")).expect("symbol pattern must compile"))
}

/// The part of a line after the op: `A-part`, `,index`, `(field)`, all
/// optional.
fn rest_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?x)
            ^
            (?:({expr}))?        # optional A-part
            (?:,({expr}))?       # optional index part
            (?:\(({expr})\))?    # optional field part
            \s*$
            ",
            expr = EXPR,
        );
        Regex::new(&pattern).expect("line grammar must compile")
    })
}

fn split_first_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Parses one already-trimmed, non-blank, non-comment source line.
/// Returns `None` if the line does not match the grammar at all.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let (first, rest) = split_first_token(line);
    if first.is_empty() {
        return None;
    }
    let first_upper = first.to_uppercase();

    if is_known_op(&first_upper) {
        let caps = rest_pattern().captures(rest)?;
        return Some(ParsedLine {
            location: None,
            op: first_upper,
            address: caps.get(1).map(|m| m.as_str().to_string()),
            index: caps.get(2).map(|m| m.as_str().to_string()),
            field: caps.get(3).map(|m| m.as_str().to_string()),
        });
    }

    // `first` names no known op, so it must be the location instead, with
    // the real op as the next whitespace-separated token.
    if !symbol_pattern().is_match(first) {
        return None;
    }
    let (op, tail) = split_first_token(rest);
    if op.is_empty() || !op.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let caps = rest_pattern().captures(tail)?;

    Some(ParsedLine {
        location: Some(first.to_string()),
        op: op.to_uppercase(),
        address: caps.get(1).map(|m| m.as_str().to_string()),
        index: caps.get(2).map(|m| m.as_str().to_string()),
        field: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Is `location` a local-label definition (a single digit followed by `H`)?
/// Returns the digit if so.
pub fn local_label_digit(location: &str) -> Option<u8> {
    let bytes = location.as_bytes();
    if bytes.len() == 2 && bytes[0].is_ascii_digit() && bytes[1] == b'H' {
        Some(bytes[0] - b'0')
    } else {
        None
    }
}

/// Is `text` a local-label *reference* (a single digit followed by `F` or
/// `B`)? Returns `(digit, is_forward)` if so.
pub fn local_label_reference(text: &str) -> Option<(u8, bool)> {
    let bytes = text.as_bytes();
    if bytes.len() == 2 && bytes[0].is_ascii_digit() {
        match bytes[1] {
            b'F' => Some((bytes[0] - b'0', true)),
            b'B' => Some((bytes[0] - b'0', false)),
            _ => None,
        }
    } else {
        None
    }
}
