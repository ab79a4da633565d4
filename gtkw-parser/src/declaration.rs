//! Classification of single-line port and signal declarations.
//!
//! A line is a declaration when its first token is `input`, `output`,
//! `inout`, `wire` or `reg`. The rest of the line is matched against a small
//! grammar over the ranged token stream:
//!
//! ```text
//! declaration := keyword qualifier* range? identifier
//! range       := "[" bound ":" bound "]"
//! ```
//!
//! Only the first identifier is taken, so `wire a, b;` declares `a`. Anything
//! after the identifier (further names, initialisers) is ignored.

use chumsky::prelude::*;
use chumsky::stream::Stream;
use log::debug;

use crate::block::DeclarationBlock;
use crate::group::GroupedSignals;
use crate::tokenizer::{tokenize, tokenize_ranged};
use crate::{BitRange, Direction, SignalName};

/// Net type, data type and signedness keywords allowed between the keyword
/// and the range.
const QUALIFIERS: [&str; 18] = [
    "wire", "reg", "logic", "tri", "wand", "wor", "var", "signed", "unsigned", "integer", "int",
    "bit", "byte", "shortint", "longint", "time", "real", "realtime",
];

/// A classified declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: SignalName,
    pub direction: Direction,
}

/// Classifies one source line.
///
/// Returns `None` for anything that is not a recognised declaration,
/// including declarations whose range or name cannot be parsed.
pub fn classify_line(line: &str) -> Option<Declaration> {
    // Decide on the plain tokens, so `reg[2:0]` glued to its keyword is not a declaration
    Direction::from_keyword(tokenize(line).first()?)?;

    let tokens = tokenize_ranged(line).into_vec();
    let eoi = tokens.len()..tokens.len() + 1;
    let stream = Stream::from_iter(
        eoi,
        tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token, index..index + 1)),
    );

    declaration_parser().parse(stream).ok()
}

/// Classifies every line of a declaration block, in source order.
pub fn classify_block(block: &DeclarationBlock) -> GroupedSignals {
    let mut signals = GroupedSignals::new();

    for line in block.lines() {
        match classify_line(&line.text) {
            Some(declaration) => {
                debug!(
                    "line {}: {} -> {:?}",
                    line.number, declaration.name, declaration.direction
                );
                signals.push(declaration.direction, declaration.name);
            }
            None => {
                if !line.text.trim().is_empty() {
                    debug!("line {}: skipped `{}`", line.number, line.text.trim());
                }
            }
        }
    }

    signals
}

fn keyword(word: &str) -> impl Parser<String, String, Error = Simple<String>> + Clone {
    just(word.to_string())
}

fn declaration_parser() -> impl Parser<String, Declaration, Error = Simple<String>> + Clone {
    let direction = filter_map(|span: std::ops::Range<usize>, token: String| {
        Direction::from_keyword(&token).ok_or_else(|| {
            Simple::custom(span, format!("`{}` is not a declaration keyword", token))
        })
    });

    let qualifier = filter(|token: &String| QUALIFIERS.contains(&token.as_str()));

    // Range bounds are kept verbatim, so `[WIDTH:0]` survives as written
    let bound = filter(|token: &String| !matches!(token.as_str(), "[" | ":" | "]"));

    let range = keyword("[")
        .ignore_then(bound.clone())
        .then_ignore(keyword(":"))
        .then(bound)
        .then_ignore(keyword("]"))
        .map(|(msb, lsb)| BitRange { msb, lsb });

    let identifier = filter(|token: &String| is_identifier(token));

    direction
        .then_ignore(qualifier.repeated())
        .then(range.or_not())
        .then(identifier)
        .map(|((direction, range), base)| Declaration {
            name: SignalName { base, range },
            direction,
        })
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
