pub mod block;
pub mod declaration;
pub mod group;
pub mod tokenizer;

use std::fmt;

pub use block::{BlockLine, DeclarationBlock};
pub use declaration::{classify_block, classify_line, Declaration};
pub use group::{GroupedSignals, SignalGroup};
pub use tokenizer::{tokenize, tokenize_ranged, Tokens, MIN_TOKENS};

/// Errors that make a source file unusable for signal extraction.
///
/// Individual lines that cannot be classified are never errors; only the
/// boundaries of the declaration block are required.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unable to find a `module` header")]
    MissingModuleHeader,

    #[error("unable to find an `always` block after `module {module}` (line {header_line})")]
    MissingProceduralBlock { module: String, header_line: usize },
}

/// Port direction or storage class of a declared signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
    Inout,
    Internal,
}

impl Direction {
    /// Maps a declaration keyword to its direction.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "input" => Some(Direction::Input),
            "output" => Some(Direction::Output),
            "inout" => Some(Direction::Inout),
            "wire" | "reg" => Some(Direction::Internal),
            _ => None,
        }
    }

    /// The display group a signal with this direction belongs to.
    pub fn group(self) -> SignalGroup {
        match self {
            Direction::Input | Direction::Inout => SignalGroup::Inputs,
            Direction::Output => SignalGroup::Outputs,
            Direction::Internal => SignalGroup::Internals,
        }
    }
}

/// An inclusive `[msb:lsb]` vector index range, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRange {
    pub msb: String, // e.g. "7" in [7:0]
    pub lsb: String, // e.g. "0" in [7:0]
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.msb, self.lsb)
    }
}

/// A declared identifier with its optional bit range.
///
/// Renders as the identifier immediately followed by the range, e.g.
/// `q0[7:0]`, which is how GTKWave names vector nets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignalName {
    pub base: String,
    pub range: Option<BitRange>,
}

impl SignalName {
    pub fn scalar(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            range: None,
        }
    }

    pub fn vector(base: impl Into<String>, msb: impl Into<String>, lsb: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            range: Some(BitRange {
                msb: msb.into(),
                lsb: lsb.into(),
            }),
        }
    }

    pub fn is_vector(&self) -> bool {
        self.range.is_some()
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "{}{}", self.base, range),
            None => write!(f, "{}", self.base),
        }
    }
}
