//! Extraction of the declaration block of a Verilog module.
//!
//! The block spans the lines between the first `module` header and the first
//! procedural `always` block that follows it. Port lists and signal
//! declarations conventionally live there; everything after the first
//! `always` is logic and is not scanned.

use crate::tokenizer::tokenize;
use crate::ParseError;

/// A source line inside the declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLine {
    pub number: usize, // 1-based line number in the source file
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    module_name: String,
    header_line: usize,
    lines: Vec<BlockLine>,
}

impl DeclarationBlock {
    /// Locates the declaration block in the lines of a source file.
    ///
    /// Fails if there is no `module` header, or no procedural block after it.
    pub fn locate<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        let header = lines
            .iter()
            .position(|line| tokenize(line.as_ref()).first() == Some("module"))
            .ok_or(ParseError::MissingModuleHeader)?;

        let module_name = module_name_from_header(lines[header].as_ref());

        let end = lines[header + 1..]
            .iter()
            .position(|line| {
                tokenize(line.as_ref())
                    .first()
                    .is_some_and(is_procedural_marker)
            })
            .map(|offset| header + 1 + offset)
            .ok_or_else(|| ParseError::MissingProceduralBlock {
                module: module_name.clone(),
                header_line: header + 1,
            })?;

        let lines = lines[header + 1..end]
            .iter()
            .enumerate()
            .map(|(offset, line)| BlockLine {
                number: header + 2 + offset,
                text: line.as_ref().to_string(),
            })
            .collect();

        Ok(Self {
            module_name,
            header_line: header + 1,
            lines,
        })
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = source.lines().collect();
        Self::locate(&lines)
    }

    /// Module name as written in the header, empty if the header has none.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// 1-based line number of the `module` header.
    pub fn header_line(&self) -> usize {
        self.header_line
    }

    pub fn lines(&self) -> &[BlockLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `always`, its SystemVerilog variants, or `always@(...)` written without a space.
fn is_procedural_marker(token: &str) -> bool {
    matches!(
        token,
        "always" | "always_ff" | "always_comb" | "always_latch"
    ) || token.starts_with("always@")
}

// `module foo (`, `module foo(`, `module foo #(` and `module foo;` all name `foo`.
fn module_name_from_header(line: &str) -> String {
    let tokens = tokenize(line);
    tokens
        .get(1)
        .map(|word| {
            word.split(|c: char| c == '(' || c == '#')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_default()
}
