//! Whitespace tokenizer for single lines of Verilog.
//!
//! Statement punctuation (`,` and `;`) is treated as whitespace. The ranged
//! variant additionally splits `[7:0]` into `[`, `7`, `:`, `0`, `]`.

/// Minimum number of slots yielded by [`Tokens::slots`].
pub const MIN_TOKENS: usize = 8;

/// The tokens of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    words: Vec<String>,
}

impl Tokens {
    /// Token at `index`, or `None` past the end of the line.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words
    }

    /// All tokens followed by `None` placeholders up to [`MIN_TOKENS`] slots.
    pub fn slots(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        let padding = MIN_TOKENS.saturating_sub(self.words.len());
        self.words
            .iter()
            .map(|word| Some(word.as_str()))
            .chain(std::iter::repeat(None).take(padding))
    }
}

/// Splits a line into whitespace separated tokens, dropping `,` and `;`.
pub fn tokenize(line: &str) -> Tokens {
    split(&strip_terminators(line))
}

/// Like [`tokenize`], but every bit range delimiter becomes its own token
/// when the line contains a `[`.
pub fn tokenize_ranged(line: &str) -> Tokens {
    let line = strip_terminators(line);
    if !line.contains('[') {
        return split(&line);
    }

    let padded = line
        .replace('[', " [ ")
        .replace(':', " : ")
        .replace(']', " ] ");
    split(&padded)
}

fn strip_terminators(line: &str) -> String {
    line.replace(|c: char| c == ',' || c == ';', " ")
}

fn split(line: &str) -> Tokens {
    Tokens {
        words: line.split_whitespace().map(str::to_string).collect(),
    }
}
