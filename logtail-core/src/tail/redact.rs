use regex::bytes::{Captures, Regex};

/// Unicode FULL BLOCK (U+2588).
const FULL_BLOCK: &str = "\u{2588}";

/// Pads fills whose byte length is not a multiple of `FULL_BLOCK.len()`.
const PAD: u8 = b'#';

/// Masks every match of a pattern with a fill run of the same byte length.
#[derive(Debug, Clone)]
pub struct Redactor {
    pattern: Regex,
}

impl Redactor {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn redact(&self, content: &[u8]) -> Vec<u8> {
        self.pattern
            .replace_all(content, |caps: &Captures<'_>| fill(caps[0].len()))
            .into_owned()
    }
}

/// Build a fill run of exactly `len` bytes.
pub(crate) fn fill(len: usize) -> Vec<u8> {
    let mut out = FULL_BLOCK.repeat(len / FULL_BLOCK.len()).into_bytes();
    out.resize(len, PAD);
    out
}
