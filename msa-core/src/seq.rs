use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, Symbol};

/// An immutable run of symbols, one row of the alignment problem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

impl Sequence {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Maps raw text to symbols. Bytes other than `A`, `C`, `G`, `T` become gaps.
    pub fn from_bytes(text: &[u8]) -> Self {
        Self {
            symbols: alphabet::encode(text),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at 1-based position `pos`.
    #[inline]
    pub fn get(&self, pos: usize) -> Symbol {
        assert!(
            pos >= 1 && pos <= self.symbols.len(),
            "sequence position {} out of range 1..={}",
            pos,
            self.symbols.len()
        );
        self.symbols[pos - 1]
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl FromStr for Sequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_bytes(s.as_bytes()))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in self.symbols() {
            write!(f, "{}", sym)?;
        }
        Ok(())
    }
}
