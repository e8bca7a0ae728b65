use std::fmt;
use std::sync::LazyLock;

/// Nucleotide symbols plus an explicit gap.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    Gap = 4,
}

const NUCLEOTIDES: [(u8, Symbol); 4] = [
    (b'A', Symbol::A),
    (b'C', Symbol::C),
    (b'G', Symbol::G),
    (b'T', Symbol::T),
];

// Only uppercase ACGT are recognised; everything else is a gap.
static SYMBOL_MAP: LazyLock<[Symbol; 256]> = LazyLock::new(|| {
    let mut map = [Symbol::Gap; 256];
    for (b, sym) in NUCLEOTIDES {
        map[b as usize] = sym;
    }
    map
});

impl Symbol {
    #[inline]
    pub fn from_byte(b: u8) -> Self {
        SYMBOL_MAP[b as usize]
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Symbol::A => b'A',
            Symbol::C => b'C',
            Symbol::G => b'G',
            Symbol::T => b'T',
            Symbol::Gap => b'-',
        }
    }

    #[inline]
    pub fn is_gap(self) -> bool {
        self == Symbol::Gap
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol::from_byte(b)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

pub fn encode(text: &[u8]) -> Vec<Symbol> {
    text.iter().map(|&b| Symbol::from_byte(b)).collect()
}
