use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsaError {
    #[error("too many sequences: {k} (at most {max} can be aligned exactly)")]
    TooManySequences { k: usize, max: usize },

    #[error("dp lattice too large for extents {extents:?}")]
    GridTooLarge { extents: Vec<usize> },
}

pub type MsaResult<T> = Result<T, MsaError>;
