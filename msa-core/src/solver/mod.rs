//! Exact sum-of-pairs scoring of k sequences over the k-dimensional DP lattice.
//!
//! Lattice cell `(i_1, ..., i_k)` holds the best score for aligning the first
//! `i_j` symbols of every sequence `j`. A cell is reached from its predecessor
//! `cell - mask` for every non-zero column mask, paying the column's
//! sum-of-pairs score. Any cell with a zero component scores 0.

mod memo;
mod tabulate;


use log::{debug, trace};

use crate::alphabet::Symbol;
use crate::error::{MsaError, MsaResult};
use crate::grid::{Coordinate, FlagGrid, Grid, Shape};
use crate::mask::{Mask, MaskSet, MAX_SEQUENCES};
use crate::scoring;
use crate::seq::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Top-down recursion from the terminal cell, caching every visited cell.
    #[default]
    Memoized,
    /// Bottom-up sweep in row-major order; no recursion.
    Tabulated,
}

#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    pub strategy: Strategy,
    pub max_cells: Option<usize>,
}

impl SolveOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_cells: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Score in true units.
    pub score: f64,
    /// Score in doubled integer units, as computed on the lattice.
    pub raw_score: i64,
    /// Recurrence evaluations performed. Equals the number of interior
    /// (non-base) cells reached, since a cached cell is never re-evaluated.
    pub cells_computed: usize,
}

/// Request-scoped DP state: both planes, the mask set and the input rows.
pub(crate) struct AlignmentContext<'a> {
    sequences: &'a [Sequence],
    masks: MaskSet,
    scores: Grid<i64>,
    computed: FlagGrid,
    column: Vec<Symbol>,
    evaluations: usize,
}

impl<'a> AlignmentContext<'a> {
    pub(crate) fn new(sequences: &'a [Sequence], options: &SolveOptions) -> MsaResult<Self> {
        let k = sequences.len();
        // Masks are only walked from cells where every prefix is non-empty.
        if k > MAX_SEQUENCES && !Coordinate::terminal(sequences).is_base() {
            return Err(MsaError::TooManySequences {
                k,
                max: MAX_SEQUENCES,
            });
        }
        let shape = Shape::for_sequences(sequences)?;
        if let Some(max_cells) = options.max_cells {
            if shape.len() > max_cells {
                return Err(MsaError::GridTooLarge {
                    extents: shape.extents().to_vec(),
                });
            }
        }
        Ok(Self {
            sequences,
            masks: MaskSet::new(k),
            scores: Grid::new(shape.clone(), 0),
            computed: FlagGrid::new(shape),
            column: Vec::with_capacity(k),
            evaluations: 0,
        })
    }

    pub(crate) fn shape(&self) -> &Shape {
        self.scores.shape()
    }

    pub(crate) fn terminal(&self) -> Coordinate {
        Coordinate::terminal(self.sequences)
    }

    /// Sum-of-pairs score of the column ending at `coord` under `mask`.
    #[inline]
    fn column_score(&mut self, coord: &Coordinate, mask: Mask) -> i64 {
        scoring::masked_column(self.sequences, coord, mask, &mut self.column);
        scoring::column_score(&self.column)
    }

    fn run(mut self, strategy: Strategy) -> Solution {
        assert_eq!(
            self.scores.shape(),
            self.computed.shape(),
            "score and flag planes must share one shape"
        );
        assert_eq!(self.masks.k(), self.shape().rank());
        let raw_score = match strategy {
            Strategy::Memoized => {
                let terminal = self.terminal();
                self.optimal_score(&terminal)
            }
            Strategy::Tabulated => self.tabulate(),
        };
        let cells_computed = self.evaluations;
        debug_assert_eq!(cells_computed, self.computed.count());
        trace!(
            "sum-of-pairs raw score {} after {} cells",
            raw_score,
            cells_computed
        );
        Solution {
            score: scoring::rescale(raw_score),
            raw_score,
            cells_computed,
        }
    }
}

/// Optimal sum-of-pairs score of `sequences` with default options.
///
/// Bytes other than uppercase `A`, `C`, `G`, `T` are read as gaps.
///
/// ```
/// assert_eq!(msa_core::solve(&["AC", "AC"]).unwrap(), 6.0);
/// assert_eq!(msa_core::solve(&["AG", "AC"]).unwrap(), 1.0);
/// ```
pub fn solve<S: AsRef<[u8]>>(sequences: &[S]) -> MsaResult<f64> {
    solve_with(sequences, &SolveOptions::default())
}

pub fn solve_with<S: AsRef<[u8]>>(sequences: &[S], options: &SolveOptions) -> MsaResult<f64> {
    let sequences: Vec<Sequence> = sequences
        .iter()
        .map(|s| Sequence::from_bytes(s.as_ref()))
        .collect();
    Ok(solve_sequences(&sequences, options)?.score)
}

pub fn solve_sequences(sequences: &[Sequence], options: &SolveOptions) -> MsaResult<Solution> {
    let ctx = AlignmentContext::new(sequences, options)?;
    debug!(
        "aligning {} sequences (lengths {:?}): {} cells, {:?}",
        sequences.len(),
        sequences.iter().map(Sequence::len).collect::<Vec<_>>(),
        ctx.shape().len(),
        options.strategy
    );
    Ok(ctx.run(options.strategy))
}
