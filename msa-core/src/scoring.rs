//! Fixed sum-of-pairs scoring scheme.
//!
//! All constants are doubled so the DP runs on integers; divide the final
//! score by [`SCALE`] to get true units (match +3, mismatch -2, gap -1.5).

use crate::alphabet::Symbol;
use crate::grid::Coordinate;
use crate::mask::Mask;
use crate::seq::Sequence;

pub const MATCH: i64 = 6;
pub const MISMATCH: i64 = -4;
pub const GAP: i64 = -3;
pub const GAP_GAP: i64 = 0;

pub const SCALE: f64 = 2.0;

#[inline]
pub fn pair_score(a: Symbol, b: Symbol) -> i64 {
    match (a.is_gap(), b.is_gap()) {
        (true, true) => GAP_GAP,
        (true, false) | (false, true) => GAP,
        (false, false) if a == b => MATCH,
        (false, false) => MISMATCH,
    }
}

/// Sum of [`pair_score`] over every unordered pair `i < j` in the column.
pub fn column_score(column: &[Symbol]) -> i64 {
    let mut sum = 0i64;
    for (i, &a) in column.iter().enumerate() {
        for &b in &column[i + 1..] {
            sum += pair_score(a, b);
        }
    }
    sum
}

/// Fills `out` with the column ending at `coord` under `mask`: sequence `i`
/// places its symbol at position `coord[i]` when its bit is set, a gap otherwise.
pub fn masked_column(
    sequences: &[Sequence],
    coord: &Coordinate,
    mask: Mask,
    out: &mut Vec<Symbol>,
) {
    out.clear();
    out.extend(sequences.iter().enumerate().map(|(i, seq)| {
        if mask.contains(i) {
            seq.get(coord.get(i))
        } else {
            Symbol::Gap
        }
    }));
}

/// Undoubles a raw lattice score.
#[inline]
pub fn rescale(raw: i64) -> f64 {
    raw as f64 / SCALE
}
