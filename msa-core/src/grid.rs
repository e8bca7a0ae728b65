//! Dense k-dimensional storage for the DP lattice.
//!
//! A [`Shape`] turns a [`Coordinate`] into a row-major linear offset; [`Grid`]
//! stores one value per offset and [`FlagGrid`] one bit per offset. Both are
//! allocated up front for the whole lattice.

use bit_set::BitSet;

use crate::error::{MsaError, MsaResult};
use crate::mask::Mask;
use crate::seq::Sequence;

/// One prefix length per sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate(Vec<usize>);

impl Coordinate {
    pub fn new(components: Vec<usize>) -> Self {
        Self(components)
    }

    pub fn origin(k: usize) -> Self {
        Self(vec![0; k])
    }

    /// The "everything aligned" corner: every sequence fully consumed.
    pub fn terminal(sequences: &[Sequence]) -> Self {
        Self(sequences.iter().map(Sequence::len).collect())
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.0[i]
    }

    /// Any sequence with an empty prefix.
    #[inline]
    pub fn is_base(&self) -> bool {
        self.0.iter().any(|&c| c == 0)
    }

    /// Steps back one column along `mask`; `None` if that would leave the lattice.
    pub fn checked_sub_mask(&self, mask: Mask) -> Option<Coordinate> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &c)| c.checked_sub(mask.bit(i)))
            .collect::<Option<Vec<_>>>()
            .map(Coordinate)
    }
}

impl From<Vec<usize>> for Coordinate {
    fn from(components: Vec<usize>) -> Self {
        Self(components)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    extents: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
}

impl Shape {
    pub fn new(extents: Vec<usize>) -> MsaResult<Self> {
        let mut strides = vec![0usize; extents.len()];
        let mut len = 1usize;
        for (i, &extent) in extents.iter().enumerate().rev() {
            strides[i] = len;
            len = len
                .checked_mul(extent)
                .ok_or_else(|| MsaError::GridTooLarge {
                    extents: extents.clone(),
                })?;
        }
        Ok(Self {
            extents,
            strides,
            len,
        })
    }

    /// Extents are `len + 1` per sequence so prefix lengths `0..=len` are addressable.
    pub fn for_sequences(sequences: &[Sequence]) -> MsaResult<Self> {
        Self::new(sequences.iter().map(|s| s.len() + 1).collect())
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn offset(&self, coord: &Coordinate) -> usize {
        assert_eq!(
            coord.rank(),
            self.rank(),
            "coordinate rank {} does not match grid rank {}",
            coord.rank(),
            self.rank()
        );
        let mut offset = 0usize;
        for ((&c, &extent), &stride) in coord
            .components()
            .iter()
            .zip(&self.extents)
            .zip(&self.strides)
        {
            assert!(
                c < extent,
                "coordinate {:?} outside extents {:?}",
                coord,
                self.extents
            );
            offset += c * stride;
        }
        offset
    }

    pub fn coordinate(&self, mut offset: usize) -> Coordinate {
        assert!(offset < self.len, "offset {} outside grid of {}", offset, self.len);
        let mut components = Vec::with_capacity(self.rank());
        for &stride in &self.strides {
            components.push(offset / stride);
            offset %= stride;
        }
        Coordinate(components)
    }
}

/// Dense value plane addressed by [`Coordinate`].
#[derive(Clone, Debug)]
pub struct Grid<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(shape: Shape, fill: T) -> Self {
        let data = vec![fill; shape.len()];
        Self { shape, data }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, coord: &Coordinate) -> T {
        self.data[self.shape.offset(coord)]
    }

    #[inline]
    pub fn set(&mut self, coord: &Coordinate, value: T) {
        let idx = self.shape.offset(coord);
        self.data[idx] = value;
    }

    #[inline]
    pub fn get_at(&self, offset: usize) -> T {
        self.data[offset]
    }

    #[inline]
    pub fn set_at(&mut self, offset: usize, value: T) {
        self.data[offset] = value;
    }
}

/// "Has this cell been computed" plane. Kept apart from the scores because
/// zero and negative scores are legitimate.
#[derive(Clone, Debug)]
pub struct FlagGrid {
    shape: Shape,
    bits: BitSet,
}

impl FlagGrid {
    pub fn new(shape: Shape) -> Self {
        let bits = BitSet::with_capacity(shape.len());
        Self { shape, bits }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn is_set(&self, coord: &Coordinate) -> bool {
        self.bits.contains(self.shape.offset(coord))
    }

    #[inline]
    pub fn set(&mut self, coord: &Coordinate) {
        let idx = self.shape.offset(coord);
        self.bits.insert(idx);
    }

    #[inline]
    pub fn set_at(&mut self, offset: usize) {
        debug_assert!(offset < self.shape.len());
        self.bits.insert(offset);
    }

    /// Number of cells flagged so far.
    pub fn count(&self) -> usize {
        self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskSet;

    #[test]
    fn row_major_offsets() {
        let shape = Shape::new(vec![2, 3, 4]).unwrap();
        assert_eq!(shape.len(), 24);
        assert_eq!(shape.offset(&Coordinate::new(vec![0, 0, 0])), 0);
        assert_eq!(shape.offset(&Coordinate::new(vec![0, 0, 1])), 1);
        assert_eq!(shape.offset(&Coordinate::new(vec![0, 1, 0])), 4);
        assert_eq!(shape.offset(&Coordinate::new(vec![1, 2, 3])), 23);
    }

    #[test]
    fn offset_coordinate_inverse() {
        let shape = Shape::new(vec![3, 1, 5]).unwrap();
        for offset in 0..shape.len() {
            assert_eq!(shape.offset(&shape.coordinate(offset)), offset);
        }
    }

    #[test]
    fn zero_rank_has_single_cell() {
        let shape = Shape::new(Vec::new()).unwrap();
        assert_eq!(shape.len(), 1);
        assert_eq!(shape.offset(&Coordinate::origin(0)), 0);
    }

    #[test]
    fn overflowing_extents_rejected() {
        let err = Shape::new(vec![usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, MsaError::GridTooLarge { .. }));
    }

    #[test]
    #[should_panic(expected = "outside extents")]
    fn out_of_range_component_panics() {
        let shape = Shape::new(vec![2, 2]).unwrap();
        shape.offset(&Coordinate::new(vec![0, 2]));
    }

    #[test]
    #[should_panic(expected = "does not match grid rank")]
    fn rank_mismatch_panics() {
        let shape = Shape::new(vec![2, 2]).unwrap();
        shape.offset(&Coordinate::new(vec![0]));
    }

    #[test]
    fn grid_get_set_negative_values() {
        let mut grid = Grid::new(Shape::new(vec![2, 2]).unwrap(), 0i64);
        let c = Coordinate::new(vec![1, 0]);
        grid.set(&c, -7);
        assert_eq!(grid.get(&c), -7);
        assert_eq!(grid.get_at(grid.shape().offset(&c)), -7);
        assert_eq!(grid.get(&Coordinate::new(vec![0, 1])), 0);
    }

    #[test]
    fn flags_track_zero_scores() {
        let shape = Shape::new(vec![3, 3]).unwrap();
        let mut flags = FlagGrid::new(shape.clone());
        let c = Coordinate::new(vec![2, 1]);
        assert!(!flags.is_set(&c));
        flags.set(&c);
        assert!(flags.is_set(&c));
        assert_eq!(flags.count(), 1);
        flags.set_at(shape.offset(&c));
        assert_eq!(flags.count(), 1);
    }

    #[test]
    fn sub_mask_skips_negative() {
        let masks = MaskSet::new(2);
        let c = Coordinate::new(vec![1, 0]);
        let preds: Vec<Option<Coordinate>> =
            masks.iter().map(|m| c.checked_sub_mask(m)).collect();
        // only the mask that leaves sequence 1 alone applies
        assert_eq!(preds[0], Some(Coordinate::new(vec![0, 0])));
        assert_eq!(preds[1], None);
        assert_eq!(preds[2], None);
    }

    #[test]
    fn terminal_and_base() {
        let seqs = vec![Sequence::from_bytes(b"ACG"), Sequence::from_bytes(b"")];
        let t = Coordinate::terminal(&seqs);
        assert_eq!(t.components(), &[3, 0]);
        assert!(t.is_base());
        assert!(!Coordinate::new(vec![1, 1]).is_base());
        assert!(!Coordinate::origin(0).is_base());
    }
}
