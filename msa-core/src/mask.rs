//! Column masks: which sequences place a symbol (bit set) versus a gap in one
//! alignment column.

/// Largest k whose masks fit one `u64` with room for the exclusive upper bound.
pub const MAX_SEQUENCES: usize = u64::BITS as usize - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask(u64);

impl Mask {
    pub fn bits(self) -> u64 {
        self.0
    }

    /// True when sequence `i` contributes its symbol.
    #[inline]
    pub fn contains(self, i: usize) -> bool {
        (self.0 >> i) & 1 == 1
    }

    /// 0/1 per sequence, lowest bit first.
    #[inline]
    pub fn bit(self, i: usize) -> usize {
        ((self.0 >> i) & 1) as usize
    }

    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    pub fn to_vec(self, k: usize) -> Vec<u8> {
        (0..k).map(|i| self.bit(i) as u8).collect()
    }
}

/// Every non-zero k-bit mask, each exactly once, decoded on demand from
/// the integers `1..2^k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskSet {
    k: usize,
}

impl MaskSet {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Exclusive upper bound of the mask integers.
    fn end(&self) -> u64 {
        assert!(
            self.k <= MAX_SEQUENCES,
            "cannot enumerate masks for {} sequences (at most {})",
            self.k,
            MAX_SEQUENCES
        );
        1u64 << self.k
    }

    pub fn len(&self) -> u64 {
        self.end() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.k == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Mask> {
        (1..self.end()).map(Mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_sequence_has_one_mask() {
        let set = MaskSet::new(1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().to_vec(set.k()), vec![1]);
    }

    #[test]
    fn three_sequences() {
        let set = MaskSet::new(3);
        let got: HashSet<Vec<u8>> = set.iter().map(|m| m.to_vec(3)).collect();
        let expected: HashSet<Vec<u8>> = [
            vec![1, 1, 1],
            vec![1, 1, 0],
            vec![1, 0, 1],
            vec![1, 0, 0],
            vec![0, 1, 1],
            vec![0, 1, 0],
            vec![0, 0, 1],
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn no_all_gap_column() {
        for k in 1..=10 {
            let set = MaskSet::new(k);
            assert_eq!(set.len(), (1u64 << k) - 1);
            assert_eq!(set.iter().count() as u64, set.len());
            assert!(set.iter().all(|m| m.count_ones() > 0));
            let unique: HashSet<u64> = set.iter().map(Mask::bits).collect();
            assert_eq!(unique.len() as u64, set.len());
            assert!(set.iter().all(|m| m.bits() >> k == 0));
        }
    }

    #[test]
    fn zero_sequences_is_empty() {
        let set = MaskSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn widest_set_is_lazy() {
        let set = MaskSet::new(MAX_SEQUENCES);
        assert_eq!(set.len(), u64::MAX >> 1);
        let first: Vec<u64> = set.iter().take(3).map(Mask::bits).collect();
        assert_eq!(first, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "cannot enumerate masks")]
    fn oversized_k_panics_on_use() {
        MaskSet::new(MAX_SEQUENCES + 1).iter().count();
    }

    #[test]
    fn contains_matches_bit() {
        let set = MaskSet::new(4);
        for m in set.iter() {
            for i in 0..4 {
                assert_eq!(m.contains(i), m.bit(i) == 1);
            }
        }
    }
}
