use super::AlignmentContext;

impl AlignmentContext<'_> {
    /// Fills every lattice cell bottom-up and returns the terminal score.
    ///
    /// Cells are visited in increasing linear offset. A predecessor differs
    /// from its cell by a non-zero mask, so its offset is strictly smaller and
    /// it is final before the cell reads it.
    pub(crate) fn tabulate(&mut self) -> i64 {
        let len = self.shape().len();
        for offset in 0..len {
            let coord = self.shape().coordinate(offset);
            if coord.is_base() {
                continue;
            }
            self.evaluations += 1;

            let masks = self.masks;
            let mut best: Option<i64> = None;
            for mask in masks.iter() {
                let Some(pred) = coord.checked_sub_mask(mask) else {
                    continue;
                };
                debug_assert!(pred.is_base() || self.computed.is_set(&pred));
                let candidate = self.scores.get(&pred) + self.column_score(&coord, mask);
                best = Some(best.map_or(candidate, |b| b.max(candidate)));
            }
            let best = best.unwrap_or(0);

            self.scores.set_at(offset, best);
            self.computed.set_at(offset);
        }

        // the terminal cell is the last in row-major order
        self.scores.get_at(len - 1)
    }
}
