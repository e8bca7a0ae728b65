use super::AlignmentContext;
use crate::grid::Coordinate;

impl AlignmentContext<'_> {
    /// Best score at `coord`, recursing into predecessors on first visit.
    ///
    /// Recursion depth is bounded by the sum of the sequence lengths.
    pub(crate) fn optimal_score(&mut self, coord: &Coordinate) -> i64 {
        if coord.is_base() {
            return 0;
        }
        if self.computed.is_set(coord) {
            return self.scores.get(coord);
        }
        self.evaluations += 1;

        let masks = self.masks;
        let mut best: Option<i64> = None;
        for mask in masks.iter() {
            let Some(pred) = coord.checked_sub_mask(mask) else {
                continue;
            };
            let candidate = self.optimal_score(&pred) + self.column_score(coord, mask);
            best = Some(best.map_or(candidate, |b| b.max(candidate)));
        }
        // No masks only when there are no sequences.
        let best = best.unwrap_or(0);

        self.scores.set(coord, best);
        self.computed.set(coord);
        best
    }
}
