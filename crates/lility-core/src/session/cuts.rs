//! Sorted collections of cut positions.

/// Cut positions along one axis, in percent, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutList {
    cuts: Vec<f64>,
}

impl CutList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cut, keeping the list sorted. Equal values are kept; the new
    /// one goes after the existing ones.
    pub fn insert(&mut self, percent: f64) {
        let at = self.cuts.partition_point(|&c| c <= percent);
        self.cuts.insert(at, percent);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cuts
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn clear(&mut self) {
        self.cuts.clear();
    }

    /// True when the list can be consumed as start/end pairs: non-empty and
    /// of even length.
    pub fn is_paired(&self) -> bool {
        !self.cuts.is_empty() && self.cuts.len() % 2 == 0
    }

    /// Consecutive `(cuts[2k], cuts[2k + 1])` pairs. A trailing unpaired cut
    /// is ignored.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cuts.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Take the first two cuts when the list holds exactly two.
    pub fn as_span(&self) -> Option<(f64, f64)> {
        match self.cuts.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }
}

/// Clamp a computed cut position into `[0, 100]`.
///
/// Non-finite values (from a degenerate transform) are rejected.
pub fn clamp_percent(percent: f64) -> Option<f64> {
    percent.is_finite().then(|| percent.clamp(0.0, 100.0))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the list is non-decreasing after every insertion.
        #[test]
        fn prop_insert_sorted(values in proptest::collection::vec(0.0f64..=100.0, 0..40)) {
            let mut list = CutList::new();
            for v in values {
                list.insert(v);
                prop_assert!(list.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
