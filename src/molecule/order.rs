/// Mapping between native atom indices and 1-based ATOM block rows.
///
/// The ATOM block lists atoms grouped by element, so row numbers differ from
/// the order in which atoms were read. BOND rows must reference atoms by row,
/// which is what this table translates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomOrder {
    /// `rows[r]` is the native index written on row `r + 1`.
    rows: Vec<usize>,
    /// `row_of[i]` is the 1-based row of native atom `i`.
    row_of: Vec<usize>,
}

impl AtomOrder {
    /// Builds the table from native indices listed in row order.
    ///
    /// `rows` must be a permutation of `0..rows.len()`.
    pub(crate) fn from_rows(rows: Vec<usize>) -> Self {
        let mut row_of = vec![0; rows.len()];
        for (r, &native) in rows.iter().enumerate() {
            row_of[native] = r + 1;
        }
        Self { rows, row_of }
    }

    /// 1-based ATOM row of native atom `native`.
    #[inline]
    pub fn row_of(&self, native: usize) -> Option<usize> {
        self.row_of.get(native).copied()
    }

    /// Native index of the atom written on 1-based row `row`.
    #[inline]
    pub fn native_at(&self, row: usize) -> Option<usize> {
        row.checked_sub(1).and_then(|r| self.rows.get(r)).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(row, native)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().map(|(r, &native)| (r + 1, native))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_ways() {
        let order = AtomOrder::from_rows(vec![2, 0, 1]);
        assert_eq!(order.row_of(2), Some(1));
        assert_eq!(order.row_of(0), Some(2));
        assert_eq!(order.row_of(1), Some(3));
        assert_eq!(order.row_of(3), None);
        assert_eq!(order.native_at(1), Some(2));
        assert_eq!(order.native_at(0), None);
        assert_eq!(order.native_at(4), None);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![(1, 2), (2, 0), (3, 1)]);
        assert_eq!(order.len(), 3);
        assert!(!order.is_empty());
    }
}
