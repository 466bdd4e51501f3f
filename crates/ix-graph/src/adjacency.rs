//! Compressed sparse row adjacency.
//!
//! Given row `r`, its entries occupy the contiguous slice
//!
//! ```text
//! entries[ row_start[r] .. row_start[r+1] ]
//! ```
//!
//! Rows keep the insertion order of their entries (the fill is a stable
//! counting sort), so traversals over a fixed graph are reproducible.

/// Outgoing-entry index over `row_count` rows.
#[derive(Clone, Debug)]
pub struct Adjacency<T> {
    /// CSR row pointer.  Length = `row_count + 1`.
    row_start: Vec<u32>,
    entries:   Vec<T>,
}

impl<T: Copy> Adjacency<T> {
    /// Build from `(row, entry)` pairs.  Every row must be `< row_count`.
    pub fn from_pairs(row_count: usize, pairs: &[(usize, T)]) -> Self {
        let mut row_start = vec![0u32; row_count + 1];
        for &(row, _) in pairs {
            row_start[row + 1] += 1;
        }
        for i in 1..=row_count {
            row_start[i] += row_start[i - 1];
        }
        debug_assert_eq!(row_start[row_count] as usize, pairs.len());

        // Second pass places entries at each row's write cursor.
        let mut cursor: Vec<u32> = row_start[..row_count].to_vec();
        let mut slots: Vec<Option<T>> = vec![None; pairs.len()];
        for &(row, entry) in pairs {
            slots[cursor[row] as usize] = Some(entry);
            cursor[row] += 1;
        }

        Self {
            row_start,
            entries: slots.into_iter().flatten().collect(),
        }
    }

    /// Entries of `row`, in insertion order.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.row_start[row] as usize;
        let end   = self.row_start[row + 1] as usize;
        &self.entries[start..end]
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_start.len() - 1
    }

    /// Total number of entries across all rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
