//! Per-cell ledger of successful eliminations.

use snake_pit_core::{Bounds, CellCoord, HistoryView};

/// Dense elimination counters covering every cell of the pit.
///
/// Counters only ever grow; nothing resets them during a session.
#[derive(Clone, Debug)]
pub struct History {
    bounds: Bounds,
    counts: Vec<u32>,
}

impl History {
    /// Creates a ledger with every counter at zero.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            counts: vec![0; bounds.cell_count()],
        }
    }

    /// Credits one elimination at `cell`.
    ///
    /// Returns `false` and leaves every counter untouched when the cell lies
    /// outside the pit.
    pub fn record(&mut self, cell: CellCoord) -> bool {
        let Some(slot) = self
            .bounds
            .index(cell)
            .and_then(|index| self.counts.get_mut(index))
        else {
            return false;
        };
        *slot = slot.saturating_add(1);
        true
    }

    /// Eliminations recorded at `cell`; zero outside the pit.
    #[must_use]
    pub fn count(&self, cell: CellCoord) -> u32 {
        self.bounds
            .index(cell)
            .and_then(|index| self.counts.get(index).copied())
            .unwrap_or(0)
    }

    /// Sum of every counter.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| u64::from(*count)).sum()
    }

    /// Captures a read-only copy for presentation.
    #[must_use]
    pub fn view(&self) -> HistoryView {
        HistoryView::new(self.bounds, self.counts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_cells_outside_the_pit() {
        let bounds = Bounds::new(2, 3);
        let mut history = History::new(bounds);
        let before = history.view();

        for cell in [
            CellCoord::new(0, 1),
            CellCoord::new(1, 0),
            CellCoord::new(3, 1),
            CellCoord::new(1, 4),
            CellCoord::new(u32::MAX, u32::MAX),
        ] {
            assert!(!history.record(cell), "{cell} should be rejected");
        }

        assert_eq!(history.view(), before);
        assert_eq!(history.total(), 0);
    }

    #[test]
    fn repeated_records_accumulate_independently_per_cell() {
        let mut history = History::new(Bounds::new(2, 2));
        let plan = [
            (CellCoord::new(1, 1), 100),
            (CellCoord::new(1, 2), 3),
            (CellCoord::new(2, 1), 7),
            (CellCoord::new(2, 2), 18),
        ];

        // Interleave the cells so call order differs from the final layout.
        let longest = plan.iter().map(|(_, times)| *times).max().unwrap_or(0);
        for round in 0..longest {
            for (cell, times) in plan.iter().rev() {
                if round < *times {
                    assert!(history.record(*cell));
                }
            }
        }

        for (cell, times) in plan {
            assert_eq!(history.count(cell), times, "unexpected count at {cell}");
        }
        assert_eq!(history.total(), 128);
    }

    #[test]
    fn new_ledger_starts_at_zero_everywhere() {
        let bounds = Bounds::new(3, 4);
        let history = History::new(bounds);
        assert!(bounds.cells().all(|cell| history.count(cell) == 0));
    }
}
