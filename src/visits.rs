use crate::cells::GridPosition;
use crate::units::{ColumnsCount, RowsCount};
use bit_set::BitSet;

/// Tracks which cells the carve has already been run from.
///
/// Marking is monotonic: once a cell is visited it stays visited for the
/// lifetime of the map. The visited count is kept separately from the carve
/// stack so the generator loop can terminate even when the stack empties
/// early.
#[derive(Debug)]
pub struct VisitationMap {
    visited: BitSet,
    rows: usize,
    columns: usize,
    visited_count: usize,
}

impl VisitationMap {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> VisitationMap {
        let cells_count = rows.0 * columns.0;
        VisitationMap {
            visited: BitSet::with_capacity(cells_count),
            rows: rows.0,
            columns: columns.0,
            visited_count: 0,
        }
    }

    fn bit_index(&self, position: GridPosition) -> usize {
        position.row * self.columns + position.column
    }

    /// Mark a cell visited. Idempotent: the count only moves on the first
    /// visit.
    pub fn mark_visited(&mut self, position: GridPosition) {
        let bit_index = self.bit_index(position);
        if self.visited.insert(bit_index) {
            self.visited_count += 1;
        }
    }

    pub fn is_visited(&self, position: GridPosition) -> bool {
        self.visited.contains(self.bit_index(position))
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn is_complete(&self) -> bool {
        self.visited_count == self.rows * self.columns
    }

    /// Positions never carved from, in row major order.
    pub fn unvisited_positions(&self) -> Vec<GridPosition> {
        let cells_count = self.rows * self.columns;
        (0..cells_count)
            .filter(|&bit_index| !self.visited.contains(bit_index))
            .map(|bit_index| GridPosition::new(bit_index / self.columns, bit_index % self.columns))
            .collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn marking_is_monotonic_and_counted_once() {
        let mut visits = VisitationMap::new(RowsCount(2), ColumnsCount(2));
        let position = GridPosition::new(1, 0);

        assert!(!visits.is_visited(position));
        assert_eq!(visits.visited_count(), 0);

        visits.mark_visited(position);
        assert!(visits.is_visited(position));
        assert_eq!(visits.visited_count(), 1);

        visits.mark_visited(position);
        assert!(visits.is_visited(position));
        assert_eq!(visits.visited_count(), 1);
    }

    #[test]
    fn completion_requires_every_cell() {
        let mut visits = VisitationMap::new(RowsCount(2), ColumnsCount(2));
        for row in 0..2 {
            for column in 0..2 {
                assert!(!visits.is_complete());
                visits.mark_visited(GridPosition::new(row, column));
            }
        }
        assert!(visits.is_complete());
        assert_eq!(visits.visited_count(), 4);
    }

    #[test]
    fn unvisited_positions_in_row_major_order() {
        let mut visits = VisitationMap::new(RowsCount(2), ColumnsCount(3));
        visits.mark_visited(GridPosition::new(0, 1));
        visits.mark_visited(GridPosition::new(1, 2));

        assert_eq!(visits.unvisited_positions(),
                   vec![GridPosition::new(0, 0),
                        GridPosition::new(0, 2),
                        GridPosition::new(1, 0),
                        GridPosition::new(1, 1)]);
    }
}
