use crate::cells::{offset_position, CellWalls, GridPosition, NeighbourSmallVec, WallDirection,
                   WallState, DIRECTIONS};
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

/// A rows x columns collection of cell wall states.
///
/// Freshly constructed grids have every wall `Open`. The generator owns the
/// grid while carving and hands it back fully resolved; nothing mutates it
/// after that.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct MazeGrid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<CellWalls>,
}

impl MazeGrid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> MazeGrid {
        let cells_count = rows.0 * columns.0;
        MazeGrid {
            rows,
            columns,
            cells: vec![CellWalls::default(); cells_count],
        }
    }

    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// Row major index of a position, usable as a `petgraph` node index.
    pub fn position_index(&self, position: GridPosition) -> usize {
        position.row * self.columns.0 + position.column
    }

    pub fn position_from_index(&self, index: usize) -> GridPosition {
        let ColumnsCount(columns) = self.columns;
        GridPosition::from_indices(RowIndex(index / columns), ColumnIndex(index % columns))
    }

    /// The wall flags of one cell.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, position: GridPosition) -> CellWalls {
        self.cells[self.position_index(position)]
    }

    pub fn wall_at(&self, position: GridPosition, direction: WallDirection) -> WallState {
        self.cell(position).wall(direction)
    }

    pub fn is_passage(&self, position: GridPosition, direction: WallDirection) -> bool {
        self.wall_at(position, direction) == WallState::Path
    }

    pub fn neighbour_at_direction(&self,
                                  position: GridPosition,
                                  direction: WallDirection)
                                  -> Option<GridPosition> {
        offset_position(position, direction, self.rows, self.columns)
    }

    /// In-bounds orthogonal neighbours paired with the direction leading to
    /// them, in `DIRECTIONS` order.
    pub fn neighbours(&self, position: GridPosition) -> NeighbourSmallVec {
        DIRECTIONS
            .iter()
            .filter_map(|&direction| {
                self.neighbour_at_direction(position, direction)
                    .map(|neighbour| (direction, neighbour))
            })
            .collect()
    }

    /// Carve a passage through the shared wall in the given direction.
    ///
    /// Both sides of the wall become `Path`. Carving towards the outside of
    /// the grid is a no-op, so boundary walls can never open up.
    pub fn carve(&mut self, position: GridPosition, direction: WallDirection) {
        if let Some(neighbour) = self.neighbour_at_direction(position, direction) {
            let index = self.position_index(position);
            let neighbour_index = self.position_index(neighbour);
            self.cells[index].set_wall(direction, WallState::Path);
            self.cells[neighbour_index].set_wall(direction.opposite(), WallState::Path);
        }
    }

    /// Resolve all still `Open` walls of a cell to `Blocked`.
    pub fn seal_remaining_walls(&mut self, position: GridPosition) {
        let index = self.position_index(position);
        self.cells[index].seal_open_walls();
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.cells.iter().all(CellWalls::is_resolved)
    }

    pub fn iter(&self) -> PositionIter {
        PositionIter {
            current_cell_number: 0,
            cells_count: self.size(),
            columns: self.columns.0,
        }
    }

    pub fn iter_row(&self) -> RowIter {
        RowIter {
            current_row: 0,
            rows: self.rows.0,
            columns: self.columns.0,
        }
    }

    /// Every carved passage exactly once, as (cell, neighbour) pairs.
    ///
    /// Only the right and bottom side of each cell is inspected, which covers
    /// all shared walls once when walls are symmetric.
    pub fn passages(&self) -> Vec<(GridPosition, GridPosition)> {
        let mut pairs = Vec::new();
        for position in self.iter() {
            for &direction in &[WallDirection::Right, WallDirection::Bottom] {
                if self.is_passage(position, direction) {
                    if let Some(neighbour) = self.neighbour_at_direction(position, direction) {
                        pairs.push((position, neighbour));
                    }
                }
            }
        }
        pairs
    }

    pub fn passages_count(&self) -> usize {
        self.passages().len()
    }

    /// An undirected graph with one node per cell and one edge per carved
    /// passage. Node indices follow `position_index`.
    pub fn passage_graph(&self) -> Graph<(), (), Undirected> {
        let cells_count = self.size();
        let mut graph = Graph::<(), (), Undirected>::with_capacity(cells_count, cells_count);
        for _ in 0..cells_count {
            let _ = graph.add_node(());
        }
        for (a, b) in self.passages() {
            let a_index = NodeIndex::new(self.position_index(a));
            let b_index = NodeIndex::new(self.position_index(b));
            let _ = graph.update_edge(a_index, b_index, ());
        }
        graph
    }
}

impl<'a> IntoIterator for &'a MazeGrid {
    type Item = GridPosition;
    type IntoIter = PositionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct PositionIter {
    current_cell_number: usize,
    cells_count: usize,
    columns: usize,
}

impl Iterator for PositionIter {
    type Item = GridPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let index = self.current_cell_number;
            self.current_cell_number += 1;
            Some(GridPosition::new(index / self.columns, index % self.columns))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    rows: usize,
    columns: usize,
}

impl Iterator for RowIter {
    type Item = Vec<GridPosition>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.rows {
            let row = self.current_row;
            self.current_row += 1;
            Some((0..self.columns)
                     .map(|column| GridPosition::new(row, column))
                     .collect())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.current_row;
        (remaining, Some(remaining))
    }
}
