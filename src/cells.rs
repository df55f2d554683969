use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};
use smallvec::SmallVec;

/// A cell location on the grid, 0-indexed from the top-left corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> GridPosition {
        GridPosition { row, column }
    }

    pub fn from_indices(row_index: RowIndex, column_index: ColumnIndex) -> GridPosition {
        let (RowIndex(row), ColumnIndex(column)) = (row_index, column_index);
        GridPosition { row, column }
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from(row_column_pair: (usize, usize)) -> GridPosition {
        GridPosition::new(row_column_pair.0, row_column_pair.1)
    }
}

/// One side of a cell. `Top` of one cell is the same physical wall as
/// `Bottom` of the cell above it.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallDirection {
    Top,
    Right,
    Bottom,
    Left,
}

/// Fixed iteration order for the four sides of a cell.
pub const DIRECTIONS: [WallDirection; 4] = [
    WallDirection::Top,
    WallDirection::Right,
    WallDirection::Bottom,
    WallDirection::Left,
];

impl WallDirection {
    /// The direction of the same shared wall as seen from the adjacent cell.
    pub fn opposite(self) -> WallDirection {
        match self {
            WallDirection::Top => WallDirection::Bottom,
            WallDirection::Right => WallDirection::Left,
            WallDirection::Bottom => WallDirection::Top,
            WallDirection::Left => WallDirection::Right,
        }
    }
}

/// The resolution state of one wall of one cell.
///
/// `Open` only exists while a maze is being carved. A finished maze has every
/// wall resolved to `Path` or `Blocked`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallState {
    Open,
    Path,
    Blocked,
}

/// The four wall flags of a single cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellWalls {
    pub top: WallState,
    pub right: WallState,
    pub bottom: WallState,
    pub left: WallState,
}

impl Default for CellWalls {
    fn default() -> CellWalls {
        CellWalls {
            top: WallState::Open,
            right: WallState::Open,
            bottom: WallState::Open,
            left: WallState::Open,
        }
    }
}

impl CellWalls {
    pub fn wall(&self, direction: WallDirection) -> WallState {
        match direction {
            WallDirection::Top => self.top,
            WallDirection::Right => self.right,
            WallDirection::Bottom => self.bottom,
            WallDirection::Left => self.left,
        }
    }

    pub fn set_wall(&mut self, direction: WallDirection, state: WallState) {
        match direction {
            WallDirection::Top => self.top = state,
            WallDirection::Right => self.right = state,
            WallDirection::Bottom => self.bottom = state,
            WallDirection::Left => self.left = state,
        }
    }

    /// Resolve every still undecided wall to `Blocked`.
    ///
    /// Carved passages are untouched.
    pub fn seal_open_walls(&mut self) {
        for &direction in DIRECTIONS.iter() {
            if self.wall(direction) == WallState::Open {
                self.set_wall(direction, WallState::Blocked);
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        DIRECTIONS
            .iter()
            .all(|&direction| self.wall(direction) != WallState::Open)
    }

    /// Number of sides carved through to a neighbouring cell.
    pub fn passage_count(&self) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&direction| self.wall(direction) == WallState::Path)
            .count()
    }

    /// A cell with every side blocked looks like solid wall when rendered.
    pub fn is_fully_enclosed(&self) -> bool {
        DIRECTIONS
            .iter()
            .all(|&direction| self.wall(direction) == WallState::Blocked)
    }
}

pub type NeighbourSmallVec = SmallVec<[(WallDirection, GridPosition); 4]>;

/// The position one cell away in the given direction.
/// Returns None if that would leave the rows x columns grid.
pub fn offset_position(position: GridPosition,
                       direction: WallDirection,
                       rows: RowsCount,
                       columns: ColumnsCount)
                       -> Option<GridPosition> {
    let (row, column) = (position.row, position.column);
    match direction {
        WallDirection::Top => {
            if row > 0 {
                Some(GridPosition::new(row - 1, column))
            } else {
                None
            }
        }
        WallDirection::Right => {
            if column + 1 < columns.0 {
                Some(GridPosition::new(row, column + 1))
            } else {
                None
            }
        }
        WallDirection::Bottom => {
            if row + 1 < rows.0 {
                Some(GridPosition::new(row + 1, column))
            } else {
                None
            }
        }
        WallDirection::Left => {
            if column > 0 {
                Some(GridPosition::new(row, column - 1))
            } else {
                None
            }
        }
    }
}
