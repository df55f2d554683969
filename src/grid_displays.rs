use crate::cells::{GridPosition, WallDirection, WallState};
use crate::grid::MazeGrid;
use std::fmt;

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

const OPEN_3: &str = "   ";
const ENCLOSED_BODY: &str = "▒▒▒";

/// Renders the text inside a cell, 3 characters wide.
pub trait CellBodyDisplay {
    fn render_cell_body(&self, position: GridPosition) -> String;
}

/// Labels every cell with its "row,column" position. The original toggleable
/// cell text of the maze view.
#[derive(Debug)]
pub struct PositionLabelDisplay;

impl CellBodyDisplay for PositionLabelDisplay {
    fn render_cell_body(&self, position: GridPosition) -> String {
        format!("{:^3}", format!("{},{}", position.row, position.column))
    }
}

/// Render the wall grid with box drawing characters.
///
/// `Blocked` walls are drawn, `Path` walls are left open and an `Open`
/// (unresolved) wall renders as open too, mirroring how the border view
/// treats anything not explicitly blocked. Cells with all four sides blocked
/// get a filled body so unreachable space is visible.
pub fn render_text(grid: &MazeGrid, body_display: Option<&dyn CellBodyDisplay>) -> String {
    let rows = grid.rows().0;
    let columns = grid.columns().0;

    // The wall between lattice row `i` and `i - 1`, below/above cell column
    // `j`. Reads the top wall for the outer boundary and the shared bottom
    // wall otherwise.
    let horizontal_blocked = |i: usize, j: usize| {
        let state = if i == 0 {
            grid.wall_at(GridPosition::new(0, j), WallDirection::Top)
        } else {
            grid.wall_at(GridPosition::new(i - 1, j), WallDirection::Bottom)
        };
        state == WallState::Blocked
    };
    let vertical_blocked = |i: usize, j: usize| {
        let state = if j == 0 {
            grid.wall_at(GridPosition::new(i, 0), WallDirection::Left)
        } else {
            grid.wall_at(GridPosition::new(i, j - 1), WallDirection::Right)
        };
        state == WallState::Blocked
    };

    let mut output = String::new();

    for i in 0..=rows {

        // Lattice line: corners and the horizontal wall segments between them.
        for j in 0..columns {
            let up = i > 0 && vertical_blocked(i - 1, j);
            let down = i < rows && vertical_blocked(i, j);
            let left = j > 0 && horizontal_blocked(i, j - 1);
            let right = horizontal_blocked(i, j);
            output.push_str(corner_glyph(left, right, up, down));
            output.push_str(if horizontal_blocked(i, j) { WALL_LR_3 } else { OPEN_3 });
        }
        let up = i > 0 && vertical_blocked(i - 1, columns);
        let down = i < rows && vertical_blocked(i, columns);
        let left = columns > 0 && horizontal_blocked(i, columns - 1);
        output.push_str(corner_glyph(left, false, up, down));
        output.push('\n');

        // Cell line: vertical wall segments and cell bodies.
        if i < rows {
            for j in 0..columns {
                output.push_str(if vertical_blocked(i, j) { WALL_UD } else { " " });

                let position = GridPosition::new(i, j);
                match body_display {
                    Some(displayer) => output.push_str(&displayer.render_cell_body(position)),
                    None => {
                        if grid.cell(position).is_fully_enclosed() {
                            output.push_str(ENCLOSED_BODY);
                        } else {
                            output.push_str(OPEN_3);
                        }
                    }
                }
            }
            output.push_str(if vertical_blocked(i, columns) { WALL_UD } else { " " });
            output.push('\n');
        }
    }

    output
}

fn corner_glyph(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        (false, false, false, false) => " ",
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, None))
    }
}
