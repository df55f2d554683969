use docopt::Docopt;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};
use wallmaze::{
    generators,
    grid::MazeGrid,
    grid_displays::{self, PositionLabelDisplay},
    renderers::{self, RenderOptionsBuilder},
    units::{ColumnsCount, RowsCount},
};

const USAGE: &str = "Wallmaze

Usage:
    wallmaze_driver -h | --help
    wallmaze_driver [--rows=<r>] [--columns=<c>] [--show-positions] [--text-out=<path>] [--image-out=<path>] [--cell-pixels=<n>] [--save-edges=<path>]

Options:
    -h --help            Show this screen.
    --rows=<r>           Number of rows in the maze grid [default: 10].
    --columns=<c>        Number of columns in the maze grid [default: 10].
    --show-positions     Label every cell with its row,column position in the text rendering.
    --text-out=<path>    Output file path for the textual rendering (stdout when omitted).
    --image-out=<path>   Output file path for an image rendering of the maze. Always PNG format.
    --cell-pixels=<n>    Pixel count to render one cell side in the image [default: 10].
    --save-edges=<path>  Serialize the carved passages to a text file: line 1 is n(#cells) m(#passages), then one pair of 1-based cell indices per line.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_show_positions: bool,
    flag_text_out: String,
    flag_image_out: String,
    flag_cell_pixels: usize,
    flag_save_edges: String,
}

// Driver-local errors: link the library error type and wrap the failures of
// the collaborators the driver talks to directly.
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Wallmaze(::wallmaze::errors::Error, ::wallmaze::errors::ErrorKind);
        }
        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let maze = generators::recursive_backtracker(RowsCount(args.flag_rows),
                                                 ColumnsCount(args.flag_columns))?;

    let rendered = if args.flag_show_positions {
        grid_displays::render_text(&maze, Some(&PositionLabelDisplay))
    } else {
        format!("{}", maze)
    };
    if args.flag_text_out.is_empty() {
        println!("{}", rendered);
    } else {
        write_text_to_file(&rendered, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let render_options = RenderOptionsBuilder::new()
            .cell_side_pixels(args.flag_cell_pixels)
            .output_file(Some(Path::new(&args.flag_image_out)))
            .build();
        renderers::render_square_grid(&maze, &render_options)?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_edges(&maze, &args.flag_save_edges)?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_edges(maze: &MazeGrid, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let cells_count = maze.size();
    let passages = maze.passages();
    graph_data.push_str(&cells_count.to_string());
    graph_data.push(' ');
    graph_data.push_str(&passages.len().to_string());
    graph_data.push('\n');

    for (src, dst) in passages {
        let src_as_1_based_index = maze.position_index(src) + 1;
        let dst_as_1_based_index = maze.position_index(dst) + 1;

        graph_data.push_str(&src_as_1_based_index.to_string());
        graph_data.push(' ');
        graph_data.push_str(&dst_as_1_based_index.to_string());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze edges to text file {}", file_path))?;

    Ok(())
}
