use crate::cells::WallDirection;
use crate::errors::*;
use crate::grid::MazeGrid;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

const BLACK: Rgb<u8> = Rgb { data: [0x00, 0x00, 0x00] };
const WHITE: Rgb<u8> = Rgb { data: [0xff, 0xff, 0xff] };
const BRICK_RED: Rgb<u8> = Rgb { data: [0xb2, 0x22, 0x22] };

pub struct RenderOptions<'path> {
    pub cell_side_pixels: usize,
    pub wall_colour: Rgb<u8>,
    pub background_colour: Rgb<u8>,
    pub enclosed_colour: Rgb<u8>,
    pub output_file: Option<&'path Path>,
}

pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels: 10,
                wall_colour: BLACK,
                background_colour: WHITE,
                enclosed_colour: BRICK_RED,
                output_file: None,
            },
        }
    }

    pub fn cell_side_pixels(mut self, cell_side_pixels: usize) -> Self {
        self.options.cell_side_pixels = cell_side_pixels;
        self
    }

    pub fn wall_colour(mut self, wall_colour: Rgb<u8>) -> Self {
        self.options.wall_colour = wall_colour;
        self
    }

    pub fn background_colour(mut self, background_colour: Rgb<u8>) -> Self {
        self.options.background_colour = background_colour;
        self
    }

    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

/// Render the wall grid to an image and optionally save it as a PNG.
///
/// Each cell is a `cell_side_pixels` square. Blocked walls become lines, a
/// carved passage is simply not drawn, and fully enclosed cells are filled
/// with the enclosed colour. One extra pixel row/column holds the south and
/// east outer boundary.
pub fn render_square_grid(grid: &MazeGrid, options: &RenderOptions) -> Result<RgbImage> {
    let image = render_image(grid, options);

    if let Some(file_path) = options.output_file {
        image.save(file_path)
            .chain_err(|| format!("Failed to write maze image file {}", file_path.display()))?;
    }

    Ok(image)
}

pub fn render_image(grid: &MazeGrid, options: &RenderOptions) -> RgbImage {
    let cell_pixels = options.cell_side_pixels.max(1);
    let image_width = (grid.columns().0 * cell_pixels + 1) as u32;
    let image_height = (grid.rows().0 * cell_pixels + 1) as u32;

    let mut image: RgbImage =
        ImageBuffer::from_pixel(image_width, image_height, options.background_colour);

    for cell in grid.iter() {
        let x1 = cell.column * cell_pixels;
        let y1 = cell.row * cell_pixels;
        let x2 = (cell.column + 1) * cell_pixels;
        let y2 = (cell.row + 1) * cell_pixels;

        if grid.cell(cell).is_fully_enclosed() {
            fill_rect(&mut image, x1 + 1, y1 + 1, x2 - 1, y2 - 1, options.enclosed_colour);
        }

        // Draw the north and west line only on the outer boundary; interior
        // walls are covered by the south/east pass of the adjacent cell.
        if grid.neighbour_at_direction(cell, WallDirection::Top).is_none() {
            horizontal_line(&mut image, x1, x2, y1, options.wall_colour);
        }
        if grid.neighbour_at_direction(cell, WallDirection::Left).is_none() {
            vertical_line(&mut image, x1, y1, y2, options.wall_colour);
        }

        if !grid.is_passage(cell, WallDirection::Right) {
            vertical_line(&mut image, x2, y1, y2, options.wall_colour);
        }
        if !grid.is_passage(cell, WallDirection::Bottom) {
            horizontal_line(&mut image, x1, x2, y2, options.wall_colour);
        }
    }

    image
}

fn horizontal_line(image: &mut RgbImage, x1: usize, x2: usize, y: usize, colour: Rgb<u8>) {
    for x in x1..=x2 {
        image.put_pixel(x as u32, y as u32, colour);
    }
}

fn vertical_line(image: &mut RgbImage, x: usize, y1: usize, y2: usize, colour: Rgb<u8>) {
    for y in y1..=y2 {
        image.put_pixel(x as u32, y as u32, colour);
    }
}

fn fill_rect(image: &mut RgbImage, x1: usize, y1: usize, x2: usize, y2: usize, colour: Rgb<u8>) {
    for y in y1..y2 {
        for x in x1..x2 {
            image.put_pixel(x as u32, y as u32, colour);
        }
    }
}
