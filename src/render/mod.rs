
use std::path::Path;
use clap::Args;
use image::{Rgba, RgbaImage};
use log::info;

use crate::{errors::RenderError, maze::{FragmentPosition, Maze, Side}};

const FLOOR_COLOR: Rgba<u8> = Rgba([235, 230, 215, 255]);
const WALL_COLOR: Rgba<u8> = Rgba([30, 30, 40, 255]);
const SOLUTION_COLOR: Rgba<u8> = Rgba([120, 200, 255, 255]);
const FRAGMENT_COLOR: Rgba<u8> = Rgba([245, 150, 0, 255]);
const START_COLOR: Rgba<u8> = Rgba([255, 40, 40, 255]);
const EXIT_COLOR: Rgba<u8> = Rgba([10, 225, 100, 255]);


#[derive(Debug, Args)]
#[clap(next_help_heading = "Rendering options")]
pub struct MazeRenderOptions {
    /// Size of one maze cell in pixels, including one wall.
    #[clap(long, default_value_t = 24)]
    pub cell_size: u32,

    /// Thickness of walls in pixels.
    #[clap(long, default_value_t = 3)]
    pub wall_thickness: u32,

    /// Highlight the path from the entrance to the exit.
    #[clap(long, short = 's')]
    pub draw_solution: bool,

    /// Draw markers on cells holding fragments.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub draw_fragments: bool,
}

impl Default for MazeRenderOptions {
    fn default() -> Self {
        MazeRenderOptions {
            cell_size: 24,
            wall_thickness: 3,
            draw_solution: false,
            draw_fragments: true,
        }
    }
}

/// Draws a top-down picture of the maze.
/// The image is `width * cell_size + wall_thickness` pixels wide (likewise for
/// height); cell (x, y) occupies the square starting at `(x, y) * cell_size`.
pub fn render_maze(maze: &Maze, fragments: &[FragmentPosition], options: &MazeRenderOptions) -> Result<RgbaImage, RenderError> {
    if maze.is_empty() || options.cell_size == 0 || options.wall_thickness >= options.cell_size {
        return Err(RenderError::InvalidMaze { seed: maze.seed(), width: maze.width(), height: maze.height() });
    }
    info!("Drawing maze image...");

    let cs = options.cell_size;
    let t = options.wall_thickness;
    let mut img = RgbaImage::from_pixel(
        maze.width() as u32 * cs + t,
        maze.height() as u32 * cs + t,
        FLOOR_COLOR,
    );

    if options.draw_solution {
        for (x, y) in maze.solve() {
            fill_cell(&mut img, x, y, cs, t, 0, SOLUTION_COLOR);
        }
    }

    let (end_x, end_y) = maze.end();
    fill_cell(&mut img, 0, 0, cs, t, cs / 4, START_COLOR);
    fill_cell(&mut img, end_x, end_y, cs, t, cs / 4, EXIT_COLOR);

    if options.draw_fragments {
        for fragment in fragments {
            let (x, y) = fragment.cell();
            if maze.cell(x, y).is_some() {
                fill_cell(&mut img, x, y, cs, t, cs / 3, FRAGMENT_COLOR);
            }
        }
    }

    for cell in maze.cells() {
        let px = cell.x() as u32 * cs;
        let py = cell.y() as u32 * cs;
        for side in Side::ALL.into_iter().filter(|side| cell.has_wall(*side)) {
            match side {
                Side::Top => fill_rect(&mut img, px, py, cs + t, t, WALL_COLOR),
                Side::Bottom => fill_rect(&mut img, px, py + cs, cs + t, t, WALL_COLOR),
                Side::Left => fill_rect(&mut img, px, py, t, cs + t, WALL_COLOR),
                Side::Right => fill_rect(&mut img, px + cs, py, t, cs + t, WALL_COLOR),
            }
        }
    }

    // Wall joints at every grid vertex.
    for y in 0..=maze.height() as u32 {
        for x in 0..=maze.width() as u32 {
            fill_rect(&mut img, x * cs, y * cs, t, t, WALL_COLOR);
        }
    }

    Ok(img)
}

pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, filename: P) -> Result<(), RenderError> {
    img.save_with_format(&filename, image::ImageFormat::Png)
        .map_err(|e| RenderError::IoError(filename.as_ref().display().to_string(), e.to_string()))?;
    Ok(())
}

/// Fills the open interior of a cell, shrunk by `inset` pixels on every side.
fn fill_cell(img: &mut RgbaImage, x: usize, y: usize, cs: u32, t: u32, inset: u32, color: Rgba<u8>) {
    let size = (cs - t).saturating_sub(inset * 2);
    if size == 0 {
        return;
    }
    let px = x as u32 * cs + t + inset;
    let py = y as u32 * cs + t + inset;
    fill_rect(img, px, py, size, size, color);
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}
