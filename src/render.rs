use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use rayon::prelude::*;

use crate::cell::Dir;
use crate::grid::{Grid, Pos};
use crate::maze::{Connectivity, Maze};
use crate::segments::{SegmentConvention, Wall};

// Palette
const MARGIN: [u8; 4] = [40, 42, 48, 255];
const UNVISITED: [u8; 4] = [90, 90, 96, 255];
const FLOOR: [u8; 4] = [236, 232, 222, 255];
const DEAD_END: [u8; 4] = [230, 196, 180, 255];
const SOLUTION: [u8; 4] = [120, 190, 235, 255];
const SHAFT: [u8; 4] = [90, 160, 215, 255];
const ENTRY: [u8; 4] = [60, 170, 80, 255];
const EXIT: [u8; 4] = [210, 70, 60, 255];
const WALL: [u8; 4] = [20, 20, 24, 255];

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Pixels per cell edge.
    pub scale: usize,
    pub show_solution: bool,
    pub show_dead_ends: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 12,
            show_solution: true,
            show_dead_ends: false,
        }
    }
}

/// Pixel budget for previews produced on request.
pub const MAX_PREVIEW_PIXELS: usize = 1 << 26;

/// Largest scale up to `requested` whose raster stays within
/// `MAX_PREVIEW_PIXELS`. Never below the renderer's minimum of 3.
pub fn fit_scale(requested: usize, cols: usize, rows: usize) -> usize {
    let cells = (cols * rows).max(1);
    let mut scale = requested.max(3);
    while scale > 3 && cells * scale * scale > MAX_PREVIEW_PIXELS {
        scale -= 1;
    }
    scale
}

/// RGBA8 pixels, row-major, top image row first.
pub struct Raster {
    pub rgba: Vec<u8>,
    pub w: usize,
    pub h: usize,
}

/// Fill colour of one cell tile.
fn tile_color(maze: &Maze, p: Pos, on_path: &Grid<bool>, opts: &RenderOptions) -> [u8; 4] {
    let c = maze.cell(p);
    if p == maze.entry_cell() {
        ENTRY
    } else if p == maze.exit_cell() {
        EXIT
    } else if c.is_invalid() {
        if c.degree() > 0 { SHAFT } else { MARGIN }
    } else if c.is_unvisited() {
        UNVISITED
    } else if opts.show_solution && on_path.get(p.x, p.y) {
        SOLUTION
    } else if opts.show_dead_ends && c.degree() == 1 {
        DEAD_END
    } else {
        FLOOR
    }
}

/// Paint one edge of a cell tile. The cylinder is unrolled with the seam at
/// the image sides and the top margin at the top of the image.
fn paint_edge(raster: &mut Raster, rows: usize, scale: usize, p: Pos, dir: Dir) {
    let x0 = p.x * scale;
    let y0 = (rows - 1 - p.y) * scale;
    let mut put = |px: usize, py: usize| {
        let i = (py * raster.w + px) * 4;
        raster.rgba[i..i + 4].copy_from_slice(&WALL);
    };
    for k in 0..scale {
        match dir {
            Dir::Left => put(x0, y0 + k),
            Dir::Right => put(x0 + scale - 1, y0 + k),
            Dir::Up => put(x0 + k, y0),
            Dir::Down => put(x0 + k, y0 + scale - 1),
        }
    }
}

/// Render a preview of the maze: floor tiles, walls where cells are not
/// connected, and optional solution and dead-end overlays.
pub fn render_maze(maze: &Maze, opts: &RenderOptions) -> Raster {
    let scale = opts.scale.max(3);
    let cols = maze.width();
    let rows = maze.height();
    let w = cols * scale;
    let h = rows * scale;

    let mut on_path = Grid::<bool>::new(cols, rows);
    for p in maze.solution_path() {
        on_path.set(p.x, p.y, true);
    }

    let mut raster = Raster {
        rgba: vec![0u8; w * h * 4],
        w,
        h,
    };

    raster
        .rgba
        .par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(py, row)| {
            let y = rows - 1 - py / scale;
            for x in 0..cols {
                let color = tile_color(maze, Pos::new(x, y), &on_path, opts);
                for px in x * scale..(x + 1) * scale {
                    row[px * 4..px * 4 + 4].copy_from_slice(&color);
                }
            }
        });

    // Walls come from the same convention the geometry stage would use, so
    // the preview shows exactly what gets printed.
    for seg in Wall.segments(maze) {
        paint_edge(&mut raster, rows, scale, seg.from, seg.dir);
        if let Some(to) = seg.to {
            paint_edge(&mut raster, rows, scale, to, seg.dir.opposite());
        }
    }

    raster
}

pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &raster.rgba,
        raster.w as u32,
        raster.h as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}
