use image::RgbImage;

use crate::foundation::core::{Category, GRID_SIDE, Rgb8, TrackLayout};
use crate::foundation::error::{RacetrackError, RacetrackResult};
use crate::track::grid::CategoryGrid;

/// Classify a racetrack image into a category grid.
///
/// The image is split into `GRID_SIDE x GRID_SIDE` non-overlapping blocks of
/// `layout.block_side()` pixels. A block takes the category of the first reference color
/// (black, green, red) that any of its pixels matches exactly; blocks with no match are
/// open track.
#[tracing::instrument(skip(img, layout), fields(width = img.width(), height = img.height()))]
pub fn discretize(img: &RgbImage, layout: &TrackLayout) -> RacetrackResult<CategoryGrid> {
    layout.validate()?;
    let (w, h) = img.dimensions();
    if w != layout.image_side || h != layout.image_side {
        return Err(RacetrackError::shape(format!(
            "expected a {side}x{side}x3 image, got {w}x{h}x3",
            side = layout.image_side
        )));
    }

    let block = layout.block_side();
    let refs = layout.palette.reference_colors();
    let mut grid = CategoryGrid::filled(Category::Track);

    for i in 0..GRID_SIDE {
        for j in 0..GRID_SIDE {
            let row0 = block * i as u32;
            let col0 = block * j as u32;
            let cat = refs
                .iter()
                .find(|(_, color)| block_contains(img, row0, col0, block, *color))
                .map(|(cat, _)| *cat)
                .unwrap_or(Category::Track);
            grid.set(i, j, cat);
        }
    }

    tracing::debug!(
        boundary = grid.count(Category::Boundary),
        start = grid.count(Category::Start),
        finish = grid.count(Category::Finish),
        track = grid.count(Category::Track),
        "discretized image"
    );
    Ok(grid)
}

// Rows index `y`, columns index `x` in image coordinates.
fn block_contains(img: &RgbImage, row0: u32, col0: u32, block: u32, color: Rgb8) -> bool {
    (row0..row0 + block).any(|y| (col0..col0 + block).any(|x| *img.get_pixel(x, y) == color))
}

#[cfg(test)]
#[path = "../../tests/unit/track/discretize.rs"]
mod tests;
