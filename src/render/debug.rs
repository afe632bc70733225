use std::path::Path;

use image::{RgbImage, imageops};

use crate::foundation::core::{GRID_SIDE, TrackLayout};
use crate::foundation::error::{RacetrackError, RacetrackResult};
use crate::track::grid::CategoryGrid;

/// False-color a grid and upscale it to `layout.image_side` square pixels.
///
/// Upscaling is nearest-neighbour, so every output pixel is an exact palette color.
pub fn render_grid(grid: &CategoryGrid, layout: &TrackLayout) -> RgbImage {
    let side = GRID_SIDE as u32;
    let mut cells = RgbImage::new(side, side);
    for ((i, j), cat) in grid.cells() {
        cells.put_pixel(j as u32, i as u32, layout.palette.color(cat));
    }
    imageops::resize(
        &cells,
        layout.image_side,
        layout.image_side,
        imageops::FilterType::Nearest,
    )
}

/// Render raw category bytes, rejecting anything that is not a valid grid.
pub fn render_category_bytes(bytes: &[u8], layout: &TrackLayout) -> RacetrackResult<RgbImage> {
    let grid = CategoryGrid::from_bytes(bytes)?;
    Ok(render_grid(&grid, layout))
}

/// Write an image; the encoder is chosen from the file extension.
pub fn save_image(path: &Path, img: &RgbImage) -> RacetrackResult<()> {
    ensure_parent_dir(path)?;
    img.save(path).map_err(|e| match e {
        image::ImageError::IoError(source) => RacetrackError::io(path, source),
        other => RacetrackError::Other(
            anyhow::Error::new(other).context(format!("encode image '{}'", path.display())),
        ),
    })?;
    tracing::debug!(path = %path.display(), "wrote image");
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> RacetrackResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RacetrackError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/debug.rs"]
mod tests;
