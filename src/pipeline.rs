//! File-level conversions: whole-file reads, validation, then writes.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;

use crate::episode::model::Episode;
use crate::episode::renderer::{RenderOpts, RenderReport, render_episode};
use crate::foundation::core::{Category, GRID_CELLS, TrackLayout};
use crate::foundation::error::{RacetrackError, RacetrackResult};
use crate::render::debug::{ensure_parent_dir, render_grid, save_image};
use crate::track::discretize::discretize;
use crate::track::grid::CategoryGrid;

#[derive(Clone, Debug)]
pub struct DiscretizeOpts {
    /// Source racetrack image.
    pub image: PathBuf,
    /// Where to write the debug render, if wanted.
    pub debug: Option<PathBuf>,
    /// Track file output.
    pub out: PathBuf,
    pub layout: TrackLayout,
}

#[derive(Clone, Debug)]
pub struct RenderEpisodeOpts {
    pub track: PathBuf,
    pub episode: PathBuf,
    pub output_dir: PathBuf,
    pub render: RenderOpts,
}

/// Per-category cell counts and marker locations of a track.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TrackSummary {
    pub cells: usize,
    pub boundary: usize,
    pub start: usize,
    pub finish: usize,
    pub track: usize,
    /// `(i, j)` of every start cell, row-major.
    pub start_cells: Vec<[usize; 2]>,
    /// `(i, j)` of every finish cell, row-major.
    pub finish_cells: Vec<[usize; 2]>,
}

/// Decode an image file into 8-bit RGB; inputs with other than three channels are rejected.
pub fn load_image(path: &Path) -> RacetrackResult<RgbImage> {
    let bytes = std::fs::read(path).map_err(|e| RacetrackError::io(path, e))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    let channels = img.color().channel_count();
    if channels != 3 {
        return Err(RacetrackError::shape(format!(
            "expected a {w}x{h}x3 image, got {w}x{h}x{channels}",
            w = img.width(),
            h = img.height()
        )));
    }
    Ok(img.to_rgb8())
}

pub fn load_track(path: &Path) -> RacetrackResult<CategoryGrid> {
    let bytes = std::fs::read(path).map_err(|e| RacetrackError::io(path, e))?;
    CategoryGrid::from_bytes(&bytes)
}

pub fn write_track(path: &Path, grid: &CategoryGrid) -> RacetrackResult<()> {
    ensure_parent_dir(path)?;
    let bytes = grid.to_bytes();
    debug_assert_eq!(bytes.len(), GRID_CELLS);
    std::fs::write(path, bytes).map_err(|e| RacetrackError::io(path, e))?;
    tracing::debug!(path = %path.display(), "wrote track file");
    Ok(())
}

pub fn load_episode(path: &Path) -> RacetrackResult<Episode> {
    let bytes = std::fs::read(path).map_err(|e| RacetrackError::io(path, e))?;
    Episode::from_bytes(&bytes)
}

/// Image file to track file, plus an optional debug render.
///
/// Nothing is written unless the image has the expected shape and yields a track with walls.
#[tracing::instrument(skip(opts), fields(image = %opts.image.display()))]
pub fn discretize_track_file(opts: &DiscretizeOpts) -> RacetrackResult<CategoryGrid> {
    let img = load_image(&opts.image)?;
    let grid = discretize(&img, &opts.layout)?;
    grid.ensure_walls()?;

    if let Some(debug) = &opts.debug {
        save_image(debug, &render_grid(&grid, &opts.layout))?;
    }
    write_track(&opts.out, &grid)?;

    tracing::info!(out = %opts.out.display(), "wrote discretized track");
    Ok(grid)
}

/// Track file + episode file to numbered frames.
///
/// Both inputs are fully loaded and validated before any frame is written.
#[tracing::instrument(
    skip(opts),
    fields(track = %opts.track.display(), episode = %opts.episode.display())
)]
pub fn render_episode_files(opts: &RenderEpisodeOpts) -> RacetrackResult<RenderReport> {
    let track = load_track(&opts.track)?;
    let episode = load_episode(&opts.episode)?;
    render_episode(&track, &episode, &opts.output_dir, &opts.render)
}

pub fn summarize_track(grid: &CategoryGrid) -> TrackSummary {
    let cells_of = |cat: Category| {
        grid.cells()
            .filter(|(_, c)| *c == cat)
            .map(|((i, j), _)| [i, j])
            .collect::<Vec<_>>()
    };
    TrackSummary {
        cells: GRID_CELLS,
        boundary: grid.count(Category::Boundary),
        start: grid.count(Category::Start),
        finish: grid.count(Category::Finish),
        track: grid.count(Category::Track),
        start_cells: cells_of(Category::Start),
        finish_cells: cells_of(Category::Finish),
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
