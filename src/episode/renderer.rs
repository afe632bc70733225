use std::path::{Path, PathBuf};

use crate::episode::model::{Episode, Position};
use crate::foundation::core::{Category, TrackLayout};
use crate::foundation::error::{RacetrackError, RacetrackResult};
use crate::render::debug::{render_grid, save_image};
use crate::track::grid::CategoryGrid;

/// How visited positions accumulate across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayMode {
    /// Overlays are written into one shared grid and never cleared, so each frame shows
    /// every position visited so far.
    #[default]
    Cumulative,
    /// Each frame starts from the loaded track and shows only the current position.
    SingleMarker,
}

#[derive(Clone, Debug)]
pub struct RenderOpts {
    pub layout: TrackLayout,
    pub overlay: OverlayMode,
    /// Frame file extension; selects the image encoder.
    pub extension: String,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            layout: TrackLayout::STANDARD,
            overlay: OverlayMode::default(),
            extension: "png".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderReport {
    /// Written frame paths, in episode order.
    pub frames: Vec<PathBuf>,
}

/// `frame000.png`, `frame001.png`, ...
pub fn frame_file_name(index: usize, extension: &str) -> String {
    format!("frame{index:03}.{extension}")
}

/// Per-position grid snapshots of an episode replayed over a track.
pub struct EpisodeFrames<'a> {
    track: &'a CategoryGrid,
    working: CategoryGrid,
    positions: std::iter::Enumerate<std::slice::Iter<'a, Position>>,
    overlay: OverlayMode,
}

impl<'a> EpisodeFrames<'a> {
    /// Fails if any position of `episode` lies outside the grid.
    pub fn new(
        track: &'a CategoryGrid,
        episode: &'a Episode,
        overlay: OverlayMode,
    ) -> RacetrackResult<Self> {
        episode.validate()?;
        Ok(Self {
            track,
            working: track.clone(),
            positions: episode.positions.iter().enumerate(),
            overlay,
        })
    }
}

impl Iterator for EpisodeFrames<'_> {
    type Item = (usize, CategoryGrid);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, pos) = self.positions.next()?;
        // Validated in `new`.
        let (i, j) = pos.cell()?;
        if self.overlay == OverlayMode::SingleMarker {
            self.working.clone_from(self.track);
        }
        self.working.set(i, j, Category::Finish);
        Some((index, self.working.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

/// Render one frame per episode position into `out_dir`.
///
/// The episode is validated before the directory is created or any frame is written.
#[tracing::instrument(skip(track, episode, opts), fields(positions = episode.len()))]
pub fn render_episode(
    track: &CategoryGrid,
    episode: &Episode,
    out_dir: &Path,
    opts: &RenderOpts,
) -> RacetrackResult<RenderReport> {
    opts.layout.validate()?;
    let frames = EpisodeFrames::new(track, episode, opts.overlay)?;

    std::fs::create_dir_all(out_dir).map_err(|e| RacetrackError::io(out_dir, e))?;

    let mut report = RenderReport::default();
    for (index, grid) in frames {
        let path = out_dir.join(frame_file_name(index, &opts.extension));
        let img = render_grid(&grid, &opts.layout);
        save_image(&path, &img)?;
        report.frames.push(path);
    }

    tracing::info!(
        frames = report.frames.len(),
        out_dir = %out_dir.display(),
        "rendered episode"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/episode/renderer.rs"]
mod tests;
