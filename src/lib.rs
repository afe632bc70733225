//! Racetrack is a pair of small conversion utilities around a discrete track encoding.
//!
//! # Pipelines
//!
//! 1. **Discretize**: `RgbImage (600x600) -> CategoryGrid (50x50)` via exact-color block
//!    classification, then written as a 2500-byte track file (plus an optional debug render).
//! 2. **Render episode**: `track file + episode file -> frame000.png, frame001.png, ...`,
//!    one false-colored frame per recorded agent position.
//!
//! The two pipelines share nothing at runtime except the binary file layouts:
//!
//! - **Track file**: exactly 2500 bytes, byte `50*i + j` is the [`Category`] of cell `(i, j)`.
//! - **Episode file**: a sequence of `(x, y)` byte pairs, 1-indexed.
//!
//! Both layouts are consumed by external simulation tooling and must stay byte-exact.
#![forbid(unsafe_code)]

mod episode;
mod foundation;
mod pipeline;
mod render;
mod track;

pub use episode::model::{Episode, Position};
pub use episode::renderer::{
    EpisodeFrames, OverlayMode, RenderOpts, RenderReport, frame_file_name, render_episode,
};
pub use foundation::core::{
    Category, GRID_CELLS, GRID_SIDE, IMAGE_SIDE, Palette, Rgb8, TrackLayout,
};
pub use foundation::error::{RacetrackError, RacetrackResult};
pub use pipeline::{
    DiscretizeOpts, RenderEpisodeOpts, TrackSummary, discretize_track_file, load_episode,
    load_image, load_track, render_episode_files, summarize_track, write_track,
};
pub use render::debug::{render_category_bytes, render_grid, save_image};
pub use track::discretize::discretize;
pub use track::grid::CategoryGrid;
