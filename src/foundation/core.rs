use crate::foundation::error::{RacetrackError, RacetrackResult};

/// Side length of the category grid, in cells.
pub const GRID_SIDE: usize = 50;
/// Number of cells in the category grid (and bytes in a track file).
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;
/// Side length of source images and rendered frames, in pixels.
pub const IMAGE_SIDE: u32 = 600;

/// 8-bit RGB color as stored by the `image` crate.
pub type Rgb8 = image::Rgb<u8>;

/// Classification of one grid cell.
///
/// The discriminants are the on-disk byte values.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Wall or off-track area.
    Boundary = 0,
    /// Start line marker.
    Start = 1,
    /// Finish line marker; also used to overlay visited agent positions.
    Finish = 2,
    /// Open, drivable track.
    Track = 3,
}

impl Category {
    /// All categories in byte order.
    pub const ALL: [Category; 4] = [
        Category::Boundary,
        Category::Start,
        Category::Finish,
        Category::Track,
    ];

    /// Byte value written to track files.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Category {
    type Error = RacetrackError;

    fn try_from(v: u8) -> RacetrackResult<Self> {
        match v {
            0 => Ok(Self::Boundary),
            1 => Ok(Self::Start),
            2 => Ok(Self::Finish),
            3 => Ok(Self::Track),
            other => Err(RacetrackError::CategoryRange(other)),
        }
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> Self {
        c.as_u8()
    }
}

/// Category to color lookup used for classification and rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Colors indexed by category byte value.
    pub colors: [Rgb8; 4],
}

impl Palette {
    /// Black boundary, green start, red finish, white track.
    pub const STANDARD: Palette = Palette {
        colors: [
            image::Rgb([0, 0, 0]),
            image::Rgb([0, 255, 0]),
            image::Rgb([255, 0, 0]),
            image::Rgb([255, 255, 255]),
        ],
    };

    pub fn color(&self, c: Category) -> Rgb8 {
        self.colors[c as usize]
    }

    /// Reference colors probed by the discretizer, in priority order.
    ///
    /// `Track` has no reference color: it is the fallback.
    pub fn reference_colors(&self) -> [(Category, Rgb8); 3] {
        [
            (Category::Boundary, self.color(Category::Boundary)),
            (Category::Start, self.color(Category::Start)),
            (Category::Finish, self.color(Category::Finish)),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Immutable geometry and palette shared by the discretizer and the renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackLayout {
    /// Side of the square source image and of rendered frames, in pixels.
    pub image_side: u32,
    pub palette: Palette,
}

impl TrackLayout {
    /// 600x600 images, 12x12 pixel blocks, standard palette.
    pub const STANDARD: TrackLayout = TrackLayout {
        image_side: IMAGE_SIDE,
        palette: Palette::STANDARD,
    };

    /// Pixels per grid cell along one axis (integer division).
    pub fn block_side(&self) -> u32 {
        self.image_side / GRID_SIDE as u32
    }

    pub fn validate(&self) -> RacetrackResult<()> {
        if self.block_side() == 0 {
            return Err(RacetrackError::shape(format!(
                "image side {} is smaller than the {GRID_SIDE}-cell grid",
                self.image_side
            )));
        }
        Ok(())
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
