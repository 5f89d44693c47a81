pub mod panels;
pub mod plot;

use crate::color::TraceColors;
use crate::data::model::{RunLogs, Series};

/// Figure size in layout units (width, height).
pub const FIGURE_SIZE: (f32, f32) = (20.0, 9.0);

/// Pixels per layout unit for both the window and the PNG export.
pub const PIXELS_PER_UNIT: f32 = 100.0;

/// Figure size in pixels.
pub fn figure_pixels() -> (u32, u32) {
    (
        (FIGURE_SIZE.0 * PIXELS_PER_UNIT) as u32,
        (FIGURE_SIZE.1 * PIXELS_PER_UNIT) as u32,
    )
}

/// The two rows of the mosaic, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Energy,
    Victories,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Energy, Panel::Victories];

    /// Mosaic key.
    pub fn key(self) -> &'static str {
        match self {
            Panel::Energy => "e",
            Panel::Victories => "v",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Energy => "Energies vs T",
            Panel::Victories => "Victories vs T",
        }
    }

    pub fn series(self, run: &RunLogs) -> &Series {
        match self {
            Panel::Energy => &run.energy,
            Panel::Victories => &run.victories,
        }
    }

    pub fn colors(self, colors: &TraceColors) -> &[[u8; 3]] {
        match self {
            Panel::Energy => &colors.energy,
            Panel::Victories => &colors.victories,
        }
    }
}
