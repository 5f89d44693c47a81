use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Returned as plain RGB so both the egui window and the PNG export can use
/// the same values.
pub fn generate_palette(n: usize) -> Vec<[u8; 3]> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Offset so the first trace lands on blue, the second on orange.
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.5);
            let rgb: Srgb = hsl.into_color();
            [
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ]
        })
        .collect()
}

pub fn to_color32([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

// ---------------------------------------------------------------------------
// Per-panel trace colours
// ---------------------------------------------------------------------------

/// Colours for every trace of the two panels.
///
/// Panel colours never repeat across panels: the energy panel takes the first
/// `energy_columns` palette entries, the victory panel the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceColors {
    pub energy: Vec<[u8; 3]>,
    pub victories: Vec<[u8; 3]>,
}

impl TraceColors {
    pub fn new(energy_columns: usize, victory_columns: usize) -> Self {
        let energy_columns = energy_columns.max(1);
        let victory_columns = victory_columns.max(1);
        let mut palette = generate_palette(energy_columns + victory_columns);
        let victories = palette.split_off(energy_columns);
        TraceColors {
            energy: palette,
            victories,
        }
    }
}
