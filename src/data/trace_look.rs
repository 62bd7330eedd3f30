//! Visual styling for bands, trajectory lines and annotations.

use std::hash::{Hash, Hasher};

use egui::Color32;
use rustc_hash::FxHasher;

use crate::data::percentiles::PERCENTILE_PAIRS;

/// Twenty-color categorical palette for trajectory lines.
pub const CATEGORY20: [Color32; 20] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(174, 199, 232),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(255, 187, 120),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(152, 223, 138),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(255, 152, 150),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(197, 176, 213),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(196, 156, 148),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(247, 182, 210),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(199, 199, 199),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(219, 219, 141),
    Color32::from_rgb(23, 190, 207),
    Color32::from_rgb(158, 218, 229),
];

/// Stable line color for a trajectory's path identifier.
///
/// The same identifier always maps to the same color, across frames and
/// across runs.
pub fn path_color(path_id: i64) -> Color32 {
    let mut hasher = FxHasher::default();
    path_id.hash(&mut hasher);
    CATEGORY20[(hasher.finish() % CATEGORY20.len() as u64) as usize]
}

/// Colors and stroke widths of a fan chart.
#[derive(Debug, Clone)]
pub struct FanLook {
    /// Fill per band, matching [`PERCENTILE_PAIRS`] order (outermost first).
    pub band_fills: [Color32; PERCENTILE_PAIRS.len()],
    pub line_width: f32,
    /// Width of a hovered trajectory line.
    pub hover_line_width: f32,
    pub baseline_color: Color32,
    pub baseline_width: f32,
    /// Dash and gap length of the comparison baseline.
    pub baseline_dash: (f32, f32),
    pub filter_mark_color: Color32,
    pub filter_mark_width: f32,
    /// Fill of a hovered slice selector region.
    pub slice_hover_fill: Color32,
    pub axis_color: Color32,
}

impl Default for FanLook {
    fn default() -> Self {
        Self {
            band_fills: [
                Color32::from_rgb(222, 235, 247),
                Color32::from_rgb(198, 219, 239),
                Color32::from_rgb(158, 202, 225),
                Color32::from_rgb(107, 174, 214),
                Color32::from_rgb(66, 146, 198),
            ],
            line_width: 1.5,
            hover_line_width: 3.0,
            baseline_color: Color32::BLACK,
            baseline_width: 1.0,
            baseline_dash: (5.0, 20.0),
            filter_mark_color: Color32::GRAY,
            filter_mark_width: 5.0,
            slice_hover_fill: Color32::from_rgba_unmultiplied(120, 120, 120, 40),
            axis_color: Color32::DARK_GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_color_is_stable() {
        assert_eq!(path_color(17), path_color(17));
        assert!(CATEGORY20.contains(&path_color(-3)));
    }
}
