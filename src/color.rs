use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::compare::{Window, YoyChange};
use crate::data::model::Measure;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_color((hue_offset + (i as f32 / n as f32) * 360.0) % 360.0, 0.75, 0.55))
        .collect()
}

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

/// Colours for the time-series measures and the two comparison windows.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    measures: [Color32; 3],
    last: Color32,
    previous: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let measures = generate_palette(Measure::ALL.len(), 200.0);
        let windows = generate_palette(2, 210.0);
        Self {
            measures: [measures[0], measures[1], measures[2]],
            last: windows[0],
            previous: windows[1],
        }
    }
}

impl SeriesColors {
    pub fn measure(&self, measure: Measure) -> Color32 {
        match measure {
            Measure::CaseEquivalents => self.measures[0],
            Measure::UnitsSold => self.measures[1],
            Measure::NetPrice => self.measures[2],
        }
    }

    pub fn window(&self, window: Window) -> Color32 {
        match window {
            Window::Last => self.last,
            Window::Previous => self.previous,
        }
    }
}

/// Green for growth, red for decline, nothing for flat or undefined.
pub fn yoy_color(change: YoyChange) -> Option<Color32> {
    match change.percent() {
        Some(pct) if pct > 0.0 => Some(hsl_color(120.0, 0.6, 0.5)),
        Some(pct) if pct < 0.0 => Some(hsl_color(0.0, 0.7, 0.55)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        assert!(generate_palette(0, 0.0).is_empty());
        let colors = generate_palette(3, 200.0);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn yoy_sign_colors() {
        assert!(yoy_color(YoyChange::Change(3.0)).is_some());
        assert_ne!(yoy_color(YoyChange::Change(3.0)), yoy_color(YoyChange::Change(-3.0)));
        assert_eq!(yoy_color(YoyChange::Change(0.0)), None);
        assert_eq!(yoy_color(YoyChange::ZeroBaseline), None);
        assert_eq!(yoy_color(YoyChange::MissingPeriod), None);
    }
}
