// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts and palettes handed to the rendering backend.
//!
//! A [`Theme`] is an immutable value passed next to a frame. The engine reads the colormap
//! from it when building colorbar brushes; everything else is for the backend.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name for CSS-style font declarations.
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
}

/// Text style for one typographic role.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the backend's units (typically points).
    pub font_size: f64,
    /// Preferred family.
    pub font_family: FontFamily,
    /// Weight.
    pub font_weight: FontWeight,
    /// Style.
    pub font_style: FontStyle,
    /// Text paint.
    pub color: Color,
}

impl TextStyle {
    /// A normal-weight sans-serif style in black.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            color: css::BLACK,
        }
    }

    /// Set the family.
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

/// Text styles by role.
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    /// Chart title.
    pub title: TextStyle,
    /// Axis titles.
    pub axis_label: TextStyle,
    /// Tick labels.
    pub tick_label: TextStyle,
    /// Colorbar tick labels.
    pub colorbar_label: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: TextStyle::new(14.0).with_weight(FontWeight::BOLD),
            axis_label: TextStyle::new(12.0),
            tick_label: TextStyle::new(10.0),
            colorbar_label: TextStyle::new(10.0),
        }
    }
}

/// A list of colors evenly spaced over `[0, 1]`, sampled by linear interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    colors: Vec<Color>,
}

impl Colormap {
    /// Creates a colormap from evenly spaced colors.
    ///
    /// An empty list samples as black.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// A viridis-like sequential map.
    pub fn viridis() -> Self {
        Self::new([
            Color::from_rgb8(68, 1, 84),
            Color::from_rgb8(59, 82, 139),
            Color::from_rgb8(33, 145, 140),
            Color::from_rgb8(94, 201, 98),
            Color::from_rgb8(253, 231, 37),
        ])
    }

    /// The colors, in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Samples the map at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color {
        let n = self.colors.len();
        match n {
            0 => return css::BLACK,
            1 => return self.colors[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return self.colors[n - 1];
        }
        let pos = t * (n - 1) as f64;
        let mut i = 0;
        while i + 2 < n && (i + 1) as f64 <= pos {
            i += 1;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the local fraction lies in [0, 1]"
        )]
        let frac = (pos - i as f64) as f32;
        let a = self.colors[i].components;
        let b = self.colors[i + 1].components;
        Color::new([
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
            a[3] + (b[3] - a[3]) * frac,
        ])
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::viridis()
    }
}

/// Fonts and palettes for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Text styles by role.
    pub typography: Typography,
    /// Series colors, cycled by index.
    pub palette: Vec<Color>,
    /// Colormap for colorbars and color-mapped marks.
    pub colormap: Colormap,
    /// Axis rule and tick paint.
    pub axis_color: Color,
    /// Gridline paint.
    pub grid_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            palette: alloc::vec![
                css::STEEL_BLUE,
                css::DARK_ORANGE,
                css::SEA_GREEN,
                css::CRIMSON,
                css::MEDIUM_PURPLE,
                css::SADDLE_BROWN,
            ],
            colormap: Colormap::default(),
            axis_color: css::BLACK,
            grid_color: css::BLACK.with_alpha(40.0 / 255.0),
        }
    }
}

impl Theme {
    /// Returns the series color for `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.axis_color;
        }
        self.palette[index % self.palette.len()]
    }

    /// Returns a copy of this theme with a different colormap.
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn colormap_hits_its_stops() {
        let map = Colormap::new([css::BLACK, css::WHITE]);
        assert_eq!(map.sample(0.0), css::BLACK);
        assert_eq!(map.sample(1.0), css::WHITE);
        assert_eq!(map.sample(-3.0), css::BLACK);
        assert_eq!(map.sample(7.0), css::WHITE);
        let mid = map.sample(0.5).components;
        assert!((mid[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn colormap_interpolates_within_segment() {
        let map = Colormap::viridis();
        assert_eq!(map.sample(0.25), map.colors()[1]);
        assert_eq!(map.sample(1.0), map.colors()[4]);
    }

    #[test]
    fn series_colors_cycle() {
        let theme = Theme::default();
        let n = theme.palette.len();
        assert_eq!(theme.series_color(0), theme.series_color(n));
        assert_ne!(theme.series_color(0), theme.series_color(1));
    }

    #[test]
    fn css_family_names() {
        assert_eq!(FontFamily::Monospace.as_css_family(), "monospace");
        assert_eq!(FontFamily::Named("Inter".into()).as_css_family(), "Inter");
    }
}
