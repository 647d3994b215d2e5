//! Color scheme definitions for FourierScope.
//!
//! A scheme selects an immutable [`Palette`] of semantic colors plus a
//! fixed accent palette for the individual circles. Toggling the theme
//! swaps the whole palette value; nothing is mutated in place.

use egui::{Color32, Context, Visuals};

/// Visual theme for the simulation UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

/// Semantic color roles consumed by the frame renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: Color32,
    pub button: Color32,
    pub circle_outline: Color32,
    pub background: Color32,
    pub wave: Color32,
    pub highlight: Color32,
}

/// Accent colors cycled through for circle outlines and coefficient bars.
pub const CIRCLE_COLORS: [Color32; 10] = [
    Color32::from_rgb(160, 0, 200),
    Color32::from_rgb(135, 206, 235),
    Color32::from_rgb(220, 225, 30),
    Color32::from_rgb(200, 100, 100),
    Color32::from_rgb(100, 200, 100),
    Color32::from_rgb(100, 100, 200),
    Color32::from_rgb(100, 200, 200),
    Color32::from_rgb(200, 100, 200),
    Color32::from_rgb(200, 200, 100),
    Color32::from_rgb(150, 200, 150),
];

impl ColorScheme {
    /// All built-in schemes (useful for cycling toggles).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    /// The other scheme; the theme button flips between the two.
    pub fn toggled(&self) -> ColorScheme {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    /// Immutable palette for this scheme.
    pub fn palette(&self) -> Palette {
        match self {
            ColorScheme::Dark => Palette {
                text: Color32::from_rgb(255, 255, 255),
                button: Color32::from_rgb(80, 80, 80),
                circle_outline: Color32::from_rgb(255, 255, 255),
                background: Color32::from_rgb(20, 20, 30),
                wave: Color32::from_rgb(200, 200, 220),
                highlight: Color32::from_rgb(100, 100, 150),
            },
            ColorScheme::Light => Palette {
                text: Color32::from_rgb(0, 0, 0),
                button: Color32::from_rgb(140, 140, 140),
                circle_outline: Color32::from_rgb(0, 0, 0),
                background: Color32::from_rgb(240, 240, 245),
                wave: Color32::from_rgb(100, 100, 120),
                highlight: Color32::from_rgb(180, 180, 220),
            },
        }
    }

    /// Semi-transparent fill for the help overlay panel.
    pub fn overlay_fill(&self) -> Color32 {
        match self {
            ColorScheme::Dark => Color32::from_rgba_unmultiplied(30, 30, 40, 200),
            ColorScheme::Light => Color32::from_rgba_unmultiplied(240, 240, 240, 200),
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
        }
    }
}
