//! Centralized theme and styling constants for the circuit canvas
//!
//! Single source of truth for the colors and stroke widths used when
//! painting terminals and wires.

use egui::Color32;
use once_cell::sync::Lazy;

/// Color palette for the circuit canvas
pub struct Colors {
    // Terminal colors
    pub terminal_default: Color32,

    // Selection and highlighting
    pub selection_blue: Color32,
    pub hover_highlight: Color32,

    // Wire colors
    pub wire_default: Color32,

    // Background
    pub canvas_background: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            terminal_default: Color32::from_rgb(0, 0, 0),

            selection_blue: Color32::from_rgb(100, 150, 255),
            hover_highlight: Color32::from_rgb(120, 170, 255),

            wire_default: Color32::from_rgb(90, 90, 90),

            canvas_background: Color32::from_rgb(235, 235, 235),
        }
    }
}

/// Stroke and outline dimensions
pub struct Dimensions {
    pub highlight_stroke_width: f32,
    pub highlight_padding: f32,
    pub wire_stroke_width: f32,
}

impl Dimensions {
    /// Get the default dimensions
    pub fn default() -> Self {
        Self {
            highlight_stroke_width: 2.0,
            highlight_padding: 2.0,
            wire_stroke_width: 3.0,
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

impl Theme {
    /// Get the default theme
    pub fn default() -> Self {
        Self {
            colors: Colors::default(),
            dimensions: Dimensions::default(),
        }
    }
}

/// Global theme instance
static GLOBAL_THEME: Lazy<Theme> = Lazy::new(Theme::default);

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

/// Convenience functions for commonly used values
pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}
