//! Terminal-to-pixel viewport estimation.
//!
//! The width estimator thinks in pixels; a terminal reports columns. This
//! maps one to the other with an assumed cell width, and falls back to a
//! desktop-ish default when the terminal size is unknown.

/// Assumed width of one terminal cell in pixels.
const CELL_WIDTH_PX: f64 = 9.0;

/// Viewport width assumed when the terminal size cannot be read.
pub const FALLBACK_VIEWPORT_PX: f64 = 1200.0;

/// Estimated pixel geometry of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportEstimate {
    /// Terminal columns, when known.
    pub columns: Option<u16>,
    /// Estimated usable width in pixels.
    pub pixel_width: f64,
}

impl ViewportEstimate {
    pub fn from_columns(columns: u16) -> Self {
        Self {
            columns: Some(columns),
            pixel_width: columns as f64 * CELL_WIDTH_PX,
        }
    }

    pub fn fallback() -> Self {
        Self {
            columns: None,
            pixel_width: FALLBACK_VIEWPORT_PX,
        }
    }
}

impl Default for ViewportEstimate {
    fn default() -> Self {
        Self::fallback()
    }
}
