// Tuning constants for the width estimator and alignment decision.
// Values were calibrated against the reference narrative rendering; they are
// heuristics, not measurements.

/// Viewport tier split at the tablet/desktop breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTier {
    Mobile,
    Tablet,
    Desktop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Tablet breakpoint in pixels (below this is mobile).
    pub tablet_min: f64,
    /// Desktop breakpoint in pixels.
    pub desktop_min: f64,

    /// Fixed font size below the tablet breakpoint (default 16).
    pub mobile_font_size: f64,
    /// Fixed font size in the tablet tier (default 18).
    pub tablet_font_size: f64,
    /// Desktop font size as a fraction of viewport width (default 1.5%).
    pub desktop_font_scale: f64,

    /// Average glyph width as a fraction of font size (default 0.58).
    pub char_width_factor: f64,
    /// Horizontal gap added after every token (default 12).
    pub word_gap: f64,
    /// Extra width for the decorative padding around a highlight (default 16).
    pub highlight_padding: f64,

    /// Fixed rendered width of an image or icon token, per tier.
    pub mobile_icon_width: f64,
    pub tablet_icon_width: f64,
    pub desktop_icon_width: f64,

    /// Horizontal container padding subtracted from the viewport, per tier.
    pub mobile_padding: f64,
    pub tablet_padding: f64,
    pub desktop_padding: f64,
    /// Lower bound on the usable width after padding (default 300).
    pub available_width_floor: f64,

    /// Width ratio below which text centers, per tier.
    pub mobile_center_threshold: f64,
    pub tablet_center_threshold: f64,
    pub desktop_center_threshold: f64,
    /// Width ratio at which desktop text justifies, per tier.
    pub mobile_justify_threshold: f64,
    pub tablet_justify_threshold: f64,
    pub desktop_justify_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tablet_min: 640.0,
            desktop_min: 1024.0,
            mobile_font_size: 16.0,
            tablet_font_size: 18.0,
            desktop_font_scale: 0.015,
            char_width_factor: 0.58,
            word_gap: 12.0,
            highlight_padding: 16.0,
            mobile_icon_width: 40.0,
            tablet_icon_width: 48.0,
            desktop_icon_width: 56.0,
            mobile_padding: 40.0,
            tablet_padding: 80.0,
            desktop_padding: 160.0,
            available_width_floor: 300.0,
            mobile_center_threshold: 0.45,
            tablet_center_threshold: 0.55,
            desktop_center_threshold: 0.65,
            mobile_justify_threshold: 0.8,
            tablet_justify_threshold: 0.85,
            desktop_justify_threshold: 0.9,
        }
    }
}

impl LayoutConfig {
    pub fn tier(&self, viewport_width: f64) -> DeviceTier {
        if viewport_width >= self.desktop_min {
            DeviceTier::Desktop
        } else if viewport_width >= self.tablet_min {
            DeviceTier::Tablet
        } else {
            DeviceTier::Mobile
        }
    }

    pub fn font_size(&self, viewport_width: f64) -> f64 {
        match self.tier(viewport_width) {
            DeviceTier::Desktop => viewport_width * self.desktop_font_scale,
            DeviceTier::Tablet => self.tablet_font_size,
            DeviceTier::Mobile => self.mobile_font_size,
        }
    }

    pub fn icon_width(&self, viewport_width: f64) -> f64 {
        match self.tier(viewport_width) {
            DeviceTier::Desktop => self.desktop_icon_width,
            DeviceTier::Tablet => self.tablet_icon_width,
            DeviceTier::Mobile => self.mobile_icon_width,
        }
    }

    pub fn horizontal_padding(&self, viewport_width: f64) -> f64 {
        match self.tier(viewport_width) {
            DeviceTier::Desktop => self.desktop_padding,
            DeviceTier::Tablet => self.tablet_padding,
            DeviceTier::Mobile => self.mobile_padding,
        }
    }

    pub fn center_threshold(&self, viewport_width: f64) -> f64 {
        match self.tier(viewport_width) {
            DeviceTier::Desktop => self.desktop_center_threshold,
            DeviceTier::Tablet => self.tablet_center_threshold,
            DeviceTier::Mobile => self.mobile_center_threshold,
        }
    }

    pub fn justify_threshold(&self, viewport_width: f64) -> f64 {
        match self.tier(viewport_width) {
            DeviceTier::Desktop => self.desktop_justify_threshold,
            DeviceTier::Tablet => self.tablet_justify_threshold,
            DeviceTier::Mobile => self.mobile_justify_threshold,
        }
    }
}
