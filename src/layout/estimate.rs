use super::config::{DeviceTier, LayoutConfig};
use crate::narrative::{Token, TokenKind};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Advisory text-alignment decision for the revealed narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    Left,
    Justify,
}

/// Display length in grapheme clusters, which is what a reader perceives as
/// character count.
fn display_length(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Estimate the rendered pixel width of the visible token subset.
///
/// A heuristic, not a text shaper: images and icons get a fixed tier width,
/// text gets grapheme count times an average glyph width, highlights add
/// their decorative padding, and every token is followed by the word gap.
pub fn estimate_width(
    tokens: &[Token],
    visible: &HashSet<usize>,
    viewport_width: f64,
    cfg: &LayoutConfig,
) -> f64 {
    let char_width = cfg.font_size(viewport_width) * cfg.char_width_factor;
    let mut estimated = 0.0;

    for token in tokens {
        if !visible.contains(&token.global_index) {
            continue;
        }
        match token.kind {
            TokenKind::Image | TokenKind::Icon => {
                estimated += cfg.icon_width(viewport_width);
            }
            _ => {
                estimated += display_length(&token.display_text()) as f64 * char_width;
                if token.kind == TokenKind::Highlight {
                    estimated += cfg.highlight_padding;
                }
            }
        }
        estimated += cfg.word_gap;
    }

    estimated
}

/// Decide Center / Left / Justify from estimated width vs. usable width.
pub fn decide_alignment(
    estimated_width: f64,
    viewport_width: f64,
    cfg: &LayoutConfig,
) -> Alignment {
    let available =
        (viewport_width - cfg.horizontal_padding(viewport_width)).max(cfg.available_width_floor);
    let width_ratio = if available > 0.0 {
        estimated_width / available
    } else {
        0.0
    };

    if width_ratio < cfg.center_threshold(viewport_width) {
        Alignment::Center
    } else if width_ratio >= cfg.justify_threshold(viewport_width)
        && cfg.tier(viewport_width) == DeviceTier::Desktop
    {
        Alignment::Justify
    } else {
        Alignment::Left
    }
}

/// Convenience: estimate and decide in one call.
pub fn alignment_for(
    tokens: &[Token],
    visible: &HashSet<usize>,
    viewport_width: f64,
    cfg: &LayoutConfig,
) -> Alignment {
    let estimated = estimate_width(tokens, visible, viewport_width, cfg);
    decide_alignment(estimated, viewport_width, cfg)
}
