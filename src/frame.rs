//! Per-render composition: one pure function from `(text, progress,
//! viewport)` to everything a renderer needs. Recomputed on every input
//! change; nothing here is cached or mutated.

use crate::layout::{alignment_for, Alignment, LayoutConfig};
use crate::narrative::{parse_highlight, tokenize, visible_indices, HighlightColor, TokenKind};
use crate::resolve::{illustration_for, media_source, route_for, Illustration};

/// A token resolved for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameToken {
    pub raw: String,
    pub kind: TokenKind,
    pub line_index: usize,
    pub global_index: usize,
    pub visible: bool,
    /// Markers stripped, highlight spec resolved.
    pub display: String,
    /// Highlight background, when the token is a highlight.
    pub color: Option<HighlightColor>,
    /// Destination route when the highlight text is linked.
    pub route: Option<&'static str>,
    /// Resolved asset path for image tokens.
    pub media_src: Option<String>,
    /// Substituted illustration for icon tokens, when one matches.
    pub illustration: Option<Illustration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealFrame {
    pub tokens: Vec<FrameToken>,
    pub alignment: Alignment,
    pub visible_count: usize,
}

impl RevealFrame {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Build the render-ready frame for one narrative state.
pub fn compose(text: &str, progress: f64, viewport_px: f64, cfg: &LayoutConfig) -> RevealFrame {
    let tokens = tokenize(text);
    let visible = visible_indices(&tokens, progress);
    let alignment = alignment_for(&tokens, &visible, viewport_px, cfg);
    let visible_count = visible.len();

    let tokens = tokens
        .into_iter()
        .map(|token| {
            let (display, color, route) = match token.kind {
                TokenKind::Highlight => {
                    let spec = parse_highlight(&token.raw);
                    let route = route_for(&spec.text);
                    (spec.text, Some(spec.color), route)
                }
                _ => (token.display_text(), None, None),
            };
            let media_src = match token.kind {
                TokenKind::Image => Some(media_source(&token.raw)),
                _ => None,
            };
            let illustration = match token.kind {
                TokenKind::Icon => illustration_for(&token.raw),
                _ => None,
            };
            FrameToken {
                visible: visible.contains(&token.global_index),
                display,
                color,
                route,
                media_src,
                illustration,
                raw: token.raw,
                kind: token.kind,
                line_index: token.line_index,
                global_index: token.global_index,
            }
        })
        .collect();

    RevealFrame {
        tokens,
        alignment,
        visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::Rgb;

    #[test]
    fn test_empty_text_empty_frame() {
        let frame = compose("", 50.0, 1200.0, &LayoutConfig::default());
        assert!(frame.is_empty());
        assert_eq!(frame.visible_count, 0);
    }

    #[test]
    fn test_hello_world_scenario() {
        let cfg = LayoutConfig::default();
        let text = "HELLO\n==red:WORLD==";

        let start = compose(text, 0.0, 1200.0, &cfg);
        assert_eq!(start.tokens.len(), 2);
        assert!(start.tokens[0].visible);
        assert!(!start.tokens[1].visible);
        assert_eq!(start.visible_count, 1);

        let end = compose(text, 100.0, 1200.0, &cfg);
        assert!(end.tokens[1].visible);
        assert_eq!(end.tokens[1].display, "WORLD");
        assert_eq!(
            end.tokens[1].color,
            Some(HighlightColor::Rgb(Rgb::new(239, 68, 68)))
        );
    }

    #[test]
    fn test_highlight_route_resolution() {
        let frame = compose("==purple:UNIVERSE==", 100.0, 1200.0, &LayoutConfig::default());
        assert_eq!(frame.tokens[0].route, Some("/universe"));
    }

    #[test]
    fn test_unlinked_highlight_has_no_route() {
        let frame = compose("==green:ALIVE==", 100.0, 1200.0, &LayoutConfig::default());
        assert_eq!(frame.tokens[0].route, None);
    }

    #[test]
    fn test_image_source_resolution() {
        let frame = compose("portrait.png", 100.0, 1200.0, &LayoutConfig::default());
        assert_eq!(
            frame.tokens[0].media_src.as_deref(),
            Some("/media/portrait.png")
        );
    }

    #[test]
    fn test_icon_illustration_resolution() {
        let frame = compose("🚀 🦀", 100.0, 1200.0, &LayoutConfig::default());
        assert_eq!(frame.tokens[0].illustration, Some(Illustration::Rocket));
        // Unknown glyph: renderer falls back to the raw glyph.
        assert_eq!(frame.tokens[1].illustration, None);
        assert_eq!(frame.tokens[1].display, "🦀");
    }

    #[test]
    fn test_word_tokens_carry_no_resolution() {
        let frame = compose("PLAIN", 100.0, 1200.0, &LayoutConfig::default());
        let token = &frame.tokens[0];
        assert_eq!(token.color, None);
        assert_eq!(token.route, None);
        assert_eq!(token.media_src, None);
        assert_eq!(token.illustration, None);
    }

    #[test]
    fn test_short_visible_set_centers() {
        let frame = compose("HI\nTHERE FRIEND", 0.0, 1920.0, &LayoutConfig::default());
        assert_eq!(frame.alignment, Alignment::Center);
    }
}
