//! Greedy line flow for the narrative paragraph.
//!
//! Ratatui wraps by grapheme, not by token, and has no justified alignment,
//! so visible tokens are flowed into terminal lines here and justification
//! is applied by widening inter-token gaps.

use crate::frame::{FrameToken, RevealFrame};
use crate::narrative::TokenKind;
use unicode_width::UnicodeWidthStr;

/// One rendered token on a flowed line.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCell {
    pub text: String,
    /// Index into `RevealFrame::tokens` for styling lookups.
    pub token_index: usize,
    /// Terminal cell width of `text`.
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLine {
    pub cells: Vec<FlowCell>,
    /// Width of the line with single-space gaps.
    pub width: usize,
}

/// What a token shows in a terminal cell grid. Images render as a
/// placeholder of their resolved source; everything else shows its resolved
/// display text.
pub fn cell_text(token: &FrameToken) -> String {
    match token.kind {
        TokenKind::Image => match &token.media_src {
            Some(src) => format!("[{}]", src),
            None => format!("[{}]", token.raw),
        },
        _ => token.display.clone(),
    }
}

/// Flow the visible tokens of a frame into lines at most `columns` wide.
/// A token wider than the whole line still gets a line of its own.
pub fn flow_tokens(frame: &RevealFrame, columns: usize) -> Vec<FlowLine> {
    let mut lines = Vec::new();
    let mut line = FlowLine::default();

    for (token_index, token) in frame.tokens.iter().enumerate() {
        if !token.visible {
            continue;
        }
        let text = cell_text(token);
        let width = text.width();
        let cell = FlowCell {
            text,
            token_index,
            width,
        };

        let needed = if line.cells.is_empty() {
            width
        } else {
            line.width + 1 + width
        };

        if !line.cells.is_empty() && needed > columns {
            lines.push(std::mem::take(&mut line));
            line.width = cell.width;
            line.cells.push(cell);
        } else {
            line.width = needed;
            line.cells.push(cell);
        }
    }

    if !line.cells.is_empty() {
        lines.push(line);
    }

    lines
}

/// Width of the gap after each cell but the last. Single spaces normally;
/// when justifying, the slack is spread left to right.
pub fn gap_widths(line: &FlowLine, columns: usize, justify: bool) -> Vec<usize> {
    let gap_count = line.cells.len().saturating_sub(1);
    let mut gaps = vec![1usize; gap_count];

    if justify && gap_count > 0 && columns > line.width {
        let mut slack = columns - line.width;
        let mut i = 0;
        while slack > 0 {
            gaps[i % gap_count] += 1;
            slack -= 1;
            i += 1;
        }
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::compose;
    use crate::layout::LayoutConfig;

    fn full_frame(text: &str) -> RevealFrame {
        compose(text, 100.0, 1200.0, &LayoutConfig::default())
    }

    #[test]
    fn test_flow_fits_on_one_line() {
        let frame = full_frame("AA BB CC");
        let lines = flow_tokens(&frame, 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].cells.len(), 3);
        assert_eq!(lines[0].width, 8); // 2+1+2+1+2
    }

    #[test]
    fn test_flow_wraps_at_columns() {
        let frame = full_frame("AA BB CC");
        let lines = flow_tokens(&frame, 5);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].cells.len(), 2);
        assert_eq!(lines[1].cells.len(), 1);
    }

    #[test]
    fn test_flow_skips_hidden_tokens() {
        let frame = compose("AA\nBB CC", 0.0, 1200.0, &LayoutConfig::default());
        let lines = flow_tokens(&frame, 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].cells.len(), 1);
        assert_eq!(lines[0].cells[0].text, "AA");
    }

    #[test]
    fn test_oversized_token_gets_own_line() {
        let frame = full_frame("A SUPERCALIFRAGILISTIC B");
        let lines = flow_tokens(&frame, 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].cells[0].text, "SUPERCALIFRAGILISTIC");
    }

    #[test]
    fn test_cell_text_strips_markers() {
        let frame = full_frame("==red:ALIVE== **LOUD**");
        let lines = flow_tokens(&frame, 80);
        assert_eq!(lines[0].cells[0].text, "ALIVE");
        assert_eq!(lines[0].cells[1].text, "LOUD");
    }

    #[test]
    fn test_cell_text_image_placeholder() {
        let frame = full_frame("portrait.png");
        let lines = flow_tokens(&frame, 80);
        assert_eq!(lines[0].cells[0].text, "[/media/portrait.png]");
    }

    #[test]
    fn test_gap_widths_plain() {
        let frame = full_frame("AA BB CC");
        let lines = flow_tokens(&frame, 80);
        assert_eq!(gap_widths(&lines[0], 80, false), vec![1, 1]);
    }

    #[test]
    fn test_gap_widths_justified_distributes_slack() {
        let frame = full_frame("AA BB CC");
        let lines = flow_tokens(&frame, 80);
        // Width 8, 72 slack over 2 gaps: 36 extra each plus the base space.
        assert_eq!(gap_widths(&lines[0], 80, true), vec![37, 37]);
    }

    #[test]
    fn test_gap_widths_justified_uneven_slack_leans_left() {
        let frame = full_frame("AA BB CC");
        let lines = flow_tokens(&frame, 11);
        // Width 8, slack 3 over 2 gaps.
        assert_eq!(gap_widths(&lines[0], 11, true), vec![3, 2]);
    }

    #[test]
    fn test_gap_widths_single_cell_line() {
        let frame = full_frame("ALONE");
        let lines = flow_tokens(&frame, 80);
        assert!(gap_widths(&lines[0], 80, true).is_empty());
    }

    #[test]
    fn test_emoji_width_counted() {
        let frame = full_frame("🚀 GO");
        let lines = flow_tokens(&frame, 80);
        assert_eq!(lines[0].cells[0].width, 2);
    }
}
