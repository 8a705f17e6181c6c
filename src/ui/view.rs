use super::flow::{flow_tokens, gap_widths};
use super::theme::{colors, to_color};
use crate::app::{AppMode, RenderState};
use crate::frame::FrameToken;
use crate::layout::Alignment as NarrativeAlignment;
use crate::narrative::{HighlightColor, TokenKind};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

fn token_style(token: &FrameToken) -> Style {
    let base = Style::default().fg(colors::text()).bg(colors::background());
    match token.kind {
        TokenKind::Bold => base.add_modifier(Modifier::BOLD),
        TokenKind::Highlight => {
            let style = match &token.color {
                Some(HighlightColor::Rgb(rgb)) => base
                    .bg(to_color(*rgb))
                    .fg(colors::background())
                    .add_modifier(Modifier::BOLD),
                // Opaque utility class: no RGB to apply in a terminal.
                _ => base.add_modifier(Modifier::REVERSED),
            };
            if token.route.is_some() {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            }
        }
        TokenKind::Icon => base.fg(colors::accent()),
        TokenKind::Image => base.fg(colors::dimmed()),
        TokenKind::Word => base,
    }
}

/// Render the revealed narrative as flowed, aligned terminal lines.
pub fn render_narrative(state: &RenderState, columns: u16) -> Paragraph<'static> {
    let columns = columns.max(1) as usize;
    let flowed = flow_tokens(&state.frame, columns);
    let justify = state.frame.alignment == NarrativeAlignment::Justify;
    let last = flowed.len().saturating_sub(1);

    let lines: Vec<Line> = flowed
        .iter()
        .enumerate()
        .map(|(i, flow_line)| {
            // The last justified line stays ragged, like any justified
            // paragraph.
            let gaps = gap_widths(flow_line, columns, justify && i != last);
            let mut spans = Vec::new();
            for (j, cell) in flow_line.cells.iter().enumerate() {
                let token = &state.frame.tokens[cell.token_index];
                spans.push(Span::styled(cell.text.clone(), token_style(token)));
                if let Some(gap) = gaps.get(j) {
                    spans.push(Span::styled(
                        " ".repeat(*gap),
                        Style::default().bg(colors::background()),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect();

    let alignment = match state.frame.alignment {
        NarrativeAlignment::Center => Alignment::Center,
        _ => Alignment::Left,
    };

    Paragraph::new(lines)
        .alignment(alignment)
        .style(Style::default().bg(colors::background()))
}

/// The reveal slider: a full-width bar with the 0-100 position readout.
pub fn render_slider(progress: f64, columns: u16) -> Line<'static> {
    let label = format!(" {:>5.1}", progress);
    let bar_width = (columns as usize).saturating_sub(label.len()).max(1);
    let filled = ((progress / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    let mut spans = Vec::new();
    spans.push(Span::styled(
        "─".repeat(filled),
        Style::default().fg(colors::text()),
    ));
    spans.push(Span::styled(
        "─".repeat(bar_width - filled),
        Style::default().fg(colors::dimmed()),
    ));
    spans.push(Span::styled(label, Style::default().fg(colors::dimmed())));

    Line::from(spans)
}

/// Bottom status line: command deck input when open, otherwise source and
/// the latest status message.
pub fn render_status(state: &RenderState) -> Line<'static> {
    if state.mode == AppMode::Command {
        let input = state.command_input.clone().unwrap_or_default();
        return Line::from(vec![
            Span::styled("▸ ", Style::default().fg(colors::accent())),
            Span::styled(input, Style::default().fg(colors::text())),
            Span::styled("█", Style::default().fg(colors::dimmed())),
        ]);
    }

    let mut spans = vec![Span::styled(
        state.source.clone(),
        Style::default().fg(colors::dimmed()),
    )];
    if let Some(status) = &state.status {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(colors::text()),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    fn state_at(text: &str, progress: f64) -> RenderState {
        let mut app = App::new(text.to_string(), "test".to_string());
        app.set_progress(progress);
        app.render_state(1200.0)
    }

    #[test]
    fn test_render_narrative_produces_widget() {
        let state = state_at("HELLO\n==red:WORLD==", 100.0);
        // Smoke: flows, styles, and aligns without panicking.
        let _ = render_narrative(&state, 80);
    }

    #[test]
    fn test_render_narrative_zero_columns() {
        let state = state_at("HELLO", 100.0);
        let _ = render_narrative(&state, 0);
    }

    #[test]
    fn test_slider_bounds() {
        let _ = render_slider(0.0, 80);
        let _ = render_slider(100.0, 80);
        let _ = render_slider(50.0, 3);
    }

    #[test]
    fn test_linked_highlight_is_underlined() {
        let state = state_at("==purple:UNIVERSE==", 100.0);
        let style = token_style(&state.frame.tokens[0]);
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_unlinked_highlight_not_underlined() {
        let state = state_at("==green:ALIVE==", 100.0);
        let style = token_style(&state.frame.tokens[0]);
        assert!(!style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_bold_token_style() {
        let state = state_at("**LOUD**", 100.0);
        let style = token_style(&state.frame.tokens[0]);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_shows_command_input() {
        let mut app = App::new("X".to_string(), "test".to_string());
        app.begin_command();
        app.push_command_char(':');
        app.push_command_char('q');
        let state = app.render_state(1200.0);
        let line = render_status(&state);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains(":q"));
    }
}
