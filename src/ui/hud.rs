use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Values the HUD line displays.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub score: u32,
    pub high_score: u32,
    pub total_games: u32,
    pub length: usize,
}

/// Renders the single HUD row and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, theme: &Theme, info: &HudInfo) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(hud_line(info, theme)).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn hud_line<'a>(info: &HudInfo, theme: &Theme) -> Line<'a> {
    let label = Style::new().fg(theme.hud_fg);
    let value = Style::new().fg(theme.hud_accent);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(info.score.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(info.high_score.to_string(), value),
        Span::styled("  Games ", label),
        Span::styled(info.total_games.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(info.length.to_string(), value),
    ])
}
