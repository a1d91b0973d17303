use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Board, Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GLYPH_SNAKE_TAIL,
};
use crate::game::Snapshot;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Which overlay the outer loop wants on top of the play field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Overlay {
    None,
    Start,
    Paused,
    GameOver,
}

/// Renders one full frame from an immutable snapshot.
///
/// This is the only place world coordinates meet terminal cells; the engine
/// never learns what a terminal is.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot,
    board: Board,
    theme: &Theme,
    overlay: Overlay,
) {
    let area = frame.area();
    let play_area = render_hud(
        frame,
        area,
        theme,
        &HudInfo {
            score: snapshot.score,
            high_score: snapshot.high_score,
            total_games: snapshot.total_games,
            length: snapshot.segments.len(),
        },
    );

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, board, snapshot.food, theme);
    render_snake(frame, inner, board, snapshot, theme);

    match overlay {
        Overlay::Start => render_start_menu(frame, play_area, snapshot.high_score, theme),
        Overlay::Paused => render_pause_menu(frame, play_area, theme),
        Overlay::GameOver => {
            render_game_over_menu(frame, play_area, snapshot, theme);
        }
        Overlay::None => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, board: Board, food: Position, theme: &Theme) {
    let Some((x, y)) = world_to_terminal(inner, board, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    board: Board,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let last = snapshot.segments.len().saturating_sub(1);

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.segments.iter().enumerate() {
        let Some((x, y)) = world_to_terminal(inner, board, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

/// Maps a world position (y-up, origin at board center) into `inner`.
///
/// Returns `None` for off-board positions (a head mid-wall-collision) and
/// for cells the current terminal size cannot show.
fn world_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    if !board.contains(position) {
        return None;
    }

    let col = u16::try_from((position.x + board.half_extent) / board.step).ok()?;
    let row = u16::try_from((board.half_extent - position.y) / board.step).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
