use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{CELL_WIDTH, GLYPH_CELL, GridSize, Theme};
use crate::game::{GameSession, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{
    centered_rect, render_game_over_menu, render_start_menu, render_victory_menu,
};

/// Rows taken by the HUD above the board.
const HUD_HEIGHT: u16 = 1;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, hud_info: &HudInfo<'_>) {
    let theme = hud_info.theme;
    let area = frame.area();
    let (board_width, board_height) = board_size(session.bounds());
    let total_height = board_height.saturating_add(HUD_HEIGHT);

    if area.width < board_width || area.height < total_height {
        render_too_small(frame, area, board_width, total_height, theme);
        return;
    }

    let frame_area = centered_rect(area, board_width, total_height);
    let hud_area = Rect {
        height: HUD_HEIGHT,
        ..frame_area
    };
    let play_area = Rect {
        y: frame_area.y + HUD_HEIGHT,
        height: board_height,
        ..frame_area
    };

    render_hud(frame, hud_area, session, hud_info);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, session, theme);
    render_snake(frame, inner, session, theme);

    match session.status {
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score,
            session.death_reason,
            theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, play_area, session.score, theme),
        GameStatus::Ready => render_start_menu(frame, play_area, theme),
        GameStatus::Playing => {}
    }
}

/// Terminal columns and rows the bordered board needs.
#[must_use]
pub fn board_size(bounds: GridSize) -> (u16, u16) {
    (
        bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2),
        bounds.height.saturating_add(2),
    )
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("need {width}x{height}")),
        Line::from(format!("have {}x{}", area.width, area.height)),
    ];

    let notice = centered_rect(area, area.width, 3);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_text)),
        notice,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, session.bounds(), session.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let buffer = frame.buffer_mut();

    for (index, segment) in session.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, session.bounds(), *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color));
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
