use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::snake::DeathReason;

const START_HINT: &str = "Press any key to start or Q to quit";
const RESTART_HINT: &str = "Press any key to restart or Q to quit";

/// Draws the title popup shown before the first round moves.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_popup(
        frame,
        area,
        "SNAKE",
        &[
            "Arrows or WASD steer".to_owned(),
            "M toggles sound".to_owned(),
        ],
        START_HINT,
        theme,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let cause = match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit the wall",
        Some(DeathReason::SelfCollision) => "Cause: bit yourself",
        None => "",
    };

    render_popup(
        frame,
        area,
        "GAME OVER",
        &[format!("Score: {score}"), cause.to_owned()],
        RESTART_HINT,
        theme,
    );
}

/// Draws the board-cleared screen as a centered popup.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    render_popup(
        frame,
        area,
        "BOARD CLEARED",
        &[format!("Score: {score}"), "Nowhere left to grow".to_owned()],
        RESTART_HINT,
        theme,
    );
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    body: &[String],
    hint: &str,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::styled(
            title.to_owned(),
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(body.iter().map(|text| Line::from(text.clone())));
    lines.push(Line::from(""));
    lines.push(Line::from(hint.to_owned()));

    let content_width = body
        .iter()
        .map(|text| text.width())
        .chain([title.width(), hint.width()])
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_text).bg(theme.play_bg))
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centred in `area`, clamped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_rect;

    #[test]
    fn centered_rect_sits_in_the_middle() {
        let area = Rect::new(10, 5, 40, 20);

        assert_eq!(centered_rect(area, 20, 10), Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 12, 4);

        assert_eq!(centered_rect(area, 50, 9), area);
    }
}
