use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameSession;

const SEPARATOR: &str = " │ ";

/// Shell-owned state shown next to the game values.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// Whether sound cues currently play (`m` toggles it).
    pub sound_on: bool,
}

/// Renders the one-line score row into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, info: &HudInfo<'_>) {
    let line = score_line(
        session.score,
        session.snake.len(),
        info.sound_on,
        usize::from(area.width),
        info.theme,
    );

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .style(Style::default().fg(info.theme.hud_text)),
        area,
    );
}

/// Builds the score row, switching to one-letter labels when the full row
/// does not fit in `available_width` columns.
#[must_use]
pub fn score_line(
    score: u32,
    length: usize,
    sound_on: bool,
    available_width: usize,
    theme: &Theme,
) -> Line<'static> {
    let compact = info_width(score, length, sound_on, false) > available_width;
    let labels = Labels::new(compact);
    let value_style = Style::default().fg(theme.hud_value);

    Line::from(vec![
        Span::raw(format!("{}: ", labels.score)),
        Span::styled(score.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels.length)),
        Span::styled(length.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels.sound)),
        Span::styled(sound_state(sound_on), value_style),
    ])
}

struct Labels {
    score: &'static str,
    length: &'static str,
    sound: &'static str,
}

impl Labels {
    fn new(compact: bool) -> Self {
        if compact {
            Self {
                score: "S",
                length: "L",
                sound: "M",
            }
        } else {
            Self {
                score: "Score",
                length: "Length",
                sound: "Sound",
            }
        }
    }
}

fn sound_state(sound_on: bool) -> &'static str {
    if sound_on { "on" } else { "off" }
}

fn info_width(score: u32, length: usize, sound_on: bool, compact: bool) -> usize {
    let labels = Labels::new(compact);

    format!("{}: {score}", labels.score).width()
        + SEPARATOR.width()
        + format!("{}: {length}", labels.length).width()
        + SEPARATOR.width()
        + format!("{}: {}", labels.sound, sound_state(sound_on)).width()
}
