use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::game::Game;
use crate::session::Phase;
use crate::ui::{
    accent_bold, bold, centered_rect, dim, italic, typed_spans, HORIZONTAL_MARGIN,
    VERTICAL_MARGIN,
};

const PLACEHOLDER: &str = "type the word here...";

/// A UI Screen boundary: one per game phase
pub trait Screen {
    fn render(&self, game: &Game, area: Rect, buf: &mut Buffer);
}

/// Title screen
pub struct IdleScreen;

impl Screen for IdleScreen {
    fn render(&self, game: &Game, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("Speed Typer", accent_bold())),
            Line::from(Span::styled(
                "Test your typing speed and accuracy",
                italic(),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} seconds on the clock", game.duration()),
                dim(),
            )),
            Line::default(),
            Line::from(Span::styled("(enter) start / (esc)ape", italic())),
        ];
        let height = lines.len() as u16;

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered_rect(area, area.width, height), buf);
    }
}

/// Countdown, score, target word and the typed input
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, game: &Game, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // time and score
                Constraint::Length(1), // progress
                Constraint::Fill(1),
                Constraint::Length(1), // target word
                Constraint::Length(1),
                Constraint::Length(3), // input box
                Constraint::Length(1), // mistakes
                Constraint::Fill(1),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let status = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        Paragraph::new(Span::styled(format!("{}s", game.time_remaining()), bold()))
            .alignment(Alignment::Left)
            .render(status[0], buf);
        Paragraph::new(Span::styled(
            format!("score {}", game.correct_count()),
            bold(),
        ))
        .alignment(Alignment::Right)
        .render(status[1], buf);

        Gauge::default()
            .gauge_style(accent_bold().bg(Color::DarkGray))
            .ratio(game.progress_ratio())
            .label("")
            .render(chunks[1], buf);

        Paragraph::new(Span::styled(game.target_word().to_string(), bold()))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        // borders plus one column of padding each side
        let box_width = game.target_word().width().max(PLACEHOLDER.width()) as u16 + 4;
        let input_area = centered_rect(chunks[5], box_width, chunks[5].height);

        let input_line = if game.typed_input().is_empty() {
            Line::from(Span::styled(PLACEHOLDER, dim().patch(italic())))
        } else {
            Line::from(typed_spans(game.target_word(), game.typed_input()))
        };
        Paragraph::new(input_line)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(dim()))
            .render(input_area, buf);

        Paragraph::new(Span::styled(
            format!("Mistakes: {}", game.mistake_count()),
            dim(),
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);

        Paragraph::new(Span::styled("(tab) restart / (esc)ape", italic()))
            .render(chunks[8], buf);
    }
}

/// Final results
pub struct FinishedScreen;

impl Screen for FinishedScreen {
    fn render(&self, game: &Game, area: Rect, buf: &mut Buffer) {
        let stat = |label: &str, value: String| {
            Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(value, accent_bold()),
            ])
        };

        let lines = vec![
            Line::from(Span::styled("Game Over!", bold())),
            Line::default(),
            stat("Words Per Minute", game.words_per_minute().to_string()),
            stat("Words Typed", game.correct_count().to_string()),
            stat("Accuracy", format!("{}%", game.accuracy().unwrap_or(0))),
            Line::default(),
            Line::from(Span::styled("(r)etry / (b)ack / (esc)ape", italic())),
        ];
        let height = lines.len() as u16;

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered_rect(area, area.width, height), buf);
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Idle => Box::new(IdleScreen),
        Phase::Playing => Box::new(PlayingScreen),
        Phase::Finished => Box::new(FinishedScreen),
    }
}
