pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
    Frame,
};

use crate::app::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

const ACCENT: Color = Color::Magenta;

pub(crate) fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn italic() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

pub(crate) fn accent_bold() -> Style {
    bold().fg(ACCENT)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.game.phase()).render(&self.game, area, buf);
    }
}

/// Draw the whole app into the frame
pub fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Typed chars coloured against the target: green where they match,
/// red where they don't
pub(crate) fn typed_spans(target: &str, typed: &str) -> Vec<Span<'static>> {
    let green_bold_style = bold().fg(Color::Green);
    let red_bold_style = bold().fg(Color::Red);

    let mut expected = target.chars();
    typed
        .chars()
        .map(|c| {
            let style = if expected.next() == Some(c) {
                green_bold_style
            } else {
                red_bold_style
            };
            Span::styled(
                match c {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                style,
            )
        })
        .collect()
}
