//! Animated "thinking" indicator shown while a screen is loading.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{AMBER_500, STONE_400};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

pub const DEFAULT_MESSAGE: &str = "Contemplating...";

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct Loading<'a> {
    message: &'a str,
    tick: u8,
}

impl<'a> Loading<'a> {
    pub fn new(tick: u8) -> Self {
        Self {
            message: DEFAULT_MESSAGE,
            tick,
        }
    }

    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }

    pub fn spinner_frame(tick: u8) -> &'static str {
        SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()]
    }
}

impl Widget for Loading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                Self::spinner_frame(self.tick),
                Style::default().fg(AMBER_500).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default().fg(STONE_400).add_modifier(Modifier::ITALIC),
            )),
        ];
        let width = (self.message.chars().count() as u16).saturating_add(4);
        let target = centered_rect_by_size(area, width, 4);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(target, buf);
    }
}
