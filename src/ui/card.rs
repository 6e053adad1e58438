//! One philosopher card in the list grid.

use crate::model::PhilosopherSummary;
use crate::ui::theme::{AMBER_400, AMBER_500, STONE_100, STONE_300, STONE_400, STONE_600, STONE_800};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 7;

pub struct PhilosopherCard<'a> {
    summary: &'a PhilosopherSummary,
    selected: bool,
}

impl<'a> PhilosopherCard<'a> {
    pub fn new(summary: &'a PhilosopherSummary) -> Self {
        Self {
            summary,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for PhilosopherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, background) = if self.selected {
            (Style::default().fg(AMBER_500), Style::default().bg(STONE_800))
        } else {
            (Style::default().fg(STONE_600), Style::default())
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(background)
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", self.summary.school),
                Style::default().fg(STONE_400).add_modifier(Modifier::ITALIC),
            )));
        if self.selected {
            block = block.title_top(Line::from(Span::styled(" → ", border_style)).right_aligned());
        }

        let lines = vec![
            Line::from(Span::styled(
                self.summary.era.to_uppercase(),
                Style::default().fg(AMBER_400).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.summary.name.as_str(),
                Style::default().fg(STONE_100).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.summary.tagline.as_str(),
                Style::default().fg(STONE_300),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
