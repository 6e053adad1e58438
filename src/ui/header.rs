use crate::ui::theme::{AMBER_400, STONE_100, STONE_400, STONE_600};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    location: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(location: Option<&'a str>) -> Self {
        Self { location }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let separator_style = Style::default().fg(STONE_600);
        let mut spans = vec![
            Span::raw("  "),
            Span::styled("◆", Style::default().fg(AMBER_400)),
            Span::raw("  "),
            Span::styled(
                "PhiloSphere",
                Style::default().fg(STONE_100).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("WISDOM OF THE AGES", Style::default().fg(STONE_400)),
        ];
        if let Some(location) = self.location {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(location, Style::default().fg(AMBER_400)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(STONE_600)),
        )
    }
}
