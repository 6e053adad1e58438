use crate::ui::theme::{STONE_100, STONE_600};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    hints: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let version = format!("v{} ", VERSION);

        // Calculate widths using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count() + 1;
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders

        let text_style = Style::default().fg(STONE_100).add_modifier(Modifier::DIM);

        let line = if hints_width + version_width <= content_width {
            let padding = content_width - hints_width - version_width;
            Line::from(vec![
                Span::styled(" ", text_style),
                Span::styled(self.hints, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ])
        } else {
            // Too narrow: hints only, cut to fit.
            let hints: String = self
                .hints
                .chars()
                .take(content_width.saturating_sub(1))
                .collect();
            Line::from(vec![
                Span::styled(" ", text_style),
                Span::styled(hints, text_style),
            ])
        };

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STONE_600)),
            )
    }
}
