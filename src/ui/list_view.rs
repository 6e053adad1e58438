//! List screen: intro, responsive card grid and closing quote.

use crate::content::{portrait_url, PortraitSize};
use crate::model::PhilosopherSummary;
use crate::ui::card::{PhilosopherCard, CARD_HEIGHT};
use crate::ui::theme::{STONE_100, STONE_400, STONE_600};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

const INTRO_TITLE: &str = "Meet the Thinkers";
const INTRO_TEXT: &str = "Explore the lives and ideas of history's most influential philosophers. \
Select a card to delve deeper into their biographies, famous works, and timeless quotes.";
const CLOSING_QUOTE: &str = "\"The only true wisdom is in knowing you know nothing.\"";
const CREDIT: &str = "PhiloSphere · Powered by Gemini";

const INTRO_HEIGHT: u16 = 4;
const OUTRO_HEIGHT: u16 = 3;

/// Number of grid columns for a given width (1 to 4).
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

/// Place cards in `area`, scrolled so that `selection` is visible.
///
/// Returns `(summary index, rect)` for every card that fits.
pub fn card_layout(area: Rect, count: usize, selection: usize) -> Vec<(usize, Rect)> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = grid_columns(area.width);
    let rows_visible = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = selection.min(count - 1) / columns;
    let first_row = (selected_row + 1).saturating_sub(rows_visible);
    let card_width = area.width / columns as u16;

    let start = first_row * columns;
    let end = count.min((first_row + rows_visible) * columns);

    (start..end)
        .map(|index| {
            let column = (index % columns) as u16;
            let row = (index / columns - first_row) as u16;
            let y = area.y + row * CARD_HEIGHT;
            let rect = Rect {
                x: area.x + column * card_width,
                y,
                width: card_width,
                height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
            };
            (index, rect)
        })
        .collect()
}

pub struct ListView<'a> {
    summaries: &'a [PhilosopherSummary],
    selection: usize,
    image_base_url: &'a str,
}

impl<'a> ListView<'a> {
    pub fn new(
        summaries: &'a [PhilosopherSummary],
        selection: usize,
        image_base_url: &'a str,
    ) -> Self {
        Self {
            summaries,
            selection,
            image_base_url,
        }
    }

    /// Card portrait of the selected philosopher, if any.
    fn selected_portrait(&self) -> Option<String> {
        self.summaries
            .get(self.selection)
            .map(|summary| portrait_url(self.image_base_url, &summary.name, PortraitSize::Card))
    }

    fn intro() -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                INTRO_TITLE,
                Style::default().fg(STONE_100).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(INTRO_TEXT, Style::default().fg(STONE_400))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
    }

    fn outro(portrait: Option<String>) -> Paragraph<'static> {
        let portrait = portrait.map(|url| format!("portrait {}", url)).unwrap_or_default();
        Paragraph::new(vec![
            Line::from(Span::styled(portrait, Style::default().fg(STONE_600))),
            Line::from(Span::styled(
                CLOSING_QUOTE,
                Style::default().fg(STONE_400).add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                CREDIT,
                Style::default().fg(STONE_400).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let intro_height = INTRO_HEIGHT.min(area.height);
        let outro_height = OUTRO_HEIGHT.min(area.height.saturating_sub(intro_height));
        let intro = Rect {
            height: intro_height,
            ..area
        };
        let outro = Rect {
            y: area.bottom().saturating_sub(outro_height),
            height: outro_height,
            ..area
        };
        let grid = Rect {
            y: area.y + intro_height,
            height: area.height.saturating_sub(intro_height + outro_height),
            ..area
        };

        Self::intro().render(intro, buf);

        for (index, rect) in card_layout(grid, self.summaries.len(), self.selection) {
            PhilosopherCard::new(&self.summaries[index])
                .selected(index == self.selection)
                .render(rect, buf);
        }

        Self::outro(self.selected_portrait()).render(outro, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(120), 3);
        assert_eq!(grid_columns(200), 4);
    }

    #[test]
    fn all_cards_fit_in_a_tall_area() {
        let area = Rect::new(0, 0, 80, CARD_HEIGHT * 6);
        let layout = card_layout(area, 12, 0);
        assert_eq!(layout.len(), 12);
        assert_eq!(layout[1].1.x, 40);
        assert_eq!(layout[2].1.y, CARD_HEIGHT);
    }

    #[test]
    fn grid_scrolls_to_selection() {
        // Two columns, two visible rows.
        let area = Rect::new(0, 0, 80, CARD_HEIGHT * 2);
        let layout = card_layout(area, 12, 11);
        let indices: Vec<usize> = layout.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![8, 9, 10, 11]);
        assert_eq!(layout[0].1.y, 0);
    }

    #[test]
    fn selected_card_portrait_is_shown() {
        let summaries = vec![PhilosopherSummary {
            id: "sartre".into(),
            name: "Jean-Paul Sartre".into(),
            tagline: "Existence precedes essence".into(),
            era: "20th Century".into(),
            school: "Existentialism".into(),
        }];
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        ListView::new(&summaries, 0, "https://picsum.photos").render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect();
        assert!(text.contains("https://picsum.photos/seed/Jean-Paul%20Sartre/400/500"));
    }

    #[test]
    fn empty_list_has_no_cards() {
        assert!(card_layout(Rect::new(0, 0, 80, 40), 0, 0).is_empty());
    }
}
