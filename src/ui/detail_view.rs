//! Detail screen: loading, error or the full record of one philosopher.

use crate::content::{portrait_url, PortraitSize};
use crate::model::PhilosopherDetail;
use crate::ui::app::DetailScreen;
use crate::ui::layout::{centered_rect_by_size, split_columns};
use crate::ui::lifecycle::GenerationState;
use crate::ui::loading::Loading;
use crate::ui::theme::{
    AMBER_400, AMBER_500, AMBER_700, ERROR_RED, STONE_100, STONE_300, STONE_400, STONE_600,
    STONE_800,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

/// Below this width quotes follow the other sections instead of a side panel.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 100;

pub const BACK_LABEL: &str = "← All Philosophers";
pub const RETURN_LABEL: &str = "Return to List";

pub struct DetailView<'a> {
    screen: &'a DetailScreen,
    image_base_url: &'a str,
    tick: u8,
}

impl<'a> DetailView<'a> {
    pub fn new(screen: &'a DetailScreen, image_base_url: &'a str, tick: u8) -> Self {
        Self {
            screen,
            image_base_url,
            tick,
        }
    }

    fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(message, Style::default().fg(ERROR_RED))),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", RETURN_LABEL),
                    Style::default()
                        .fg(STONE_100)
                        .bg(STONE_800)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Esc", Style::default().fg(STONE_400)),
            ]),
        ];
        let width = (message.chars().count() as u16).saturating_add(4);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered_rect_by_size(area, width, 5), buf);
    }
}

/// Title block, biography, works and ideas. Quotes too when `with_quotes`.
pub fn detail_lines<'a>(
    detail: &'a PhilosopherDetail,
    image_url: String,
    with_quotes: bool,
) -> Vec<Line<'a>> {
    let heading = Style::default().fg(AMBER_500).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(STONE_300);

    let mut lines = vec![
        Line::from(Span::styled(BACK_LABEL, Style::default().fg(STONE_400))),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", detail.summary.school.to_uppercase()),
            Style::default()
                .fg(STONE_800)
                .bg(AMBER_500)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.summary.name.as_str(),
            Style::default().fg(STONE_100).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.summary.tagline.as_str(),
            Style::default().fg(STONE_400).add_modifier(Modifier::ITALIC),
        )),
        Line::from(vec![
            Span::styled(detail.summary.era.as_str(), Style::default().fg(AMBER_400)),
            Span::styled("  ·  portrait ", Style::default().fg(STONE_600)),
            Span::styled(image_url, Style::default().fg(STONE_600)),
        ]),
        Line::from(""),
        Line::from(Span::styled("✒ Biography", heading)),
    ];

    for paragraph in detail.bio_paragraphs() {
        lines.push(Line::from(Span::styled(paragraph, body)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("▤ Famous Works", heading)));
    lines.extend(detail.famous_works.iter().map(|work| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(AMBER_700)),
            Span::styled(
                work.as_str(),
                Style::default().fg(STONE_100).add_modifier(Modifier::ITALIC),
            ),
        ])
    }));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Core Ideas", heading)));
    lines.push(Line::from(
        detail
            .core_ideas
            .iter()
            .flat_map(|idea| {
                [
                    Span::styled(
                        format!(" {} ", idea),
                        Style::default().fg(STONE_100).bg(STONE_800),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>(),
    ));

    if with_quotes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("❝ Wisdom", heading)));
        lines.extend(quote_lines(detail));
    }

    lines
}

/// Quotes in quotation marks, blank line between each.
pub fn quote_lines(detail: &PhilosopherDetail) -> Vec<Line<'static>> {
    let style = Style::default().fg(STONE_300).add_modifier(Modifier::ITALIC);
    let mut lines = Vec::with_capacity(detail.quotes.len() * 2);
    for (idx, quote) in detail.quotes.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("│ ", Style::default().fg(AMBER_700)),
            Span::styled(format!("\"{}\"", quote), style),
        ]));
    }
    lines
}

/// Where the success view places its text for a given body area.
struct SuccessLayout {
    main: Rect,
    /// Quotes panel frame and its inner text area, in two-column mode.
    quotes: Option<(Rect, Rect)>,
}

impl SuccessLayout {
    fn new(area: Rect) -> Self {
        if area.width >= TWO_COLUMN_MIN_WIDTH {
            let (left, right) = split_columns(area, 58);
            let frame = right.inner(Margin::new(1, 1));
            Self {
                main: left.inner(Margin::new(2, 1)),
                quotes: Some((frame, quotes_block().inner(frame))),
            }
        } else {
            Self {
                main: area.inner(Margin::new(1, 0)),
                quotes: None,
            }
        }
    }
}

fn quotes_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(STONE_600))
        .title(Span::styled(
            " ❝ Wisdom ",
            Style::default().fg(AMBER_500).add_modifier(Modifier::BOLD),
        ))
}

fn main_paragraph<'a>(
    detail: &'a PhilosopherDetail,
    image_base_url: &str,
    with_quotes: bool,
) -> Paragraph<'a> {
    let image_url = portrait_url(image_base_url, &detail.summary.name, PortraitSize::Hero);
    Paragraph::new(detail_lines(detail, image_url, with_quotes)).wrap(Wrap { trim: false })
}

fn quotes_paragraph(detail: &PhilosopherDetail) -> Paragraph<'static> {
    Paragraph::new(quote_lines(detail)).wrap(Wrap { trim: true })
}

/// Wrapped rows of `paragraph` that do not fit in `area`.
fn overflow(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let rows = paragraph.line_count(area.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(area.height)
}

/// Largest scroll offset that still changes what the detail view shows
/// when rendered into `area`. Zero unless the detail has loaded.
pub fn max_scroll(screen: &DetailScreen, image_base_url: &str, area: Rect) -> u16 {
    let GenerationState::Success(detail) = screen.state() else {
        return 0;
    };
    let layout = SuccessLayout::new(area);
    let main = overflow(
        &main_paragraph(detail, image_base_url, layout.quotes.is_none()),
        layout.main,
    );
    let quotes = layout
        .quotes
        .map(|(_, inner)| overflow(&quotes_paragraph(detail), inner))
        .unwrap_or(0);
    main.max(quotes)
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = self.screen.summary();
        match self.screen.state() {
            GenerationState::Idle | GenerationState::Loading => {
                let message = format!("Consulting the archives for {}...", summary.name);
                Loading::new(self.tick).message(&message).render(area, buf);
            }
            GenerationState::Error { message } => Self::render_error(message, area, buf),
            GenerationState::Success(detail) => {
                let layout = SuccessLayout::new(area);
                let scroll = self.screen.scroll();

                let main = main_paragraph(detail, self.image_base_url, layout.quotes.is_none());
                let main_scroll = scroll.min(overflow(&main, layout.main));
                main.scroll((main_scroll, 0)).render(layout.main, buf);

                // Both columns follow one offset, each stopping at its own end.
                if let Some((frame, inner)) = layout.quotes {
                    quotes_block().render(frame, buf);
                    let quotes = quotes_paragraph(detail);
                    let quotes_scroll = scroll.min(overflow(&quotes, inner));
                    quotes.scroll((quotes_scroll, 0)).render(inner, buf);
                }
            }
        }
    }
}
