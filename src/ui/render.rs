use crate::ui::app::{App, ScreenKind};
use crate::ui::detail_view::{DetailView, RETURN_LABEL};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::lifecycle::GenerationState;
use crate::ui::list_view::ListView;
use crate::ui::loading::Loading;
use crate::ui::theme::{ERROR_RED, STONE_100, STONE_400, STONE_600, STONE_800};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const LIST_LOADING_MESSAGE: &str = "Gathering the great minds of history...";
pub const LIST_ERROR_TITLE: &str = "A Philosophical Paradox";
pub const RELOAD_LABEL: &str = "Reload Application";

const LIST_HINTS: &str = "←↑↓→: Move │ Enter: Open │ Q: Quit";
const LIST_ERROR_HINTS: &str = "R: Reload │ Q: Quit";
const DETAIL_HINTS: &str = "Esc: All Philosophers │ ↑↓ PgUp PgDn: Scroll │ Q: Quit";
const LOADING_HINTS: &str = "Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = app.detail().map(|screen| screen.summary().name.as_str());
    frame.render_widget(Header::new(location).widget(), header);
    frame.render_widget(Clear, body);

    let hints = match app.screen() {
        ScreenKind::Detail => {
            if let Some(screen) = app.detail() {
                frame.render_widget(
                    DetailView::new(screen, app.image_base_url(), app.animation_tick()),
                    body,
                );
            }
            DETAIL_HINTS
        }
        ScreenKind::List => match app.list_state() {
            GenerationState::Idle | GenerationState::Loading => {
                frame.render_widget(
                    Loading::new(app.animation_tick()).message(LIST_LOADING_MESSAGE),
                    body,
                );
                LOADING_HINTS
            }
            GenerationState::Error { message } => {
                draw_list_error(frame, message, body);
                LIST_ERROR_HINTS
            }
            GenerationState::Success(summaries) => {
                frame.render_widget(
                    ListView::new(summaries, app.selection(), app.image_base_url()),
                    body,
                );
                LIST_HINTS
            }
        },
    };

    frame.render_widget(Footer::new(hints).widget(footer), footer);
}

fn draw_list_error(frame: &mut Frame<'_>, message: &str, body: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            LIST_ERROR_TITLE,
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(STONE_400))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", RELOAD_LABEL),
                Style::default()
                    .fg(STONE_100)
                    .bg(STONE_800)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  R", Style::default().fg(STONE_400)),
        ]),
    ];

    let width = (message.chars().count() as u16).saturating_add(6).max(40);
    let area = centered_rect_by_size(body, width, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(STONE_600)),
            ),
        area,
    );
}

/// Label of the recovery control for the current screen, if it shows one.
pub fn recovery_label(app: &App) -> Option<&'static str> {
    match app.screen() {
        ScreenKind::Detail => app
            .detail()
            .filter(|screen| screen.state().is_error())
            .map(|_| RETURN_LABEL),
        ScreenKind::List => app.list_state().is_error().then_some(RELOAD_LABEL),
    }
}
