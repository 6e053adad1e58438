use crate::content::{ContentEvent, ScreenError, DETAIL_FETCH_MESSAGE, LIST_FETCH_MESSAGE};
use crate::model::{PhilosopherDetail, PhilosopherSummary};
use crate::ui::detail_view;
use crate::ui::layout::layout_regions;
use crate::ui::lifecycle::{
    FetchTicket, GenerationIntent, GenerationReducer, GenerationState, TicketCounter,
};
use crate::ui::list_view::grid_columns;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// Fetch requests sent from the UI loop to the content worker.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchList {
        ticket: FetchTicket,
    },
    FetchDetail {
        ticket: FetchTicket,
        summary: PhilosopherSummary,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

type ListReducer = GenerationReducer<Vec<PhilosopherSummary>>;
type DetailReducer = GenerationReducer<PhilosopherDetail>;

/// Which screen is on top.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenKind {
    List,
    Detail,
}

/// Detail screen for one selected summary.
///
/// Owns its own lifecycle; dropping the screen discards it.
#[derive(Debug)]
pub struct DetailScreen {
    summary: PhilosopherSummary,
    ticket: FetchTicket,
    state: GenerationState<PhilosopherDetail>,
    scroll: u16,
}

impl DetailScreen {
    pub fn summary(&self) -> &PhilosopherSummary {
        &self.summary
    }

    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    pub fn state(&self) -> &GenerationState<PhilosopherDetail> {
        &self.state
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// List screen lifecycle (MVI pattern).
    list: GenerationState<Vec<PhilosopherSummary>>,
    list_ticket: Option<FetchTicket>,
    selection: usize,
    /// Open detail screen, if any.
    detail: Option<DetailScreen>,
    tickets: TicketCounter,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    animation_tick: u8,
    image_base_url: String,
}

impl App {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            size: None,
            list: GenerationState::default(),
            list_ticket: None,
            selection: 0,
            detail: None,
            tickets: TicketCounter::new(),
            command_sender: None,
            last_command_error: None,
            animation_tick: 0,
            image_base_url: image_base_url.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn screen(&self) -> ScreenKind {
        if self.detail.is_some() {
            ScreenKind::Detail
        } else {
            ScreenKind::List
        }
    }

    pub fn list_state(&self) -> &GenerationState<Vec<PhilosopherSummary>> {
        &self.list
    }

    pub fn list_ticket(&self) -> Option<FetchTicket> {
        self.list_ticket
    }

    pub fn summaries(&self) -> &[PhilosopherSummary] {
        self.list.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_summary(&self) -> Option<&PhilosopherSummary> {
        self.summaries().get(self.selection)
    }

    pub fn detail(&self) -> Option<&DetailScreen> {
        self.detail.as_ref()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        if let Some(max) = self.detail_max_scroll() {
            if let Some(screen) = self.detail.as_mut() {
                screen.scroll = screen.scroll.min(max);
            }
        }
    }

    pub fn on_tick(&mut self) {
        let loading = self.list.is_loading()
            || self
                .detail
                .as_ref()
                .is_some_and(|screen| screen.state.is_loading());
        if loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Create a fresh list lifecycle and request the list.
    ///
    /// Any list result still in flight is ignored once it arrives.
    pub fn load_list(&mut self) {
        let ticket = self.tickets.next();
        self.list = GenerationState::default();
        self.list_ticket = Some(ticket);
        self.selection = 0;
        ListReducer::dispatch(&mut self.list, GenerationIntent::Start);
        tracing::info!(%ticket, "Loading philosopher list");

        if !self.send_command(UiCommand::FetchList { ticket }) {
            ListReducer::dispatch(
                &mut self.list,
                GenerationIntent::Failed {
                    message: LIST_FETCH_MESSAGE.to_string(),
                },
            );
        }
    }

    /// Reload after a failed list fetch. No-op in any other state.
    pub fn reload(&mut self) -> bool {
        if !self.list.is_error() || self.detail.is_some() {
            return false;
        }
        self.load_list();
        true
    }

    /// Open the detail screen for the selected card.
    pub fn open_selected(&mut self) -> bool {
        if self.detail.is_some() {
            return false;
        }
        let Some(summary) = self.selected_summary().cloned() else {
            return false;
        };
        self.open_detail(summary);
        true
    }

    /// Open a new detail screen for `summary` and request its content.
    pub fn open_detail(&mut self, summary: PhilosopherSummary) {
        let ticket = self.tickets.next();
        let mut state = GenerationState::default();
        DetailReducer::dispatch(&mut state, GenerationIntent::Start);
        tracing::info!(%ticket, name = %summary.name, "Opening detail screen");

        self.detail = Some(DetailScreen {
            summary: summary.clone(),
            ticket,
            state,
            scroll: 0,
        });

        if !self.send_command(UiCommand::FetchDetail { ticket, summary }) {
            if let Some(screen) = self.detail.as_mut() {
                DetailReducer::dispatch(
                    &mut screen.state,
                    GenerationIntent::Failed {
                        message: DETAIL_FETCH_MESSAGE.to_string(),
                    },
                );
            }
        }
    }

    /// Leave the detail screen, discarding its lifecycle.
    ///
    /// The list keeps its summaries and selection; nothing is re-fetched.
    pub fn back(&mut self) -> bool {
        match self.detail.take() {
            Some(screen) => {
                tracing::debug!(ticket = %screen.ticket, "Closing detail screen");
                true
            }
            None => false,
        }
    }

    /// Apply a finished fetch if it still belongs to a live screen.
    ///
    /// Returns `false` when the result was stale and dropped.
    pub fn on_content(&mut self, event: ContentEvent) -> bool {
        let ticket = event.ticket();
        match event {
            ContentEvent::ListLoaded { result, .. } => {
                if self.list_ticket != Some(ticket) {
                    tracing::debug!(%ticket, "Ignoring stale list result");
                    return false;
                }
                ListReducer::dispatch(&mut self.list, Self::to_intent(result));
                self.clamp_selection();
                tracing::info!(%ticket, status = self.list.status(), "List fetch finished");
                true
            }
            ContentEvent::DetailLoaded { result, .. } => {
                let Some(screen) = self.detail.as_mut().filter(|s| s.ticket == ticket) else {
                    tracing::debug!(%ticket, "Ignoring stale detail result");
                    return false;
                };
                DetailReducer::dispatch(&mut screen.state, Self::to_intent(result));
                tracing::info!(%ticket, status = screen.state.status(), "Detail fetch finished");
                true
            }
        }
    }

    /// Move the card selection by whole columns/rows of the current grid.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let count = self.summaries().len();
        if count == 0 || self.detail.is_some() {
            return;
        }
        let columns = self.grid_columns() as i64;
        let current = self.selection as i64;
        let target = current + i64::from(dx) + i64::from(dy) * columns;
        self.selection = target.clamp(0, count as i64 - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    pub fn select_last(&mut self) {
        self.selection = self.summaries().len().saturating_sub(1);
    }

    /// Scroll the detail screen, stopping once its last line is in view.
    pub fn scroll_detail(&mut self, delta: i32) {
        let max = self.detail_max_scroll();
        if let Some(screen) = self.detail.as_mut() {
            let step = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
            let next = if delta.is_negative() {
                screen.scroll.saturating_sub(step)
            } else {
                screen.scroll.saturating_add(step)
            };
            screen.scroll = max.map_or(next, |max| next.min(max));
        }
    }

    pub fn scroll_detail_top(&mut self) {
        if let Some(screen) = self.detail.as_mut() {
            screen.scroll = 0;
        }
    }

    /// Columns of the card grid for the last known terminal width.
    pub fn grid_columns(&self) -> usize {
        self.size.map(|(cols, _)| grid_columns(cols)).unwrap_or(1)
    }

    /// Scroll limit of the open detail screen at the current terminal size.
    ///
    /// `None` until the terminal size is known.
    fn detail_max_scroll(&self) -> Option<u16> {
        let (cols, rows) = self.size?;
        let screen = self.detail.as_ref()?;
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        Some(detail_view::max_scroll(screen, &self.image_base_url, body))
    }

    fn to_intent<T>(result: Result<T, ScreenError>) -> GenerationIntent<T> {
        match result {
            Ok(data) => GenerationIntent::Resolved(data),
            Err(err) => {
                tracing::error!(error = %err, "Fetch failed");
                GenerationIntent::Failed {
                    message: err.user_message().to_string(),
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.summaries().len();
        if self.selection >= count {
            self.selection = count.saturating_sub(1);
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("Content worker not connected".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to dispatch fetch command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
