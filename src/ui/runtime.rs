use crate::config::Config;
use crate::content::{ContentSource, ContentWorker};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);
const COMMAND_BUFFER: usize = 16;

/// Run the terminal UI until the user quits.
///
/// State lives on this thread. Fetches run on `runtime` and report back
/// through the event channel.
pub fn run(config: &Config, source: Arc<dyn ContentSource>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = {
        let _enter = runtime.enter();
        ContentWorker::spawn(source, command_rx, events.sender())
    };

    let mut app = App::new(config.images.base_url.clone());
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.load_list();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Content(event)) => {
                app.on_content(event);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel; in-flight fetches are abandoned.
    drop(app);
    worker.abort();
    drop(guard);
    Ok(())
}
