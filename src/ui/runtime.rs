use crate::config::Config;
use crate::media::ImageLoader;
use crate::storage::StorySink;
use crate::story::SavePayload;
use crate::ui::app::App;
use crate::ui::commands::spawn_command_worker;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Everything the UI loop needs from the outside.
pub struct RunOptions {
    pub config: Config,
    pub sink: Arc<dyn StorySink>,
    /// Story to load into the editor before the first frame.
    pub initial: Option<SavePayload>,
}

/// Run the terminal UI until the user quits.
///
/// Blocks the calling thread; background commands run on `runtime`.
pub fn run(options: RunOptions, runtime: &Handle) -> io::Result<()> {
    let RunOptions {
        config,
        sink,
        initial,
    } = options;

    let tick_rate = Duration::from_millis(config.preview.tick_ms.max(1));
    let loader = ImageLoader::new(config.editor.max_image_bytes);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config);
    app.set_command_sender(spawn_command_worker(
        runtime,
        Arc::clone(&sink),
        loader,
        events.sender(),
    ));
    if let Some(payload) = initial {
        app.load_story(payload);
    }
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(sink = sink.name(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, Instant::now()),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::ImageLoaded { uri }) => app.on_image_loaded(uri),
            Ok(AppEvent::ImageFailed { message }) => app.on_image_failed(message),
            Ok(AppEvent::SaveFinished(result)) => app.on_save_finished(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("UI stopped");
    drop(guard);
    Ok(())
}
