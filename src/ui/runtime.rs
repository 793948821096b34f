use crate::config::DisplayConfig;
use crate::links::SystemOpener;
use crate::photo::{self, PhotoView};
use crate::profile::Profile;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::platform::HostPlatform;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;
use parking_lot::Mutex;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_millis(250);

pub fn run(profile: Profile, theme: Theme, display: &DisplayConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(display.mouse)?;
    let events = EventHandler::new();

    let failures = Mutex::new(events.sender());
    let opener = SystemOpener::new().with_reporter(move |err| {
        let _ = failures.lock().send(AppEvent::LinkFailed(err));
    });

    let photo = if display.show_photo && !profile.photo_url.trim().is_empty() {
        let tx = events.sender();
        photo::spawn_load(
            profile.photo_url.clone(),
            theme.spacing.photo_columns,
            theme.spacing.photo_rows,
            move |view| {
                let _ = tx.send(AppEvent::Photo(view));
            },
        );
        PhotoView::Loading
    } else {
        PhotoView::Disabled
    };

    let mut app = App::new(profile, theme, HostPlatform::current(), photo, Arc::new(opener));
    let mut screen = Rect::default();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        screen = Rect::new(0, 0, cols, rows);
        resize(&mut app, screen);
    }
    tracing::info!(width = screen.width, height = screen.height, "Viewer started");

    let outcome = loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break Ok(());
        }

        match events.next(WAIT) {
            Ok(event) => {
                if let Err(err) = handle_event(&mut app, event, &mut screen) {
                    break Err(err);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    drop(guard);
    outcome
}

/// Applies one event to `app`. `screen` tracks the last known terminal size.
///
/// Losing terminal input is fatal: the viewer could no longer be quit.
pub fn handle_event(app: &mut App, event: AppEvent, screen: &mut Rect) -> io::Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse, body_rect(*screen)),
        AppEvent::Resize(cols, rows) => {
            *screen = Rect::new(0, 0, cols, rows);
            resize(app, *screen);
        }
        AppEvent::Photo(view) => app.set_photo(view),
        AppEvent::LinkFailed(err) => app.on_link_failed(err),
        AppEvent::InputLost(reason) => {
            return Err(io::Error::other(format!("Terminal input lost: {reason}")));
        }
    }
    Ok(())
}

fn resize(app: &mut App, screen: Rect) {
    let body = body_rect(screen);
    app.on_resize((screen.width, screen.height), (body.width, body.height));
}
