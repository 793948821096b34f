use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::links::LinkError;
use crate::photo::PhotoView;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Background photo load finished.
    Photo(PhotoView),
    /// The OS opener exited with an error after the link was handed over.
    LinkFailed(LinkError),
    /// The input thread stopped after a terminal error; no more keys will arrive.
    InputLost(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Reads terminal events through crossterm.
    pub fn new() -> Self {
        Self::with_source(|timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Reads events from `source`, which waits up to the given timeout and
    /// returns `Ok(None)` when nothing arrived.
    ///
    /// An error from `source` ends the input thread; it is forwarded as
    /// [`AppEvent::InputLost`] first.
    pub fn with_source<S>(mut source: S) -> Self
    where
        S: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let forwarded = match source(POLL_INTERVAL) {
                    Ok(None) => continue,
                    Ok(Some(Event::Key(key))) => AppEvent::Key(key),
                    Ok(Some(Event::Mouse(mouse))) => AppEvent::Mouse(mouse),
                    Ok(Some(Event::Resize(cols, rows))) => AppEvent::Resize(cols, rows),
                    Ok(Some(_)) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal input failed");
                        let _ = event_tx.send(AppEvent::InputLost(err.to_string()));
                        break;
                    }
                };

                if event_tx.send(forwarded).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
