//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, the event handler and a `Session`. It
//! runs the main loop: render → handle event → process pending → repeat.

use eyre::Result;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

use tooldir::source::{CatalogSource, FetchMessage, FetchTask, spawn_fetch};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{PendingAction, Screen};
use super::views::render;

/// App state plus the fetch belonging to the mounted view.
pub struct Session {
    app: App,
    source: Arc<dyn CatalogSource>,
    fetch_tx: mpsc::UnboundedSender<FetchMessage>,
    /// In-flight fetch; replacing it aborts the previous one
    fetch: Option<FetchTask>,
}

impl Session {
    pub fn new(app: App, source: Arc<dyn CatalogSource>, fetch_tx: mpsc::UnboundedSender<FetchMessage>) -> Self {
        Self {
            app,
            source,
            fetch_tx,
            fetch: None,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Mount a screen and start its fetch.
    pub fn mount(&mut self, screen: Screen) {
        info!("Mounting {:?}", screen);
        let generation = self.app.state_mut().mount(screen);
        self.fetch = Some(spawn_fetch(self.source.clone(), generation, self.fetch_tx.clone()));
    }

    /// Handle one event. Returns true when the app should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                if self.app.handle_key(key) {
                    return true;
                }
            }
            Event::Fetched(message) => {
                let generation = message.generation;
                if self.app.state_mut().apply_fetch(message) {
                    self.fetch = None;
                } else {
                    debug!("Discarding stale fetch for generation {}", generation);
                }
            }
            Event::Tick | Event::Resize(_, _) => {}
        }

        self.process_pending();
        self.app.state().should_quit
    }

    fn process_pending(&mut self) {
        match self.app.state_mut().pending.take() {
            Some(PendingAction::Reload) => {
                let screen = self.app.state().screen.clone();
                self.mount(screen);
            }
            Some(PendingAction::Open(screen)) => self.mount(screen),
            None => {}
        }
    }
}

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    events: EventHandler,
    session: Session,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, events: EventHandler, source: Arc<dyn CatalogSource>) -> Self {
        let session = Session::new(app, source, events.fetch_sender());
        Self {
            terminal,
            events,
            session,
        }
    }

    /// Run the main TUI loop starting on `screen`.
    pub async fn run(&mut self, screen: Screen) -> Result<()> {
        info!("Starting TUI main loop");
        self.session.mount(screen);

        loop {
            self.terminal.draw(|f| render(self.session.app().state(), f))?;

            let event = self.events.next().await?;
            if self.session.handle_event(event) {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
