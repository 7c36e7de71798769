//! Event handling for the TUI.
//!
//! This module provides:
//! - `Event`: The unified event type (keyboard, fetch result, tick)
//! - `EventHandler`: Event stream merging terminal input with finished fetches

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;
use tokio::sync::mpsc;

use tooldir::source::FetchMessage;

/// Unified event type for the TUI.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// A catalog fetch finished
    Fetched(FetchMessage),
    /// Poll timeout with no input
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Handles keyboard, fetch and tick events.
///
/// Finished fetches are delivered before input; input is polled with the tick
/// interval as timeout, so a fetch result waits at most one tick.
pub struct EventHandler {
    tick_rate: Duration,
    fetch_tx: mpsc::UnboundedSender<FetchMessage>,
    fetch_rx: mpsc::UnboundedReceiver<FetchMessage>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            fetch_tx,
            fetch_rx,
        }
    }

    /// Sender that fetch tasks report back on.
    pub fn fetch_sender(&self) -> mpsc::UnboundedSender<FetchMessage> {
        self.fetch_tx.clone()
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Result<Event> {
        if let Ok(message) = self.fetch_rx.try_recv() {
            return Ok(Event::Fetched(message));
        }

        // Use tokio's blocking spawn to avoid blocking the async runtime
        let tick_rate = self.tick_rate;
        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                match event::read()? {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                    CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                    _ => Ok(Event::Tick),
                }
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250) // 250ms tick rate by default
    }
}
