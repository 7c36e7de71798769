//! Terminal User Interface for tooldir.
//!
//! Two screens, each mounted with fresh state and its own catalog fetch:
//! - **List**: search box, category tabs and a paginated card list
//! - **Detail**: a single tool looked up by slug

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::EventHandler;
pub use runner::TuiRunner;
pub use state::Screen;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const LOADING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const READY: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const FAILED: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const SELECTED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const CATEGORY: Color = Color::Rgb(186, 85, 211); // Orchid
    pub const FEATURED: Color = Color::Rgb(255, 255, 0); // Yellow
    pub const TAG: Color = Color::Rgb(100, 149, 237); // Cornflower
    pub const HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
    pub const DIM: Color = Color::DarkGray;
}
