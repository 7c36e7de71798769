//! TUI Application
//!
//! Owns the state and turns key presses into state changes. Anything that
//! needs a fetch is left in `pending` for the runner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InteractionMode, PendingAction, Screen};

/// Main TUI application
pub struct App {
    state: AppState,
}

impl App {
    pub fn new(page_size: usize, tag_limit: usize) -> Self {
        Self {
            state: AppState::new(page_size, tag_limit),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        match self.state.mode {
            InteractionMode::Help => self.state.mode = InteractionMode::Normal,
            InteractionMode::Search => self.handle_search_key(key),
            InteractionMode::Normal => match self.state.screen {
                Screen::List => self.handle_list_key(key),
                Screen::Detail { .. } => self.handle_detail_key(key),
            },
        }

        self.state.should_quit
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.mode = InteractionMode::Normal,
            KeyCode::Backspace => self.state.pop_search_char(),
            KeyCode::Char(c) => self.state.push_search_char(c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.mode = InteractionMode::Help,
            KeyCode::Char('/') => self.state.mode = InteractionMode::Search,
            KeyCode::Tab | KeyCode::Char(']') => self.state.cycle_category(1),
            KeyCode::BackTab | KeyCode::Char('[') => self.state.cycle_category(-1),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection(-1),
            KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => self.state.next_page(),
            KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => self.state.prev_page(),
            KeyCode::Char('c') => self.state.clear_filters(),
            KeyCode::Char('r') => self.state.pending = Some(PendingAction::Reload),
            KeyCode::Enter => {
                if let Some(record) = self.state.selected_record() {
                    let slug = record.route_slug();
                    self.state.pending = Some(PendingAction::Open(Screen::Detail { slug }));
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.mode = InteractionMode::Help,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                self.state.pending = Some(PendingAction::Open(Screen::List));
            }
            KeyCode::Char('r') => self.state.pending = Some(PendingAction::Reload),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooldir::catalog::Catalog;
    use tooldir::source::{FetchMessage, LoadOutcome};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new(10, 5);
        let generation = app.state_mut().mount(Screen::List);
        let catalog = Catalog::from_json(
            r#"[
                {"id": 1, "name": "Midjourney", "category": "Image"},
                {"id": 2, "name": "Copilot", "category": "Dev", "slug": "gh-copilot"}
            ]"#,
        )
        .unwrap();
        app.state_mut().apply_fetch(FetchMessage {
            generation,
            outcome: LoadOutcome { catalog, error: None },
        });
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));

        let mut app = loaded_app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_search_mode_typing() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.state().mode, InteractionMode::Search);

        // 'q' is text while searching, not quit
        for c in "cop".chars() {
            assert!(!app.handle_key(key(KeyCode::Char(c))));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().query.search(), "co");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().mode, InteractionMode::Normal);
        assert_eq!(app.state().listing().page.items.len(), 1);
    }

    #[test]
    fn test_open_detail_uses_route_slug() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.state().pending,
            Some(PendingAction::Open(Screen::Detail {
                slug: "gh-copilot".to_string()
            }))
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut app = App::new(10, 5);
        app.state_mut().mount(Screen::List);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().pending.is_none());
    }

    #[test]
    fn test_category_keys_and_clear() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().query.category(), "Image");
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.state().query.category(), "All");
    }

    #[test]
    fn test_detail_back_and_reload() {
        let mut app = App::new(10, 5);
        app.state_mut().mount(Screen::Detail {
            slug: "midjourney".to_string(),
        });
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.state().pending, Some(PendingAction::Reload));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().pending, Some(PendingAction::Open(Screen::List)));
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.state().mode, InteractionMode::Help);
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.state().mode, InteractionMode::Normal);
    }
}
