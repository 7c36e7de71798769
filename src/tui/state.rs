//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `Screen`: Which view is mounted (list or detail)
//! - `InteractionMode`: Current input mode (normal, search input, help)
//! - `LoadState`: Progress of the mounted view's catalog fetch

use tooldir::catalog::{Catalog, ToolRecord};
use tooldir::query::{ALL_CATEGORIES, Listing, QueryState};
use tooldir::source::FetchMessage;

/// The mounted view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Searchable, paginated catalog
    #[default]
    List,
    /// A single tool, keyed by slug
    Detail { slug: String },
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing in the search box
    Search,
    /// Help overlay visible
    Help,
}

/// Progress of the catalog fetch for the mounted view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Fetch failed; the catalog is empty
    Failed(String),
}

/// What the detail screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Failed(&'a str),
    NotFound(&'a str),
    Found(&'a ToolRecord),
}

/// Actions that need the runner (they start a fetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Remount the current screen
    Reload,
    /// Navigate to a screen
    Open(Screen),
}

/// The primary application state.
///
/// Everything here belongs to the mounted view and is reset on each mount.
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub mode: InteractionMode,
    pub load: LoadState,
    pub catalog: Catalog,
    pub query: QueryState,
    /// Selected row within the current page
    pub selected: usize,
    pub page_size: usize,
    pub tag_limit: usize,
    /// Mount counter; fetch results from other generations are stale
    pub generation: u64,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(page_size: usize, tag_limit: usize) -> Self {
        Self {
            screen: Screen::default(),
            mode: InteractionMode::default(),
            load: LoadState::default(),
            catalog: Catalog::empty(),
            query: QueryState::new(),
            selected: 0,
            page_size: page_size.max(1),
            tag_limit,
            generation: 0,
            pending: None,
            should_quit: false,
        }
    }

    /// Mount a screen with fresh state. Returns the new generation.
    pub fn mount(&mut self, screen: Screen) -> u64 {
        self.generation += 1;
        self.screen = screen;
        self.mode = InteractionMode::Normal;
        self.load = LoadState::Loading;
        self.catalog = Catalog::empty();
        self.query = QueryState::new();
        self.selected = 0;
        self.generation
    }

    /// Apply a fetch result. Returns false if it belongs to an older mount.
    pub fn apply_fetch(&mut self, message: FetchMessage) -> bool {
        if message.generation != self.generation {
            return false;
        }
        self.load = match message.outcome.error {
            Some(e) => LoadState::Failed(e.to_string()),
            None => LoadState::Ready,
        };
        self.catalog = message.outcome.catalog;
        self.selected = 0;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Categories and the current page
    pub fn listing(&self) -> Listing<'_> {
        self.catalog.listing(&self.query, self.page_size)
    }

    /// Record under the cursor on the list screen
    pub fn selected_record(&self) -> Option<&ToolRecord> {
        self.listing().page.items.get(self.selected).copied()
    }

    /// Number of rows on the current page
    pub fn rows_on_page(&self) -> usize {
        self.listing().page.items.len()
    }

    /// What the detail screen should show
    pub fn detail(&self) -> DetailView<'_> {
        let Screen::Detail { slug } = &self.screen else {
            return DetailView::NotFound("");
        };
        match &self.load {
            LoadState::Loading => DetailView::Loading,
            LoadState::Failed(e) => DetailView::Failed(e),
            LoadState::Ready => match self.catalog.find_by_slug(slug) {
                Some(record) => DetailView::Found(record),
                None => DetailView::NotFound(slug),
            },
        }
    }

    /// Select the category `offset` steps away, wrapping around.
    pub fn cycle_category(&mut self, offset: isize) {
        let categories = self.catalog.categories();
        let len = categories.len() as isize;
        let current = categories
            .iter()
            .position(|c| c.name == self.query.category())
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        self.query.set_category(categories[next].name.clone());
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let total = self.listing().page.total_pages;
        self.query.next_page(total);
        self.selected = 0;
    }

    pub fn prev_page(&mut self) {
        self.query.prev_page();
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let rows = self.rows_on_page();
        if rows == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, rows as isize - 1);
        self.selected = next as usize;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.push_search_char(c);
        self.selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.query.pop_search_char();
        self.selected = 0;
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
        self.selected = 0;
    }

    /// Header hint for the active category
    pub fn category_label(&self) -> &str {
        if self.query.category() == ALL_CATEGORIES {
            "All tools"
        } else {
            self.query.category()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooldir::catalog::Catalog;
    use tooldir::error::CatalogError;
    use tooldir::source::LoadOutcome;

    fn ready_state() -> AppState {
        let mut state = AppState::new(2, 5);
        let generation = state.mount(Screen::List);
        let catalog = Catalog::from_json(
            r#"[
                {"id": 1, "name": "Midjourney", "category": "Image"},
                {"id": 2, "name": "Copilot", "category": "Dev"},
                {"id": 3, "name": "DALL-E", "category": "Image"}
            ]"#,
        )
        .unwrap();
        assert!(state.apply_fetch(FetchMessage {
            generation,
            outcome: LoadOutcome { catalog, error: None },
        }));
        state
    }

    #[test]
    fn test_mount_resets_state() {
        let mut state = ready_state();
        state.push_search_char('x');
        let generation = state.mount(Screen::Detail {
            slug: "copilot".to_string(),
        });
        assert_eq!(generation, 2);
        assert!(state.is_loading());
        assert!(state.catalog.is_empty());
        assert_eq!(state.query, QueryState::new());
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = AppState::new(10, 5);
        let old = state.mount(Screen::List);
        state.mount(Screen::Detail {
            slug: "x".to_string(),
        });

        let applied = state.apply_fetch(FetchMessage {
            generation: old,
            outcome: LoadOutcome {
                catalog: Catalog::empty(),
                error: None,
            },
        });
        assert!(!applied);
        assert!(state.is_loading());
    }

    #[test]
    fn test_failed_fetch() {
        let mut state = AppState::new(10, 5);
        let generation = state.mount(Screen::List);
        state.apply_fetch(FetchMessage {
            generation,
            outcome: LoadOutcome {
                catalog: Catalog::empty(),
                error: Some(CatalogError::InvalidData("bad".to_string())),
            },
        });
        assert!(matches!(state.load, LoadState::Failed(ref e) if e.contains("bad")));
        assert_eq!(state.listing().categories.len(), 1);
        assert!(state.listing().page.is_empty());
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut state = ready_state();
        state.cycle_category(1);
        assert_eq!(state.query.category(), "Image");
        state.cycle_category(1);
        assert_eq!(state.query.category(), "Dev");
        state.cycle_category(1);
        assert_eq!(state.query.category(), "All");
        state.cycle_category(-1);
        assert_eq!(state.query.category(), "Dev");
    }

    #[test]
    fn test_paging_and_selection() {
        let mut state = ready_state();
        assert_eq!(state.rows_on_page(), 2);
        state.move_selection(5);
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Copilot"));

        state.next_page();
        assert_eq!(state.query.page(), 2);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("DALL-E"));

        state.next_page();
        assert_eq!(state.query.page(), 2);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = ready_state();
        state.next_page();
        state.push_search_char('c');
        assert_eq!(state.query.page(), 1);
        assert_eq!(state.query.search(), "c");
    }

    #[test]
    fn test_detail_view_states() {
        let mut state = AppState::new(10, 5);
        let generation = state.mount(Screen::Detail {
            slug: "copilot".to_string(),
        });
        assert_eq!(state.detail(), DetailView::Loading);

        let catalog = Catalog::from_json(r#"[{"id": 2, "name": "Copilot"}]"#).unwrap();
        state.apply_fetch(FetchMessage {
            generation,
            outcome: LoadOutcome { catalog, error: None },
        });
        assert!(matches!(state.detail(), DetailView::Found(r) if r.name == "Copilot"));

        state.mount(Screen::Detail {
            slug: "missing".to_string(),
        });
        let generation = state.generation;
        state.apply_fetch(FetchMessage {
            generation,
            outcome: LoadOutcome {
                catalog: Catalog::empty(),
                error: None,
            },
        });
        assert_eq!(state.detail(), DetailView::NotFound("missing"));
    }
}
