//! TUI Views
//!
//! Rendering for the list screen, the detail screen and the help overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use tooldir::catalog::ToolRecord;
use tooldir::query::{IconClass, Listing, PageMarker};

use super::colors;
use super::state::{AppState, DetailView, InteractionMode, LoadState, Screen};

/// Render the mounted screen plus any overlay.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_header(state, frame, chunks[0]);
    match &state.screen {
        Screen::List => render_list_screen(state, frame, chunks[1]),
        Screen::Detail { .. } => render_detail_screen(state, frame, chunks[1]),
    }
    render_keybinds(state, frame, chunks[2]);

    if state.mode == InteractionMode::Help {
        render_help(frame, area);
    }
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let status = match &state.load {
        LoadState::Loading => Span::styled("loading…", Style::default().fg(colors::LOADING)),
        LoadState::Ready => Span::styled(
            format!("{} tools", state.catalog.len()),
            Style::default().fg(colors::READY),
        ),
        LoadState::Failed(_) => Span::styled("load failed", Style::default().fg(colors::FAILED)),
    };
    let line = Line::from(vec![
        Span::styled(
            " tooldir ",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        status,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list_screen(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let listing = state.listing();
    render_search(state, &listing, frame, chunks[0]);
    render_categories(state, &listing, frame, chunks[1]);
    render_tools(state, &listing, frame, chunks[2]);
    render_pagination(&listing, frame, chunks[3]);
}

fn render_search(state: &AppState, listing: &Listing<'_>, frame: &mut Frame, area: Rect) {
    let editing = state.mode == InteractionMode::Search;
    let mut spans = vec![Span::raw(state.query.search().to_string())];
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(colors::KEYBIND)));
    } else if !state.query.is_searching() {
        spans.push(Span::styled(
            "Search for tools, features, or categories… (/)",
            Style::default().fg(colors::DIM),
        ));
    }

    let title = match listing.result_summary() {
        Some(summary) => format!(" Search · {} ", summary),
        None => " Search ".to_string(),
    };
    let border = if editing {
        Style::default().fg(colors::KEYBIND)
    } else {
        Style::default()
    };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(input, area);
}

fn render_categories(state: &AppState, listing: &Listing<'_>, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = listing
        .categories
        .iter()
        .map(|c| Line::from(format!("{} {}", c.name, c.count)))
        .collect();
    let selected = listing
        .categories
        .iter()
        .position(|c| c.name == state.query.category())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(colors::SELECTED).add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(" Browse by Category "));
    frame.render_widget(tabs, area);
}

fn format_card(record: &ToolRecord, tag_limit: usize) -> ListItem<'static> {
    let class = IconClass::of(record);
    let mut title = vec![
        Span::raw(format!("{} ", class.glyph())),
        Span::styled(record.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(category) = record.category() {
        title.push(Span::styled(
            format!("  [{}]", category),
            Style::default().fg(colors::CATEGORY),
        ));
    }
    if record.featured {
        title.push(Span::styled("  ★", Style::default().fg(colors::FEATURED)));
    }

    let mut lines = vec![Line::from(title)];
    if let Some(text) = record.tagline.as_deref().or(record.description.as_deref()) {
        lines.push(Line::from(Span::styled(
            format!("   {}", text),
            Style::default().fg(colors::DIM),
        )));
    }
    if !record.tags.is_empty() {
        let shown = record.tags.len().min(tag_limit);
        let mut tags: Vec<String> = record.tags[..shown].iter().map(|t| format!("#{}", t)).collect();
        if record.tags.len() > shown {
            tags.push(format!("+{} more", record.tags.len() - shown));
        }
        lines.push(Line::from(Span::styled(
            format!("   {}", tags.join(" ")),
            Style::default().fg(colors::TAG),
        )));
    }
    if let Some(link) = record.card_link() {
        lines.push(Line::from(vec![
            Span::styled("   → ", Style::default().fg(colors::KEYBIND)),
            Span::raw(link.to_string()),
        ]));
    }
    ListItem::new(lines)
}

fn render_tools(state: &AppState, listing: &Listing<'_>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.category_label()));

    if state.is_loading() {
        let message = Paragraph::new("Loading tools…")
            .style(Style::default().fg(colors::LOADING))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    if listing.page.is_empty() {
        let mut lines = vec![
            Line::from(Span::styled(
                "No tools found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(listing.empty_message()),
        ];
        if listing.filtered {
            lines.push(Line::from(Span::styled(
                "Press c to clear all filters",
                Style::default().fg(colors::KEYBIND),
            )));
        }
        if let LoadState::Failed(e) = &state.load {
            lines.push(Line::from(Span::styled(e.clone(), Style::default().fg(colors::FAILED))));
            lines.push(Line::from(Span::styled(
                "Press r to retry",
                Style::default().fg(colors::KEYBIND),
            )));
        }
        let message = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = listing
        .page
        .items
        .iter()
        .map(|r| format_card(r, state.tag_limit))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_pagination(listing: &Listing<'_>, frame: &mut Frame, area: Rect) {
    let page = &listing.page;
    let mut spans = Vec::new();

    if page.has_navigation() {
        let arrow = |enabled: bool, glyph: &'static str| {
            let color = if enabled { colors::KEYBIND } else { colors::DIM };
            Span::styled(glyph, Style::default().fg(color))
        };
        spans.push(arrow(page.has_prev(), "‹ "));
        for marker in page.window() {
            spans.push(match marker {
                PageMarker::Page(n) if n == page.number => Span::styled(
                    format!(" {} ", n),
                    Style::default().fg(colors::SELECTED).add_modifier(Modifier::REVERSED),
                ),
                PageMarker::Page(n) => Span::raw(format!(" {} ", n)),
                PageMarker::Gap => Span::styled(" … ", Style::default().fg(colors::DIM)),
            });
        }
        spans.push(arrow(page.has_next(), " ›"));
        spans.push(Span::raw("   "));
    }

    if let Some(footer) = listing.footer() {
        spans.push(Span::styled(footer, Style::default().fg(colors::DIM)));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn detail_lines(record: &ToolRecord) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ))
    };
    let mut lines = Vec::new();

    if let Some(category) = record.category() {
        lines.push(Line::from(Span::styled(
            category.to_string(),
            Style::default().fg(colors::CATEGORY),
        )));
    }
    lines.push(Line::from(vec![
        Span::raw(format!("{} ", IconClass::of(record).glyph())),
        Span::styled(record.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]));
    if let Some(tagline) = &record.tagline {
        lines.push(Line::from(Span::styled(
            tagline.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(link) = record.page_link() {
        lines.push(Line::from(vec![
            Span::styled("Visit site: ", Style::default().fg(colors::KEYBIND)),
            Span::raw(link.to_string()),
        ]));
    }

    if !record.stats.is_empty() {
        lines.push(Line::default());
        let stats: Vec<Span> = record
            .stats
            .iter()
            .flat_map(|(key, value)| {
                [
                    Span::styled(format!("{} ", value), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("{}   ", key), Style::default().fg(colors::DIM)),
                ]
            })
            .collect();
        lines.push(Line::from(stats));
    }

    if let Some(description) = &record.description {
        lines.push(Line::default());
        lines.push(heading("About"));
        lines.push(Line::from(description.clone()));
    }

    if !record.features.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Key Features"));
        for feature in &record.features {
            lines.push(Line::from(format!("  • {}", feature)));
        }
    }

    if !record.tags.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Tags"));
        lines.push(Line::from(Span::styled(
            record.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join("  "),
            Style::default().fg(colors::TAG),
        )));
    }

    let info = [
        ("Pricing", &record.pricing),
        ("Company", &record.company),
        ("Founded", &record.founded),
    ];
    if info.iter().any(|(_, v)| v.is_some()) {
        lines.push(Line::default());
        lines.push(heading("Quick Info"));
        for (label, value) in info {
            if let Some(value) = value {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}: ", label), Style::default().fg(colors::DIM)),
                    Span::raw(value.clone()),
                ]));
            }
        }
    }
    lines
}

fn render_detail_screen(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Tool ");
    let (lines, alignment) = match state.detail() {
        DetailView::Loading => (vec![Line::from("Loading tool details…")], Alignment::Center),
        DetailView::Failed(e) => (
            vec![
                Line::from(Span::styled(
                    "Something went wrong",
                    Style::default().fg(colors::FAILED).add_modifier(Modifier::BOLD),
                )),
                Line::from(e.to_string()),
                Line::from("Failed to load data. Press r to reload."),
            ],
            Alignment::Center,
        ),
        DetailView::NotFound(slug) => (
            vec![
                Line::from(Span::styled(
                    "Tool not found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("No tool matches the slug: {}", slug)),
                Line::from("Press Esc to go back to the directory."),
            ],
            Alignment::Center,
        ),
        DetailView::Found(record) => (detail_lines(record), Alignment::Left),
    };

    let widget = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(widget, area);
}

fn render_keybinds(state: &AppState, frame: &mut Frame, area: Rect) {
    let binds: &[(&str, &str)] = match (&state.screen, state.mode) {
        (_, InteractionMode::Search) => &[("Enter/Esc", "done"), ("Backspace", "delete")],
        (Screen::List, _) => &[
            ("/", "search"),
            ("Tab", "category"),
            ("←/→", "page"),
            ("Enter", "open"),
            ("c", "clear"),
            ("?", "help"),
            ("q", "quit"),
        ],
        (Screen::Detail { .. }, _) => &[("Esc", "back"), ("r", "reload"), ("?", "help"), ("q", "quit")],
    };

    let spans: Vec<Span> = binds
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" <{}>", key), Style::default().fg(colors::KEYBIND)),
                Span::styled(format!(" {}", action), Style::default().fg(colors::DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    let lines = vec![
        Line::from("List"),
        Line::from("  /            search name, description, tagline"),
        Line::from("  Tab ] / [    next / previous category"),
        Line::from("  j k ↑ ↓      move selection"),
        Line::from("  n p → ←      next / previous page"),
        Line::from("  Enter        open tool"),
        Line::from("  c            clear all filters"),
        Line::from("  r            reload"),
        Line::default(),
        Line::from("Tool"),
        Line::from("  Esc h        back to directory"),
        Line::from("  r            reload"),
        Line::default(),
        Line::from("  q  Ctrl+C    quit"),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help ")),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
