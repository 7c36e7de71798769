//! Plain-text rendering for the non-interactive subcommands.

use colored::*;

use tooldir::catalog::{CatalogIssue, ToolRecord};
use tooldir::query::{CategoryCount, IconClass, Listing, PageMarker};

/// Tags shown on a card before collapsing into "+N more".
pub const DEFAULT_CARD_TAG_LIMIT: usize = 5;

/// Visible tags plus how many were cut off.
pub fn card_tags(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = tags.len().min(limit);
    (&tags[..shown], tags.len() - shown)
}

/// One listing card.
pub fn render_card(record: &ToolRecord, tag_limit: usize) -> String {
    let class = IconClass::of(record);
    let mut out = format!("{} {}", class.glyph(), record.name.bold());
    if let Some(category) = record.category() {
        out.push_str(&format!(" {}", format!("[{}]", category).magenta()));
    }
    if record.featured {
        out.push_str(&format!(" {}", "★ featured".yellow()));
    }
    out.push('\n');

    if let Some(text) = record.tagline.as_deref().or(record.description.as_deref()) {
        out.push_str(&format!("   {}\n", text));
    }

    let (tags, hidden) = card_tags(&record.tags, tag_limit);
    if !tags.is_empty() {
        let mut line: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
        if hidden > 0 {
            line.push(format!("+{} more", hidden));
        }
        out.push_str(&format!("   {}\n", line.join(" ").dimmed()));
    }

    if let Some(link) = record.card_link() {
        out.push_str(&format!("   {} {}\n", "→".cyan(), link));
    }
    out.push_str(&format!("   {} {}\n", "slug:".dimmed(), record.route_slug()));
    out
}

/// Category bar with counts, marking the selected one.
pub fn render_categories(categories: &[CategoryCount], selected: &str) -> String {
    categories
        .iter()
        .map(|c| {
            let entry = format!("{} ({})", c.name, c.count);
            if c.name == selected {
                format!("{}", entry.reversed())
            } else {
                entry
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Page selector line, e.g. "‹ 1 … 4 [5] 6 … 10 ›".
pub fn render_page_selector(window: &[PageMarker], current: usize, has_prev: bool, has_next: bool) -> String {
    let mut parts = vec![if has_prev { "‹".to_string() } else { " ".to_string() }];
    for marker in window {
        parts.push(match marker {
            PageMarker::Page(n) if *n == current => format!("[{}]", n),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Gap => "…".to_string(),
        });
    }
    parts.push(if has_next { "›".to_string() } else { " ".to_string() });
    parts.join(" ")
}

/// Full listing: categories, summary, cards, pagination and footer.
pub fn render_listing(listing: &Listing<'_>, selected_category: &str, tag_limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_categories(&listing.categories, selected_category));
    out.push_str("\n\n");

    if listing.page.is_empty() {
        out.push_str(&format!("{}\n", listing.empty_message().yellow()));
        return out;
    }

    if let Some(summary) = listing.result_summary() {
        out.push_str(&format!("{}\n\n", summary.green()));
    }

    for record in &listing.page.items {
        out.push_str(&render_card(record, tag_limit));
        out.push('\n');
    }

    if listing.page.has_navigation() {
        out.push_str(&render_page_selector(
            &listing.page.window(),
            listing.page.number,
            listing.page.has_prev(),
            listing.page.has_next(),
        ));
        out.push('\n');
    }
    if let Some(footer) = listing.footer() {
        out.push_str(&format!("{}\n", footer.dimmed()));
    }
    out
}

/// Detail view of one record.
pub fn render_detail(record: &ToolRecord) -> String {
    let class = IconClass::of(record);
    let mut out = String::new();

    if let Some(category) = record.category() {
        out.push_str(&format!("{}\n", category.blue()));
    }
    out.push_str(&format!("{} {}\n", class.glyph(), record.name.bold()));
    if let Some(tagline) = &record.tagline {
        out.push_str(&format!("{}\n", tagline.italic()));
    }
    if let Some(link) = record.page_link() {
        out.push_str(&format!("{} {}\n", "Visit site:".cyan(), link));
    }

    if !record.stats.is_empty() {
        out.push('\n');
        for (key, value) in &record.stats {
            out.push_str(&format!("  {} {}\n", format!("{}:", key).dimmed(), value.bold()));
        }
    }

    if let Some(description) = &record.description {
        out.push_str(&format!("\n{}\n{}\n", "About".bold(), description));
    }

    if !record.features.is_empty() {
        out.push_str(&format!("\n{}\n", "Key Features".bold()));
        for feature in &record.features {
            out.push_str(&format!("  • {}\n", feature));
        }
    }

    if !record.tags.is_empty() {
        out.push_str(&format!("\n{}\n  {}\n", "Tags".bold(), record.tags.join(", ")));
    }

    let info: Vec<(&str, &String)> = [
        ("Pricing", record.pricing.as_ref()),
        ("Company", record.company.as_ref()),
        ("Founded", record.founded.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();
    if !info.is_empty() {
        out.push_str(&format!("\n{}\n", "Quick Info".bold()));
        for (label, value) in info {
            out.push_str(&format!("  {} {}\n", format!("{}:", label).dimmed(), value));
        }
    }
    out
}

pub fn render_not_found(slug: &str) -> String {
    format!(
        "{}\nNo tool matches the slug: {}\n",
        "Tool not found".red().bold(),
        slug
    )
}

pub fn render_load_error(error: &str) -> String {
    format!(
        "{}\n{}\nFailed to load data. Try again.\n",
        "Something went wrong".red().bold(),
        error
    )
}

pub fn render_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} {}\n", "warning:".yellow(), issue))
        .collect()
}
