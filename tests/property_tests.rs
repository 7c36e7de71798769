use proptest::prelude::*;
use tooldir::catalog::{Catalog, ToolRecord, slugify};
use tooldir::query::{ALL_CATEGORIES, PageMarker, QueryState, page_window, total_pages};

fn record_strategy() -> impl Strategy<Value = (String, Option<String>, Option<String>)> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,12}",
        prop::option::of(prop_oneof![
            Just("Image".to_string()),
            Just("Video".to_string()),
            Just("Dev".to_string()),
            Just(String::new()),
        ]),
        prop::option::of("[a-z ]{0,20}"),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, category, description))| {
                let mut record = ToolRecord::new(i as i64, name);
                record.category = category;
                record.description = description;
                record
            })
            .collect();
        Catalog::from_records(records).unwrap()
    })
}

proptest! {
    #[test]
    fn test_slugify_idempotent(s: String) {
        let once = slugify(&s);
        assert_eq!(slugify(&once), once);
        assert!(!once.starts_with('-') && !once.ends_with('-'));
        assert!(!once.contains("--"));
    }

    #[test]
    fn test_category_counts_sum_to_total(catalog in catalog_strategy()) {
        let categories = catalog.categories();
        assert_eq!(categories[0].name, ALL_CATEGORIES);
        assert_eq!(categories[0].count, catalog.len());

        let with_category = catalog.records().iter().filter(|r| r.category().is_some()).count();
        let sum: usize = categories.iter().skip(1).map(|c| c.count).sum();
        assert_eq!(sum, with_category);
        assert!(categories.iter().skip(1).all(|c| c.count > 0));
    }

    #[test]
    fn test_filter_is_subset_and_matches(catalog in catalog_strategy(), search in "[a-z]{0,3}") {
        let state = QueryState::new().with_search(search.clone());
        let filtered = catalog.filter(&state);
        assert!(filtered.len() <= catalog.len());
        for record in filtered {
            let haystack = format!(
                "{} {}",
                record.name.to_lowercase(),
                record.description.as_deref().unwrap_or("").to_lowercase()
            );
            assert!(haystack.contains(&search));
        }
    }

    #[test]
    fn test_filter_idempotent(catalog in catalog_strategy(), search in "[a-z]{0,3}") {
        let state = QueryState::new().with_search(search);
        let once: Vec<ToolRecord> = catalog.filter(&state).into_iter().cloned().collect();
        let refiltered = Catalog::from_records(once.clone()).unwrap();
        let twice: Vec<ToolRecord> = refiltered.filter(&state).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_partition_filtered_list(catalog in catalog_strategy(), page_size in 1usize..12) {
        let state = QueryState::new();
        let total = catalog.filter(&state).len();
        let pages = total_pages(total, page_size);

        let mut seen = 0;
        for number in 1..=pages {
            let listing = catalog.listing(&state.clone().with_page(number), page_size);
            assert!(listing.page.items.len() <= page_size);
            seen += listing.page.items.len();
        }
        assert_eq!(seen, total);
    }

    #[test]
    fn test_page_window_shape(total in 1usize..60, offset in 0usize..60) {
        let current = offset % total + 1;
        let window = page_window(current, total);

        assert_eq!(window.first(), Some(&PageMarker::Page(1)));
        assert_eq!(window.last(), Some(&PageMarker::Page(total)));
        assert!(window.contains(&PageMarker::Page(current)));
        assert!(window.len() <= 7);
    }

    #[test]
    fn test_changing_filters_resets_page(page in 2usize..20, search in "[a-z]{1,5}") {
        let mut state = QueryState::new().with_page(page);
        state.set_search(search);
        assert_eq!(state.page(), 1);

        let mut state = QueryState::new().with_page(page);
        state.set_category("Dev");
        assert_eq!(state.page(), 1);
    }
}
