//! Scenario and property checks for the query pipeline over the bundled collection.

use common::company::{Company, CompanyAttribute};
use common::directory_const::PAGE_SIZE;
use common::directory_query::{EmptyState, FilterCriteria, query};
use common::directory_view::DirectoryView;
use common::filter_config::default_filter_options;

fn bundled_companies() -> Vec<Company> {
    serde_json::from_str(include_str!("../../data/companies.json")).expect("bundled collection parses")
}

fn names(records: &[Company]) -> Vec<&str> {
    records.iter().map(|c| c.name.as_str()).collect()
}

fn ids(records: &[Company]) -> Vec<String> {
    records.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn unfiltered_collection_pages_by_ten() {
    let records = bundled_companies();
    assert_eq!(records.len(), 25);

    let first = query(&records, &FilterCriteria::new(), "", 1, PAGE_SIZE);
    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(ids(&first.page_records), ids(&records[0..10]));

    let last = query(&records, &FilterCriteria::new(), "", 3, PAGE_SIZE);
    assert_eq!(last.page_records.len(), 5);
    assert_eq!(ids(&last.page_records), ids(&records[20..25]));
}

#[test]
fn banking_filter_matches_three() {
    let records = bundled_companies();
    let mut filters = FilterCriteria::new();
    filters.insert(CompanyAttribute::Industry, "Banking".to_string());

    let result = query(&records, &filters, "", 1, PAGE_SIZE);
    assert_eq!(result.total, 3);
    assert_eq!(result.total_pages, 1);
    let expected: Vec<_> = records.iter().filter(|c| c.industry == "Banking").cloned().collect();
    assert_eq!(result.page_records, expected);
}

#[test]
fn tech_search_ignores_case() {
    let records = bundled_companies();
    let result = query(&records, &FilterCriteria::new(), "tech", 1, PAGE_SIZE);
    let found = names(&result.page_records);
    assert!(found.contains(&"TechCorp"));
    assert!(found.contains(&"FinTech Solutions"));
}

#[test]
fn narrowed_to_nothing_is_the_no_matches_state() {
    let records = bundled_companies();
    let mut filters = FilterCriteria::new();
    filters.insert(CompanyAttribute::Industry, "Banking".to_string());
    filters.insert(CompanyAttribute::Location, "Japan".to_string());

    let result = query(&records, &filters, "", 1, PAGE_SIZE);
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.empty_state(records.len()), Some(EmptyState::NoMatches));
}

#[test]
fn totals_match_brute_force_for_every_configured_combination() {
    let records = bundled_companies();
    let options = default_filter_options();
    let industries: Vec<String> = std::iter::once(String::new()).chain(options[0].options.iter().cloned()).collect();
    let locations: Vec<String> = std::iter::once(String::new()).chain(options[1].options.iter().cloned()).collect();

    for industry in &industries {
        for location in &locations {
            for term in ["", "tech", "BANK", "o", "zzz"] {
                let mut filters = FilterCriteria::new();
                filters.insert(CompanyAttribute::Industry, industry.clone());
                filters.insert(CompanyAttribute::Location, location.clone());

                let expected = records
                    .iter()
                    .filter(|c| industry.is_empty() || &c.industry == industry)
                    .filter(|c| location.is_empty() || &c.location == location)
                    .filter(|c| c.name.to_lowercase().contains(&term.to_lowercase()))
                    .count() as u64;

                let result = query(&records, &filters, term, 1, PAGE_SIZE);
                assert_eq!(result.total, expected, "{industry:?} {location:?} {term:?}");
                assert_eq!(result.total_pages, expected.div_ceil(PAGE_SIZE));
                assert_eq!(result.total_pages == 0, result.total == 0);
            }
        }
    }
}

#[test]
fn window_never_exceeds_page_size() {
    let records = bundled_companies();
    for page_size in 1..=12 {
        for page in 1..=30 {
            let result = query(&records, &FilterCriteria::new(), "", page, page_size);
            assert!(result.page_records.len() as u64 <= page_size);
            if (page - 1) * page_size >= result.total {
                assert!(result.page_records.is_empty(), "page {page} size {page_size}");
            }
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let records = bundled_companies();
    let view = DirectoryView::default().with_filter(CompanyAttribute::Location, "Mumbai").with_search("bank");
    let query = view.to_query(PAGE_SIZE);
    assert_eq!(query.run(&records), query.run(&records));
}

#[test]
fn changing_constraints_from_a_later_page_requeries_page_one() {
    let records = bundled_companies();
    let on_third = DirectoryView::default().with_selected_page(2);
    assert_eq!(on_third.to_query(PAGE_SIZE).run(&records).page_records.len(), 5);

    let filtered = on_third.with_filter(CompanyAttribute::Location, "Mumbai");
    assert_eq!(filtered.page, 1);
    let result = filtered.to_query(PAGE_SIZE).run(&records);
    assert_eq!(result.total, 4);
    assert_eq!(result.page_records.len(), 4);

    let searched = on_third.with_search("a");
    assert_eq!(searched.page, 1);
    assert!(!searched.to_query(PAGE_SIZE).run(&records).page_records.is_empty());
}

#[test]
fn stranded_page_clamps_to_last() {
    let records = bundled_companies();
    let stranded = DirectoryView { page: 3, ..DirectoryView::default().with_filter(CompanyAttribute::Industry, "Banking") };
    let result = stranded.to_query(PAGE_SIZE).run(&records);
    assert_eq!(result.empty_state(records.len()), Some(EmptyState::PageOutOfRange));

    let clamped = stranded.clamped(result.total_pages).expect("page 3 of 1 moves");
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.to_query(PAGE_SIZE).run(&records).total, 3);
}
