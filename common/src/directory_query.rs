//! In-memory filter, search and pagination over the loaded collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::company::{Company, CompanyAttribute};

/// Active equality constraints. An empty value places no constraint.
pub type FilterCriteria = BTreeMap<CompanyAttribute, String>;

/// Everything needed to compute one visible page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DirectoryQuery {
    pub filters: FilterCriteria,
    pub search_term: String,
    /// 1-based.
    pub page: u64,
    pub page_size: u64,
}

impl DirectoryQuery {
    pub fn run(&self, records: &[Company]) -> QueryResult {
        query(records, &self.filters, &self.search_term, self.page, self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryResult {
    pub total: u64,
    pub total_pages: u64,
    pub page_records: Vec<Company>,
}

/// Why a page has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing was loaded at all.
    NoData,
    /// Records exist but the constraints exclude all of them.
    NoMatches,
    /// Matches exist but the page lies past the last one.
    PageOutOfRange,
}

impl QueryResult {
    /// 1-based inclusive bounds of the rows on this page, within `total`.
    pub fn showing_range(&self, page: u64, page_size: u64) -> Option<(u64, u64)> {
        if self.page_records.is_empty() || page == 0 {
            return None;
        }
        let first = (page - 1).saturating_mul(page_size).saturating_add(1);
        let last = first + self.page_records.len() as u64 - 1;
        Some((first, last))
    }

    pub fn empty_state(&self, loaded_records: usize) -> Option<EmptyState> {
        if !self.page_records.is_empty() {
            None
        } else if loaded_records == 0 {
            Some(EmptyState::NoData)
        } else if self.total == 0 {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::PageOutOfRange)
        }
    }
}

pub fn matches_filters(company: &Company, filters: &FilterCriteria) -> bool {
    filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .all(|(attribute, value)| company.attribute(*attribute).as_deref() == Some(value.as_str()))
}

/// `needle_lowercase` must already be lower-cased.
fn matches_search(company: &Company, needle_lowercase: &str) -> bool {
    needle_lowercase.is_empty() || company.name.to_lowercase().contains(needle_lowercase)
}

/// Filters `records` (AND of equality filters, then case-insensitive name
/// search) and cuts out the `page`-th window of `page_size` rows.
///
/// Source order is kept. A window starting past the matches is empty, and so
/// is page 0.
pub fn query(records: &[Company], filters: &FilterCriteria, search_term: &str, page: u64, page_size: u64) -> QueryResult {
    let needle = search_term.to_lowercase();
    let window_start = page.checked_sub(1).map(|p| p.saturating_mul(page_size));

    let mut total: u64 = 0;
    let mut page_records = Vec::new();
    for company in records {
        if !matches_filters(company, filters) || !matches_search(company, &needle) {
            continue;
        }
        if let Some(start) = window_start {
            if total >= start && total - start < page_size {
                page_records.push(company.clone());
            }
        }
        total += 1;
    }

    let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };
    QueryResult { total, total_pages, page_records }
}
