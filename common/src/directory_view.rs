//! The viewer's mutable state: filters, committed search text and page.
//!
//! All transitions return a new value, so a caller applies each one as a
//! single state change.

use serde::{Deserialize, Serialize};

use crate::{
    company::CompanyAttribute,
    directory_query::{DirectoryQuery, FilterCriteria},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryView {
    pub filters: FilterCriteria,
    pub search_text: String,
    /// 1-based.
    pub page: u64,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self { filters: FilterCriteria::new(), search_text: String::new(), page: 1 }
    }
}

impl DirectoryView {
    /// Sets (or with an empty value, lifts) one filter and goes back to page 1.
    pub fn with_filter(&self, attribute: CompanyAttribute, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut filters = self.filters.clone();
        if value.is_empty() {
            filters.remove(&attribute);
        } else {
            filters.insert(attribute, value);
        }
        Self { filters, search_text: self.search_text.clone(), page: 1 }
    }

    pub fn without_filter(&self, attribute: CompanyAttribute) -> Self {
        self.with_filter(attribute, String::new())
    }

    /// Replaces the search text and goes back to page 1.
    pub fn with_search(&self, search_text: impl Into<String>) -> Self {
        Self { filters: self.filters.clone(), search_text: search_text.into(), page: 1 }
    }

    /// Takes a zero-based index as emitted by the pagination control.
    pub fn with_selected_page(&self, zero_based_index: u64) -> Self {
        Self { page: zero_based_index.saturating_add(1), ..self.clone() }
    }

    /// Filters empty, search empty, page 1.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn filter_value(&self, attribute: CompanyAttribute) -> &str {
        self.filters.get(&attribute).map(String::as_str).unwrap_or("")
    }

    pub fn active_filters(&self) -> impl Iterator<Item = (CompanyAttribute, &str)> {
        self.filters.iter().filter(|(_, value)| !value.is_empty()).map(|(attribute, value)| (*attribute, value.as_str()))
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || self.active_filters().next().is_some()
    }

    /// Zero-based index handed to the pagination control.
    pub fn selected_page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// The view moved onto a valid page, if it is not on one already.
    ///
    /// Page 0 moves to 1; a page past a non-zero `total_pages` moves to the
    /// last page. With no pages at all, any page other than 0 is left alone.
    pub fn clamped(&self, total_pages: u64) -> Option<Self> {
        let page = if self.page == 0 {
            1
        } else if total_pages > 0 && self.page > total_pages {
            total_pages
        } else {
            return None;
        };
        Some(Self { page, ..self.clone() })
    }

    pub fn to_query(&self, page_size: u64) -> DirectoryQuery {
        DirectoryQuery {
            filters: self.filters.clone(),
            search_term: self.search_text.clone(),
            page: self.page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u64) -> DirectoryView {
        DirectoryView { page, ..DirectoryView::default() }
    }

    #[test]
    fn filter_change_resets_page() {
        let view = on_page(4).with_filter(CompanyAttribute::Industry, "Banking");
        assert_eq!(view.page, 1);
        assert_eq!(view.filter_value(CompanyAttribute::Industry), "Banking");

        let view = DirectoryView { page: 3, ..view }.without_filter(CompanyAttribute::Industry);
        assert_eq!(view.page, 1);
        assert!(view.filters.is_empty());
    }

    #[test]
    fn search_change_resets_page() {
        let view = on_page(2).with_search("tech");
        assert_eq!(view.page, 1);
        assert_eq!(view.search_text, "tech");
    }

    #[test]
    fn page_selection_is_zero_based() {
        let view = DirectoryView::default().with_selected_page(2);
        assert_eq!(view.page, 3);
        assert_eq!(view.selected_page_index(), 2);
    }

    #[test]
    fn clear_resets_everything_at_once() {
        let view = DirectoryView::default()
            .with_filter(CompanyAttribute::Location, "UK")
            .with_search("bank")
            .with_selected_page(4);
        assert!(view.has_active_filters());
        let cleared = DirectoryView::cleared();
        assert_eq!(cleared, DirectoryView { filters: FilterCriteria::new(), search_text: String::new(), page: 1 });
        assert!(!cleared.has_active_filters());
    }

    #[test]
    fn clamps_to_last_page() {
        assert_eq!(on_page(5).clamped(1), Some(on_page(1)));
        assert_eq!(on_page(0).clamped(3), Some(on_page(1)));
        assert_eq!(on_page(2).clamped(3), None);
        assert_eq!(on_page(2).clamped(0), None);
    }

    #[test]
    fn view_converts_to_query() {
        let query = DirectoryView::default().with_search("x").with_selected_page(1).to_query(10);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.search_term, "x");
    }
}
