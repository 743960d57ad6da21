//! Fixed settings shared by the viewer and the data source.

/// Rows per table page.
pub const PAGE_SIZE: u64 = 10;

/// Search text must be stable this long before it is applied.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Numbered page buttons kept around the selected page.
pub const PAGE_RANGE_DISPLAYED: u64 = 3;

/// Numbered page buttons always kept at each end.
pub const MARGIN_PAGES_DISPLAYED: u64 = 1;

/// Path the raw collection is served at.
pub const COMPANIES_JSON_PATH: &str = "/companies.json";
