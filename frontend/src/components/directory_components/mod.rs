pub mod search_filter_bar;
pub mod active_filter_chips;
pub mod company_table;
pub mod pagination_controls;
pub mod results_summary;
pub mod copy_link_button;
