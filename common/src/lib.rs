//! Model and logic shared by the directory viewer and its data source.

extern crate serde;

pub mod company;
pub mod directory_const;
pub mod filter_config;
pub mod directory_query;
pub mod directory_view;
pub mod pagination;
pub mod debounce;
