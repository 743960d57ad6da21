//! Server-side data source for the company directory.

pub mod api;
pub mod data_utils;
pub mod server_extra;
