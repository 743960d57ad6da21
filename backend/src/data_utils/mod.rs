//! Locating, reading and decoding the company collection.

pub mod source_config;
pub mod company_source;
