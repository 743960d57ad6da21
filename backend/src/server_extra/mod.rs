//! Plain HTTP routes mounted next to the server functions.

pub mod companies_json;
