//! Data access used by the frontend's server functions.

mod list_companies;
pub use list_companies::list_companies;
