//! Client API call for the company collection.

use common::company::Company;
use dioxus::prelude::*;

#[server]
pub async fn list_companies() -> Result<Vec<Company>, ServerFnError> {
    let x = backend::api::list_companies().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
