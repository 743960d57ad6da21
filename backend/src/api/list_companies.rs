//! Endpoint for loading the whole company collection.

use common::company::Company;

use crate::data_utils::{company_source::{fetch_company_json, parse_companies}, source_config::get_company_source};

pub async fn list_companies() -> anyhow::Result<Vec<Company>> {
    let source = get_company_source();
    let json = fetch_company_json(&source).await?;
    let companies = parse_companies(&json)?;
    tracing::info!("Loaded {} companies from {}", companies.len(), source);
    Ok(companies)
}
