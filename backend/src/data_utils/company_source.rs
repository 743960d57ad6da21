use anyhow::Context;
use common::company::Company;

use crate::data_utils::source_config::CompanySource;

/// Raw collection text, exactly as stored at `source`.
pub async fn fetch_company_json(source: &CompanySource) -> anyhow::Result<String> {
    match source {
        CompanySource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read company collection from {}", path.display())),
        CompanySource::Url(url) => {
            let client = reqwest::Client::new();
            let response = client.get(url).send().await.with_context(|| format!("Failed to fetch {}", url))?;
            let status = response.status();
            let response_txt = response.text().await?;
            if status.is_client_error() || status.is_server_error() {
                anyhow::bail!("Error fetching {}: {}: {}", url, status, response_txt);
            }
            Ok(response_txt)
        }
    }
}

pub fn parse_companies(json: &str) -> anyhow::Result<Vec<Company>> {
    serde_json::from_str::<Vec<Company>>(json).context("Company collection is not a JSON array of company records")
}
