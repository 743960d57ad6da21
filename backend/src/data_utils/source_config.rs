use std::{fmt::Display, path::PathBuf};

/// Collection bundled with the workspace, used when nothing else is configured.
pub const DEFAULT_COMPANY_SOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/companies.json");

/// Where the static collection lives.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanySource {
    File(PathBuf),
    Url(String),
}

impl CompanySource {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            CompanySource::Url(location.to_string())
        } else {
            CompanySource::File(PathBuf::from(location))
        }
    }
}

impl Display for CompanySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanySource::File(path) => write!(f, "{}", path.display()),
            CompanySource::Url(url) => write!(f, "{}", url),
        }
    }
}

pub fn get_company_source() -> CompanySource {
    CompanySource::parse(&std::env::var("COMPANY_DIRECTORY_SOURCE").unwrap_or(DEFAULT_COMPANY_SOURCE.to_string()))
}
