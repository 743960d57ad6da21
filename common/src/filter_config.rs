//! Declared filter selects: which attributes can be filtered and by which values.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::company::CompanyAttribute;

/// One filter select, already checked against the attribute set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub attribute: CompanyAttribute,
    pub options: Vec<String>,
}

/// Unchecked form of a [`FilterOption`], as written in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptionSpec {
    pub label: String,
    pub key: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterConfigError {
    UnknownKey { label: String, key: String },
    DuplicateKey(CompanyAttribute),
    EmptyOption { label: String },
}

impl Display for FilterConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey { label, key } => write!(f, "filter {:?} uses unknown attribute key {:?}", label, key),
            Self::DuplicateKey(attribute) => write!(f, "attribute {} is filtered more than once", attribute),
            Self::EmptyOption { label } => write!(f, "filter {:?} lists an empty option", label),
        }
    }
}

impl std::error::Error for FilterConfigError {}

impl FilterOption {
    pub fn new(label: impl Into<String>, attribute: CompanyAttribute, options: Vec<impl Into<String>>) -> Self {
        Self { label: label.into(), attribute, options: options.into_iter().map(|s| s.into()).collect() }
    }

    pub fn is_legal_value(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }
}

impl TryFrom<FilterOptionSpec> for FilterOption {
    type Error = FilterConfigError;

    fn try_from(spec: FilterOptionSpec) -> Result<Self, Self::Error> {
        let attribute = spec.key.parse::<CompanyAttribute>().map_err(|_| FilterConfigError::UnknownKey {
            label: spec.label.clone(),
            key: spec.key.clone(),
        })?;
        // an empty option would collide with the "All" entry
        if spec.options.iter().any(|option| option.is_empty()) {
            return Err(FilterConfigError::EmptyOption { label: spec.label });
        }
        Ok(FilterOption { label: spec.label, attribute, options: spec.options })
    }
}

/// Checks a whole list of specs. Each attribute may appear once.
pub fn build_filter_options(specs: Vec<FilterOptionSpec>) -> Result<Vec<FilterOption>, FilterConfigError> {
    let mut built: Vec<FilterOption> = Vec::with_capacity(specs.len());
    for spec in specs {
        let option = FilterOption::try_from(spec)?;
        if built.iter().any(|existing| existing.attribute == option.attribute) {
            return Err(FilterConfigError::DuplicateKey(option.attribute));
        }
        built.push(option);
    }
    Ok(built)
}

pub fn default_filter_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new(
            "Industry",
            CompanyAttribute::Industry,
            vec![
                "Conglomerate",
                "Banking",
                "IT Services",
                "Information Technology",
                "Technology",
                "E-commerce",
                "Automotive",
                "Telecom",
                "Engineering",
                "Pharmaceuticals",
                "Manufacturing",
                "FoodTech",
                "Transportation",
                "Fintech",
                "Retail",
                "Semiconductors",
                "Entertainment",
                "Social Media",
                "Food & Beverage",
                "Steel",
                "Software",
                "Energy",
                "Telecommunications",
            ],
        ),
        FilterOption::new(
            "Location",
            CompanyAttribute::Location,
            vec![
                "Mumbai",
                "Bangalore",
                "USA",
                "Gurgaon",
                "Ahmedabad",
                "Kolkata",
                "Noida",
                "Pune",
                "South Korea",
                "Japan",
                "Germany",
                "China",
                "UK",
            ],
        ),
    ]
}
