//! Company records and typed attribute access.

use std::{borrow::Cow, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

/// One entry of the directory, as served by the data source.
///
/// A field that is absent, `null` or of an unexpected JSON type decodes as
/// empty, so one sloppy record never sinks the collection. Numbers are
/// accepted where text is expected and the other way round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "loose_text")]
    pub id: String,
    #[serde(deserialize_with = "loose_text")]
    pub name: String,
    #[serde(deserialize_with = "loose_text")]
    pub industry: String,
    #[serde(deserialize_with = "loose_text")]
    pub location: String,
    #[serde(deserialize_with = "loose_count")]
    pub number_of_employees: Option<u64>,
    #[serde(deserialize_with = "loose_year")]
    pub founded_year: Option<i32>,
    #[serde(deserialize_with = "loose_text")]
    pub website: String,
    #[serde(deserialize_with = "loose_text")]
    pub ceo: String,
    #[serde(deserialize_with = "loose_text")]
    pub description: String,
    #[serde(deserialize_with = "loose_hiring")]
    pub is_hiring: HiringFlag,
}

/// Any JSON scalar. Arrays and objects land in `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

impl LooseValue {
    fn into_text(self) -> String {
        match self {
            LooseValue::Text(s) => s,
            LooseValue::Int(n) => n.to_string(),
            LooseValue::UInt(n) => n.to_string(),
            LooseValue::Float(f) => f.to_string(),
            LooseValue::Bool(b) => b.to_string(),
            LooseValue::Other(_) => String::new(),
        }
    }

    /// Whole number, if the value is (or spells) one. Fractions are truncated.
    fn into_integer(self) -> Option<i64> {
        match self {
            LooseValue::Int(n) => Some(n),
            LooseValue::UInt(n) => i64::try_from(n).ok(),
            LooseValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            LooseValue::Text(s) => {
                let s = s.trim().replace(',', "");
                s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
            _ => None,
        }
    }
}

fn loose_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<LooseValue>, D::Error> {
    Option::<LooseValue>::deserialize(deserializer)
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(loose_value(deserializer)?.map(LooseValue::into_text).unwrap_or_default())
}

fn loose_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(loose_value(deserializer)?.and_then(LooseValue::into_integer).and_then(|n| u64::try_from(n).ok()))
}

fn loose_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(loose_value(deserializer)?.and_then(LooseValue::into_integer).and_then(|n| i32::try_from(n).ok()))
}

fn loose_hiring<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HiringFlag, D::Error> {
    Ok(match loose_value(deserializer)? {
        Some(LooseValue::Bool(b)) => HiringFlag::Bool(b),
        Some(LooseValue::Int(n)) => HiringFlag::Number(n),
        Some(LooseValue::UInt(n)) => HiringFlag::Number(i64::try_from(n).unwrap_or(i64::MAX)),
        Some(LooseValue::Float(f)) => HiringFlag::Number(i64::from(f != 0.0)),
        Some(LooseValue::Text(t)) => HiringFlag::Text(t),
        Some(LooseValue::Other(_)) | None => HiringFlag::default(),
    })
}

impl Company {
    pub fn attribute(&self, attribute: CompanyAttribute) -> Option<Cow<'_, str>> {
        attribute.value_of(self)
    }
}

/// Hiring flag as found in the wild: a boolean, a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HiringFlag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl Default for HiringFlag {
    fn default() -> Self {
        HiringFlag::Bool(false)
    }
}

impl HiringFlag {
    pub fn is_hiring(&self) -> bool {
        match self {
            HiringFlag::Bool(b) => *b,
            HiringFlag::Number(n) => *n != 0,
            HiringFlag::Text(t) => matches!(t.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        }
    }
}

/// The fixed set of attributes a [`Company`] exposes by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyAttribute {
    Id,
    Name,
    Industry,
    Location,
    NumberOfEmployees,
    FoundedYear,
    Website,
    Ceo,
    Description,
    IsHiring,
}

impl CompanyAttribute {
    pub const ALL: [CompanyAttribute; 10] = [
        CompanyAttribute::Id,
        CompanyAttribute::Name,
        CompanyAttribute::Industry,
        CompanyAttribute::Location,
        CompanyAttribute::NumberOfEmployees,
        CompanyAttribute::FoundedYear,
        CompanyAttribute::Website,
        CompanyAttribute::Ceo,
        CompanyAttribute::Description,
        CompanyAttribute::IsHiring,
    ];

    /// Key used in the source JSON.
    pub fn key(self) -> &'static str {
        match self {
            CompanyAttribute::Id => "id",
            CompanyAttribute::Name => "name",
            CompanyAttribute::Industry => "industry",
            CompanyAttribute::Location => "location",
            CompanyAttribute::NumberOfEmployees => "numberOfEmployees",
            CompanyAttribute::FoundedYear => "foundedYear",
            CompanyAttribute::Website => "website",
            CompanyAttribute::Ceo => "ceo",
            CompanyAttribute::Description => "description",
            CompanyAttribute::IsHiring => "isHiring",
        }
    }

    /// Chip label for an active filter: key with its first letter upper-cased.
    pub fn display_name(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Textual value of this attribute on `company`. `None` when the source omitted it.
    pub fn value_of(self, company: &Company) -> Option<Cow<'_, str>> {
        fn text(s: &str) -> Option<Cow<'_, str>> {
            if s.is_empty() { None } else { Some(Cow::Borrowed(s)) }
        }
        match self {
            CompanyAttribute::Id => text(&company.id),
            CompanyAttribute::Name => text(&company.name),
            CompanyAttribute::Industry => text(&company.industry),
            CompanyAttribute::Location => text(&company.location),
            CompanyAttribute::NumberOfEmployees => company.number_of_employees.map(|n| Cow::Owned(n.to_string())),
            CompanyAttribute::FoundedYear => company.founded_year.map(|y| Cow::Owned(y.to_string())),
            CompanyAttribute::Website => text(&company.website),
            CompanyAttribute::Ceo => text(&company.ceo),
            CompanyAttribute::Description => text(&company.description),
            CompanyAttribute::IsHiring => Some(Cow::Borrowed(if company.is_hiring.is_hiring() { "true" } else { "false" })),
        }
    }
}

impl Display for CompanyAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute(pub String);

impl Display for UnknownAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown company attribute: {:?}", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for CompanyAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanyAttribute::ALL
            .into_iter()
            .find(|attribute| attribute.key() == s)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// Formats a headcount with `,` thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_source_keys() {
        let json = r#"{
            "id": "7",
            "name": "TechCorp",
            "industry": "Technology",
            "location": "Bangalore",
            "numberOfEmployees": 12000,
            "foundedYear": 1999,
            "website": "https://techcorp.example",
            "ceo": "A. Rao",
            "description": "Software.",
            "isHiring": true
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "TechCorp");
        assert_eq!(company.number_of_employees, Some(12000));
        assert_eq!(company.founded_year, Some(1999));
        assert!(company.is_hiring.is_hiring());
    }

    #[test]
    fn missing_attributes_are_tolerated() {
        let company: Company = serde_json::from_str(r#"{"id": "1", "name": "Bare"}"#).unwrap();
        assert_eq!(company.attribute(CompanyAttribute::Industry), None);
        assert_eq!(company.attribute(CompanyAttribute::NumberOfEmployees), None);
        assert!(!company.is_hiring.is_hiring());
    }

    #[test]
    fn hiring_flag_accepts_strings_and_numbers() {
        for (json, expected) in [(r#""true""#, true), (r#""Yes""#, true), (r#""false""#, false), ("1", true), ("0", false), ("false", false)] {
            let flag: HiringFlag = serde_json::from_str(json).unwrap();
            assert_eq!(flag.is_hiring(), expected, "{json}");
        }
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let company: Company = serde_json::from_str(
            r#"{"id": "3", "name": "Nullish Ltd", "ceo": null, "industry": null, "numberOfEmployees": null, "foundedYear": null, "isHiring": null}"#,
        )
        .unwrap();
        assert_eq!(company.name, "Nullish Ltd");
        assert_eq!(company.ceo, "");
        assert_eq!(company.attribute(CompanyAttribute::Industry), None);
        assert_eq!(company.number_of_employees, None);
        assert_eq!(company.founded_year, None);
        assert!(!company.is_hiring.is_hiring());
    }

    #[test]
    fn numeric_id_and_float_headcount() {
        let company: Company = serde_json::from_str(r#"{"id": 1, "numberOfEmployees": 1200.0, "foundedYear": "1987"}"#).unwrap();
        assert_eq!(company.id, "1");
        assert_eq!(company.number_of_employees, Some(1200));
        assert_eq!(company.founded_year, Some(1987));

        let company: Company = serde_json::from_str(r#"{"id": "2", "numberOfEmployees": "12,500", "foundedYear": -5000000000}"#).unwrap();
        assert_eq!(company.number_of_employees, Some(12500));
        assert_eq!(company.founded_year, None);

        let company: Company = serde_json::from_str(r#"{"id": "3", "numberOfEmployees": -4, "website": {"url": "x"}}"#).unwrap();
        assert_eq!(company.number_of_employees, None);
        assert_eq!(company.website, "");
    }

    #[test]
    fn one_sloppy_record_keeps_the_collection() {
        let json = r#"[
            {"id": "1", "name": "TechCorp", "isHiring": true},
            {"id": 2, "name": "Odd Co", "ceo": null, "numberOfEmployees": 1200.5, "isHiring": [1]},
            {"id": "3", "name": "Plain Inc"}
        ]"#;
        let companies: Vec<Company> = serde_json::from_str(json).unwrap();
        assert_eq!(companies.len(), 3);
        assert_eq!(companies[1].id, "2");
        assert_eq!(companies[1].number_of_employees, Some(1200));
        assert!(!companies[1].is_hiring.is_hiring());
    }

    #[test]
    fn attribute_keys_round_trip() {
        for attribute in CompanyAttribute::ALL {
            assert_eq!(attribute.key().parse::<CompanyAttribute>(), Ok(attribute));
        }
        assert!("Industry".parse::<CompanyAttribute>().is_err());
        assert_eq!(CompanyAttribute::Industry.display_name(), "Industry");
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
