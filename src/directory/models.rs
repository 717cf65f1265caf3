//! Company directory data structures.
//!
//! Contains the company record as it appears in the static data source and
//! the fixed option sets offered by the Location and Industry selectors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Locations offered by the location selector. `""` means "All".
pub const LOCATIONS: [&str; 5] = ["", "USA", "India", "UK", "Germany"];

/// Industries offered by the industry selector. `""` means "All".
pub const INDUSTRIES: [&str; 5] = ["", "Technology", "Finance", "Healthcare", "E-commerce"];

/// Identifier of a company record.
///
/// The data source is not strict about the JSON type of `id`, so any JSON
/// scalar is accepted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CompanyId {
    Text(String),
    Number(Number),
    Flag(bool),
}

impl CompanyId {
    /// Whether the id is `""`, zero or `false`. Such ids do not name a row.
    pub fn is_blank(&self) -> bool {
        match self {
            CompanyId::Text(id) => id.is_empty(),
            CompanyId::Number(id) => id.as_f64() == Some(0.0),
            CompanyId::Flag(id) => !id,
        }
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyId::Text(id) => f.write_str(id),
            CompanyId::Number(id) => write!(f, "{}", id),
            CompanyId::Flag(id) => write!(f, "{}", id),
        }
    }
}

/// Read an `id` of any JSON type.
///
/// Scalars become a [`CompanyId`]; `null`, arrays and objects become `None`.
/// A bad id never rejects the record it belongs to.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<CompanyId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(CompanyId::Text(id)),
        Value::Number(id) => Some(CompanyId::Number(id)),
        Value::Bool(id) => Some(CompanyId::Flag(id)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Represents one company entry.
///
/// Every field is optional at parse time. Entries missing `name`,
/// `location` or `industry` still load; they are dropped by the filter stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Company {
    /// Optional identifier, used as the row key
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<CompanyId>,
    /// Company name
    pub name: Option<String>,
    /// Location, normally one of [`LOCATIONS`]
    pub location: Option<String>,
    /// Industry, normally one of [`INDUSTRIES`]
    pub industry: Option<String>,
}

impl Company {
    /// Name, or an empty string when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Location, or an empty string when absent.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Industry, or an empty string when absent.
    pub fn industry(&self) -> &str {
        self.industry.as_deref().unwrap_or_default()
    }

    /// Whether `name`, `location` and `industry` are all present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name().is_empty() && !self.location().is_empty() && !self.industry().is_empty()
    }

    /// Key used to identify the row in the rendered table.
    ///
    /// # Arguments
    /// * `index` - Position of the record on the current page
    ///
    /// # Returns
    /// * `String` - The id, or the positional index when the id is missing or blank
    pub fn display_key(&self, index: usize) -> String {
        match self.id.as_ref().filter(|id| !id.is_blank()) {
            Some(id) => id.to_string(),
            None => index.to_string(),
        }
    }
}

#[cfg(test)]
impl Company {
    /// Create a complete company record without an id.
    ///
    /// # Arguments
    /// * `name` - Company name
    /// * `location` - Company location
    /// * `industry` - Company industry
    ///
    /// # Returns
    /// * `Company` - New company record
    pub fn new(name: &str, location: &str, industry: &str) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            industry: Some(industry.to_string()),
        }
    }

    /// Attach an id to the record.
    pub fn with_id(mut self, id: CompanyId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Label shown for a location selector value.
pub fn location_label(value: &str) -> &str {
    if value.is_empty() {
        "All Locations"
    } else {
        value
    }
}

/// Label shown for an industry selector value.
pub fn industry_label(value: &str) -> &str {
    if value.is_empty() {
        "All Industries"
    } else {
        value
    }
}

/// Step through a fixed option set.
///
/// # Arguments
/// * `options` - The option set to cycle through
/// * `current` - Currently selected value
/// * `forward` - Direction of the step
///
/// # Returns
/// * `&str` - The neighbouring option, wrapping around at either end
///
/// # Details
/// A value that is not part of the set (matched case-insensitively) starts
/// over at the "All" entry.
pub fn cycle_option<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    if len == 0 {
        return "";
    }
    let Some(pos) = options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(current))
    else {
        return options[0];
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_deserialize_full() {
        let json = r#"{"id": "c-1", "name": "Acme", "location": "USA", "industry": "Technology"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.id, Some(CompanyId::Text("c-1".to_string())));
        assert_eq!(company.name(), "Acme");
        assert!(company.is_complete());
    }

    #[test]
    fn test_company_deserialize_numeric_id() {
        let json = r#"{"id": 42, "name": "Globex", "location": "India", "industry": "Finance"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.id, Some(CompanyId::Number(42.into())));
        assert_eq!(company.display_key(7), "42");
    }

    #[test]
    fn test_company_deserialize_odd_ids() {
        let json = r#"[
            {"id": 1.5, "name": "Acme", "location": "USA", "industry": "Technology"},
            {"id": true, "name": "Globex", "location": "India", "industry": "Finance"},
            {"id": 18446744073709551615, "name": "Initech", "location": "UK", "industry": "Finance"},
            {"id": {"nested": 1}, "name": "Hooli", "location": "USA", "industry": "Technology"}
        ]"#;
        let companies: Vec<Company> = serde_json::from_str(json).unwrap();
        assert_eq!(companies[0].display_key(0), "1.5");
        assert_eq!(companies[1].display_key(0), "true");
        assert_eq!(companies[2].display_key(0), "18446744073709551615");
        assert!(companies[3].id.is_none());
        assert!(companies.iter().all(|c| c.is_complete()));
    }

    #[test]
    fn test_blank_ids_fall_back_to_index() {
        let json = r#"[
            {"id": 0, "name": "Acme", "location": "USA", "industry": "Technology"},
            {"id": "", "name": "Globex", "location": "India", "industry": "Finance"},
            {"id": false, "name": "Initech", "location": "UK", "industry": "Finance"}
        ]"#;
        let companies: Vec<Company> = serde_json::from_str(json).unwrap();
        for (idx, company) in companies.iter().enumerate() {
            assert!(company.id.as_ref().is_some_and(CompanyId::is_blank));
            assert_eq!(company.display_key(idx), idx.to_string());
        }
    }

    #[test]
    fn test_company_deserialize_missing_fields() {
        let json = r#"{"name": "Initech", "industry": null}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert!(company.id.is_none());
        assert!(company.location.is_none());
        assert!(company.industry.is_none());
        assert!(!company.is_complete());
    }

    #[test]
    fn test_company_empty_field_is_incomplete() {
        let company = Company::new("Acme", "", "Technology");
        assert!(!company.is_complete());
    }

    #[test]
    fn test_display_key_falls_back_to_index() {
        let company = Company::new("Acme", "USA", "Technology");
        assert_eq!(company.display_key(3), "3");

        let company = company.with_id(CompanyId::Text("acme".to_string()));
        assert_eq!(company.display_key(3), "acme");
    }

    #[test]
    fn test_labels() {
        assert_eq!(location_label(""), "All Locations");
        assert_eq!(location_label("UK"), "UK");
        assert_eq!(industry_label(""), "All Industries");
        assert_eq!(industry_label("Finance"), "Finance");
    }

    #[test]
    fn test_cycle_option() {
        assert_eq!(cycle_option(&LOCATIONS, "", true), "USA");
        assert_eq!(cycle_option(&LOCATIONS, "Germany", true), "");
        assert_eq!(cycle_option(&LOCATIONS, "", false), "Germany");
        assert_eq!(cycle_option(&INDUSTRIES, "finance", true), "Healthcare");
        assert_eq!(cycle_option(&INDUSTRIES, "Mining", true), "");
    }
}
