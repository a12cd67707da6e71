use crate::error::KilowiseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Catalog identifier of a tip. Catalogs use integers, but any scalar is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl RowId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RowId::Number(n) => Some(*n),
            RowId::Text(_) => None,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{n}"),
            RowId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One piece of advice from the catalog, gated by its `rule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub rowid: RowId,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    /// Raw eligibility condition, e.g. `If Freezer = "Yes"`.
    pub rule: String,
    /// Free-text catalog category. Informational only, never used for grouping.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub fuel: Option<String>,
}

/// Display grouping derived from a rule's text.
///
/// Variants are declared in alphabetical order of their labels so that ordered maps
/// keyed by category list them the way a user expects to read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CFLs")]
    Cfls,
    Cool,
    Dishwasher,
    Dryer,
    Ducts,
    Freezer,
    General,
    Heater,
    #[serde(rename = "Hot Tub")]
    HotTub,
    Insulation,
    Pool,
    #[serde(rename = "Pool Heater")]
    PoolHeater,
    #[serde(rename = "Rate Plan")]
    RatePlan,
    Refrigerator,
    Thermostat,
    Washer,
    #[serde(rename = "Water Heater")]
    WaterHeater,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Cfls,
        Category::Cool,
        Category::Dishwasher,
        Category::Dryer,
        Category::Ducts,
        Category::Freezer,
        Category::General,
        Category::Heater,
        Category::HotTub,
        Category::Insulation,
        Category::Pool,
        Category::PoolHeater,
        Category::RatePlan,
        Category::Refrigerator,
        Category::Thermostat,
        Category::Washer,
        Category::WaterHeater,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cfls => "CFLs",
            Category::Cool => "Cool",
            Category::Dishwasher => "Dishwasher",
            Category::Dryer => "Dryer",
            Category::Ducts => "Ducts",
            Category::Freezer => "Freezer",
            Category::General => "General",
            Category::Heater => "Heater",
            Category::HotTub => "Hot Tub",
            Category::Insulation => "Insulation",
            Category::Pool => "Pool",
            Category::PoolHeater => "Pool Heater",
            Category::RatePlan => "Rate Plan",
            Category::Refrigerator => "Refrigerator",
            Category::Thermostat => "Thermostat",
            Category::Washer => "Washer",
            Category::WaterHeater => "Water Heater",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse for user input such as `--category "pool heater"`.
impl FromStr for Category {
    type Err = KilowiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KilowiseError::UnknownCategory(wanted.to_string()))
    }
}

/// A single profile attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ProfileValue {
    /// Numeric reading used by ordered comparisons. `true` reads as 1, `false` as 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ProfileValue::Number(n) => Some(*n),
            ProfileValue::Text(s) => s.trim().parse::<f64>().ok(),
            ProfileValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ProfileValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Text rendering compared against rule literals. Integral numbers render without a
/// fractional part (`3.0` renders as `3`), and never in exponent form (`1e21` renders
/// all 22 digits).
impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValue::Bool(b) => write!(f, "{b}"),
            ProfileValue::Number(n) => write!(f, "{n}"),
            ProfileValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ProfileValue {
    fn from(value: bool) -> Self {
        ProfileValue::Bool(value)
    }
}

impl From<f64> for ProfileValue {
    fn from(value: f64) -> Self {
        ProfileValue::Number(value)
    }
}

impl From<i64> for ProfileValue {
    fn from(value: i64) -> Self {
        ProfileValue::Number(value as f64)
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::Text(value.to_string())
    }
}

impl From<String> for ProfileValue {
    fn from(value: String) -> Self {
        ProfileValue::Text(value)
    }
}

/// A customer's attribute snapshot, keyed by rule attribute name
/// (e.g. `"Pool Heater"`, `"Insulation Pre 1992"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    attributes: BTreeMap<String, ProfileValue>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<ProfileValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<ProfileValue>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&ProfileValue> {
        self.attributes.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ProfileValue>> FromIterator<(K, V)> for Profile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut profile = Profile::new();
        for (k, v) in iter {
            profile.insert(k, v);
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!("pool heater".parse::<Category>().unwrap(), Category::PoolHeater);
        assert!("Garage".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_order_is_alphabetical_by_label() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::RatePlan).unwrap();
        assert_eq!(json, "\"Rate Plan\"");
    }

    #[test]
    fn test_profile_value_rendering() {
        assert_eq!(ProfileValue::Number(3.0).to_string(), "3");
        assert_eq!(ProfileValue::Number(2.5).to_string(), "2.5");
        assert_eq!(ProfileValue::Bool(true).to_string(), "true");
        assert_eq!(ProfileValue::from("Yes").to_string(), "Yes");
        assert_eq!(ProfileValue::Number(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_profile_value_numeric_reading() {
        assert_eq!(ProfileValue::Bool(true).as_number(), Some(1.0));
        assert_eq!(ProfileValue::Bool(false).as_number(), Some(0.0));
        assert_eq!(ProfileValue::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(ProfileValue::from("Yes").as_number(), None);
    }

    #[test]
    fn test_profile_deserializes_mixed_values() {
        let json = r#"{"Freezer": "Yes", "Pool Heater": 3, "Insulation Pre 1992": true}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.get("Freezer"), Some(&ProfileValue::Text("Yes".into())));
        assert_eq!(profile.get("Pool Heater"), Some(&ProfileValue::Number(3.0)));
        assert_eq!(profile.get("Insulation Pre 1992"), Some(&ProfileValue::Bool(true)));
    }

    #[test]
    fn test_tip_rowid_accepts_integer_or_text() {
        let tip: Tip = serde_json::from_str(r#"{"rowid": 12, "rule": "Always"}"#).unwrap();
        assert_eq!(tip.rowid, RowId::Number(12));
        assert_eq!(tip.headline, "");
        let tip: Tip = serde_json::from_str(r#"{"rowid": "T-9", "rule": "Always"}"#).unwrap();
        assert_eq!(tip.rowid, RowId::Text("T-9".into()));
    }
}
