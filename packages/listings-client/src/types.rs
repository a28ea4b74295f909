use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Listing identifier as issued by the listing store.
pub type ListingId = i64;

/// User identifier as issued by the listing store.
pub type UserId = i64;

/// Item category. Values outside the known set fold into `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Textbooks,
    Furniture,
    Electronics,
    Clothing,
    Tickets,
    Housing,
    #[serde(other)]
    #[default]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Furniture => "Furniture",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Tickets => "Tickets",
            Category::Housing => "Housing",
            Category::Other => "Other",
        }
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::Textbooks,
            Category::Furniture,
            Category::Electronics,
            Category::Clothing,
            Category::Tickets,
            Category::Housing,
            Category::Other,
        ]
    }

    fn from_label(label: &str) -> Option<Category> {
        Category::variants()
            .iter()
            .copied()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Campus housing region a listing is offered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Middle Earth")]
    MiddleEarth,
    Mesa,
    #[serde(rename = "ACC")]
    Acc,
    #[serde(rename = "Verano Place")]
    VeranoPlace,
    #[serde(rename = "Campus Village")]
    CampusVillage,
    #[serde(rename = "Palo Verde")]
    PaloVerde,
    #[serde(rename = "UTC")]
    Utc,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::MiddleEarth => "Middle Earth",
            Region::Mesa => "Mesa",
            Region::Acc => "ACC",
            Region::VeranoPlace => "Verano Place",
            Region::CampusVillage => "Campus Village",
            Region::PaloVerde => "Palo Verde",
            Region::Utc => "UTC",
        }
    }

    pub fn variants() -> &'static [Region] {
        &[
            Region::MiddleEarth,
            Region::Mesa,
            Region::Acc,
            Region::VeranoPlace,
            Region::CampusVillage,
            Region::PaloVerde,
            Region::Utc,
        ]
    }

    fn from_label(label: &str) -> Option<Region> {
        Region::variants()
            .iter()
            .copied()
            .find(|region| region.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A marketplace item as returned by `GET /listings` and `GET /listings/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    #[serde(default, deserialize_with = "lenient_region")]
    pub region: Option<Region>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub user_id: UserId,
}

/// Read-only projection of the user record that owns a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Seller {
    /// The seller's email, if present and non-blank.
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

// One malformed record must not fail the whole listing collection, so
// category and region accept any JSON value. Unknown or non-string
// categories become `Other`; unknown or non-string regions become `None`.
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let category = match &raw {
        Value::String(label) => Category::from_label(label),
        _ => None,
    };
    Ok(category.unwrap_or_else(|| {
        tracing::debug!(category = %raw, "Folding unknown listing category into Other");
        Category::Other
    }))
}

fn lenient_region<'de, D>(deserializer: D) -> Result<Option<Region>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let region = match &raw {
        Value::Null => return Ok(None),
        Value::String(label) if label.is_empty() => return Ok(None),
        Value::String(label) => Region::from_label(label),
        _ => None,
    };
    if region.is_none() {
        tracing::debug!(region = %raw, "Ignoring unknown listing region");
    }
    Ok(region)
}
