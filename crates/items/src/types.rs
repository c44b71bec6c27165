//! Core data model for reported items.
//!
//! ```text
//! Item
//! ├── id: ItemId
//! ├── name: String
//! ├── description: Option<String>
//! ├── category: Option<ItemCategory>
//! ├── status: ItemStatus (LOST | FOUND | CLAIMED | RETURNED | EXPIRED | ABANDONED)
//! ├── location: Option<String>
//! ├── created_at: Option<DateTime<Utc>>
//! ├── latitude / longitude: Option<f64>
//! └── reported_by: Option<UserId>
//! ```
//!
//! Items serialize with camelCase field names and SCREAMING_CASE enum labels,
//! matching the JSON the web client already exchanges.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque item identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Identifier of the user who reported an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId(value)
    }
}

/// Lifecycle status of a reported item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Reported as lost by its owner.
    Lost,
    /// Found by someone and not yet claimed.
    Found,
    Claimed,
    Returned,
    Expired,
    /// Flagged by the detection pipeline as left unattended.
    Abandoned,
}

impl ItemStatus {
    /// Status of the items an item of this status should be matched against.
    ///
    /// `Lost` items look for `Found` ones; every other status looks for `Lost`.
    pub fn counterpart(self) -> ItemStatus {
        match self {
            ItemStatus::Lost => ItemStatus::Found,
            _ => ItemStatus::Lost,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Lost => "LOST",
            ItemStatus::Found => "FOUND",
            ItemStatus::Claimed => "CLAIMED",
            ItemStatus::Returned => "RETURNED",
            ItemStatus::Expired => "EXPIRED",
            ItemStatus::Abandoned => "ABANDONED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item category label.
///
/// Well-known categories get their own variant; anything else is kept as an
/// uppercased [`ItemCategory::Custom`] label so heuristics that look at the
/// label text (e.g. "HANDBAG" vs "BAGS") still apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemCategory {
    Electronics,
    Bags,
    Clothing,
    Accessories,
    Jewelry,
    Documents,
    Keys,
    Books,
    Toys,
    Miscellaneous,
    Other,
    Custom(String),
}

impl ItemCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ItemCategory::Electronics => "ELECTRONICS",
            ItemCategory::Bags => "BAGS",
            ItemCategory::Clothing => "CLOTHING",
            ItemCategory::Accessories => "ACCESSORIES",
            ItemCategory::Jewelry => "JEWELRY",
            ItemCategory::Documents => "DOCUMENTS",
            ItemCategory::Keys => "KEYS",
            ItemCategory::Books => "BOOKS",
            ItemCategory::Toys => "TOYS",
            ItemCategory::Miscellaneous => "MISCELLANEOUS",
            ItemCategory::Other => "OTHER",
            ItemCategory::Custom(label) => label.as_str(),
        }
    }
}

impl From<&str> for ItemCategory {
    fn from(value: &str) -> Self {
        let label = value.trim().to_uppercase();
        match label.as_str() {
            "ELECTRONICS" => ItemCategory::Electronics,
            "BAGS" => ItemCategory::Bags,
            "CLOTHING" => ItemCategory::Clothing,
            "ACCESSORIES" => ItemCategory::Accessories,
            "JEWELRY" => ItemCategory::Jewelry,
            "DOCUMENTS" => ItemCategory::Documents,
            "KEYS" => ItemCategory::Keys,
            "BOOKS" => ItemCategory::Books,
            "TOYS" => ItemCategory::Toys,
            "MISCELLANEOUS" => ItemCategory::Miscellaneous,
            "OTHER" => ItemCategory::Other,
            _ => ItemCategory::Custom(label),
        }
    }
}

impl From<String> for ItemCategory {
    fn from(value: String) -> Self {
        ItemCategory::from(value.as_str())
    }
}

impl From<ItemCategory> for String {
    fn from(value: ItemCategory) -> Self {
        match value {
            ItemCategory::Custom(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a reported item as seen by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    pub status: ItemStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub reported_by: Option<UserId>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            status,
            location: None,
            created_at: None,
            latitude: None,
            longitude: None,
            reported_by: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<ItemCategory>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn reported_by(mut self, user: impl Into<UserId>) -> Self {
        self.reported_by = Some(user.into());
        self
    }

    /// Latitude/longitude pair when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Whether both items were reported by the same known user.
    ///
    /// Items without a reporter never share an owner.
    pub fn same_reporter(&self, other: &Item) -> bool {
        matches!((self.reported_by, other.reported_by), (Some(a), Some(b)) if a == b)
    }
}

/// Item report before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    pub status: ItemStatus,
    #[serde(default)]
    pub location: Option<String>,
    /// Defaults to the insertion time when omitted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub reported_by: Option<UserId>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            name: name.into(),
            description: None,
            category: None,
            status,
            location: None,
            created_at: None,
            latitude: None,
            longitude: None,
            reported_by: None,
        }
    }

    pub fn reported_by(mut self, user: impl Into<UserId>) -> Self {
        self.reported_by = Some(user.into());
        self
    }

    /// Attach an id, stamping `created_at` with `now` when it was not given.
    pub fn into_item(self, id: ItemId, now: DateTime<Utc>) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            status: self.status,
            location: self.location,
            created_at: Some(self.created_at.unwrap_or(now)),
            latitude: self.latitude,
            longitude: self.longitude,
            reported_by: self.reported_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_pairs_lost_with_found() {
        assert_eq!(ItemStatus::Lost.counterpart(), ItemStatus::Found);
        assert_eq!(ItemStatus::Found.counterpart(), ItemStatus::Lost);
        assert_eq!(ItemStatus::Claimed.counterpart(), ItemStatus::Lost);
        assert_eq!(ItemStatus::Abandoned.counterpart(), ItemStatus::Lost);
    }

    #[test]
    fn category_labels_are_case_insensitive() {
        assert_eq!(ItemCategory::from("electronics"), ItemCategory::Electronics);
        assert_eq!(
            ItemCategory::from(" handbag "),
            ItemCategory::Custom("HANDBAG".into())
        );
        assert_eq!(ItemCategory::Custom("HANDBAG".into()).as_str(), "HANDBAG");
    }

    #[test]
    fn item_json_uses_camel_case_and_upper_labels() {
        let item = Item::new(3, "Keys", ItemStatus::Found)
            .with_category("keys")
            .reported_by(9);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["status"], "FOUND");
        assert_eq!(json["category"], "KEYS");
        assert_eq!(json["reportedBy"], 9);
        assert!(json.get("createdAt").is_some());

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn missing_reporters_never_share_an_owner() {
        let a = Item::new(1, "a", ItemStatus::Lost);
        let b = Item::new(2, "b", ItemStatus::Found);
        assert!(!a.same_reporter(&b));

        let a = a.reported_by(5);
        let b = b.reported_by(5);
        assert!(a.same_reporter(&b));
    }

    #[test]
    fn new_item_defaults_created_at() {
        let now = Utc::now();
        let item = NewItem::new("Umbrella", ItemStatus::Found).into_item(ItemId(4), now);
        assert_eq!(item.created_at, Some(now));
        assert_eq!(item.id, ItemId(4));
    }
}
