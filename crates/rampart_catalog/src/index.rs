//! # Catalog Index
//!
//! One JSON listing of every exported card and where its files live.

use rampart_procedural::{DamageType, Rarity};
use serde::{Deserialize, Serialize};

use crate::card::CardRecord;
use crate::error::{CatalogError, CatalogResult};

/// Bumped whenever the index layout changes.
pub const FORMAT_VERSION: u32 = 1;

/// Directory under the output root holding one directory per card.
pub const CARDS_DIR: &str = "cards";
/// Art file name inside a card directory.
pub const ART_FILE: &str = "art.svg";
/// Record file name inside a card directory.
pub const RECORD_FILE: &str = "card.json";
/// Index file name under the output root.
pub const INDEX_FILE: &str = "index.json";

/// Index row for one card. Paths are relative to the output root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Card id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Damage type.
    pub damage_type: DamageType,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Relative path of the SVG.
    pub art: String,
    /// Relative path of the JSON record.
    pub record: String,
}

impl IndexEntry {
    /// Builds the entry for `card` under the standard layout.
    #[must_use]
    pub fn for_card(card: &CardRecord) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            damage_type: card.damage_type,
            rarity: card.rarity,
            art: format!("{CARDS_DIR}/{}/{ART_FILE}", card.id),
            record: format!("{CARDS_DIR}/{}/{RECORD_FILE}", card.id),
        }
    }
}

/// The aggregated index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    /// Layout version.
    pub format_version: u32,
    /// Entries sorted by id.
    pub cards: Vec<IndexEntry>,
}

impl CatalogIndex {
    /// Builds an index, sorting entries by id.
    ///
    /// Workers finish in any order; sorting keeps the file stable.
    #[must_use]
    pub fn new(mut cards: Vec<IndexEntry>) -> Self {
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            format_version: FORMAT_VERSION,
            cards,
        }
    }

    /// Serializes as pretty JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if serde_json rejects the value.
    pub fn to_json(&self) -> CatalogResult<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| CatalogError::Serialize {
            what: INDEX_FILE.to_string(),
            reason: e.to_string(),
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Parses an index previously written by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `Malformed` on invalid JSON.
    pub fn from_json(source: &str) -> CatalogResult<Self> {
        serde_json::from_str(source).map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> IndexEntry {
        IndexEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            damage_type: DamageType::Kinetic,
            rarity: Rarity::Common,
            art: format!("cards/{id}/art.svg"),
            record: format!("cards/{id}/card.json"),
        }
    }

    #[test]
    fn test_sorted_by_id() {
        let index = CatalogIndex::new(vec![entry("c03"), entry("c01"), entry("c02")]);
        let ids: Vec<_> = index.cards.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c01", "c02", "c03"]);
        assert_eq!(index.format_version, FORMAT_VERSION);
    }

    #[test]
    fn test_json_shape() {
        let json = CatalogIndex::new(vec![entry("c01")]).to_json().unwrap();
        assert!(json.contains("\"formatVersion\": 1"));
        assert!(json.contains("\"damageType\": \"kinetic\""));
        assert!(json.contains("\"art\": \"cards/c01/art.svg\""));
        assert!(json.ends_with('\n'));

        let back = CatalogIndex::from_json(&json).unwrap();
        assert_eq!(back.cards, vec![entry("c01")]);
    }
}
