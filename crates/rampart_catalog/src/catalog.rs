//! # Card Catalog
//!
//! Loads and validates the authored card list.
//!
//! ```toml
//! [[card]]
//! id = "c01"
//! name = "Sentry Gun"
//! damage_type = "kinetic"
//! rarity = "common"
//! cost = 2
//! damage = 6
//! range = 3.0
//! fire_rate = 2.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::card::CardRecord;
use crate::error::{CatalogError, CatalogResult};

/// Longest accepted card id.
pub const MAX_ID_LEN: usize = 64;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    card: Vec<CardRecord>,
}

/// Validated, ordered list of cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    /// Builds a catalog from records, validating every id and name.
    ///
    /// # Errors
    ///
    /// Returns the first invalid id, duplicate id or empty name found.
    pub fn new(cards: Vec<CardRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            validate_id(&card.id)?;
            if !seen.insert(card.id.as_str()) {
                return Err(CatalogError::DuplicateId(card.id.clone()));
            }
            if card.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(card.id.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Parses a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for TOML errors, otherwise as [`Self::new`].
    pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(file.card)
    }

    /// Reads and parses a TOML catalog file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io("read", path, e))?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), cards = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Looks a card up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ids become directory names, so only a filesystem-safe alphabet is allowed.
fn validate_id(id: &str) -> CatalogResult<()> {
    let reason = if id.is_empty() {
        Some("id is empty")
    } else if id.len() > MAX_ID_LEN {
        Some("id is longer than 64 characters")
    } else if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some("id may only contain ASCII letters, digits, '-' and '_'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidId {
            id: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_procedural::{DamageType, Rarity};

    const TWO_CARDS: &str = r#"
        [[card]]
        id = "c01"
        name = "Sentry Gun"
        damage_type = "kinetic"
        rarity = "common"
        cost = 2
        damage = 6
        range = 3.0
        fire_rate = 2.0

        [[card]]
        id = "c02"
        name = "Flame Spitter"
        damage_type = "thermal"
        rarity = "uncommon"
    "#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml_str(TWO_CARDS).unwrap();
        assert_eq!(catalog.len(), 2);

        let sentry = catalog.get("c01").unwrap();
        assert_eq!(sentry.name, "Sentry Gun");
        assert_eq!(sentry.damage_type, DamageType::Kinetic);
        assert_eq!(sentry.cost, 2);

        let flame = catalog.get("c02").unwrap();
        assert_eq!(flame.rarity, Rarity::Uncommon);
        assert_eq!(flame.damage, 0, "missing stats default to zero");
        assert!(catalog.get("c03").is_none());
    }

    #[test]
    fn test_authored_order_is_kept() {
        let catalog = Catalog::from_toml_str(TWO_CARDS).unwrap();
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c01", "c02"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doubled = format!("{TWO_CARDS}\n[[card]]\nid = \"c01\"\nname = \"Copy\"\ndamage_type = \"void\"\nrarity = \"rare\"\n");
        let err = Catalog::from_toml_str(&doubled).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "c01"));
    }

    #[test]
    fn test_unsafe_ids_rejected() {
        for id in ["", "../escape", "has space", "c01/art"] {
            let source = format!(
                "[[card]]\nid = {id:?}\nname = \"X\"\ndamage_type = \"void\"\nrarity = \"rare\"\n"
            );
            let err = Catalog::from_toml_str(&source).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidId { .. }), "{id:?} accepted");
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let source = "[[card]]\nid = \"c09\"\nname = \"  \"\ndamage_type = \"void\"\nrarity = \"rare\"\n";
        let err = Catalog::from_toml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(id) if id == "c09"));
    }

    #[test]
    fn test_unknown_damage_type_is_malformed() {
        let source = "[[card]]\nid = \"c09\"\nname = \"X\"\ndamage_type = \"plasma\"\nrarity = \"rare\"\n";
        let err = Catalog::from_toml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        let catalog = Catalog::from_toml_str(include_str!("../../../data/cards.toml")).unwrap();
        assert!(catalog.len() >= 10);
        for damage_type in DamageType::ALL {
            assert!(catalog.iter().any(|c| c.damage_type == damage_type));
        }
    }
}
