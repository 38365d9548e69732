//! # Card Records
//!
//! Gameplay record of one tower card, as authored in the catalog.
//!
//! The numeric fields are content: this crate stores and forwards them but
//! never simulates combat with them.

use rampart_procedural::{CardIdentity, DamageType, Rarity, VisualParameters};
use serde::{Deserialize, Serialize};

/// One card as authored in `cards.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Stable identifier. Seeds the art and names the asset directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Damage type.
    #[serde(alias = "damage_type")]
    pub damage_type: DamageType,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Deployment cost.
    #[serde(default)]
    pub cost: u32,
    /// Damage per hit.
    #[serde(default)]
    pub damage: u32,
    /// Targeting range in tiles.
    #[serde(default)]
    pub range: f32,
    /// Shots per second.
    #[serde(default, alias = "fire_rate")]
    pub fire_rate: f32,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl CardRecord {
    /// Returns the identity triple the art is derived from.
    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        CardIdentity::new(self.id.clone(), self.damage_type, self.rarity)
    }
}

/// A card record with its generated visual parameters, as persisted per card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardAsset {
    /// Gameplay record.
    pub card: CardRecord,
    /// Visual parameters the art was rendered from.
    pub visuals: VisualParameters,
}
