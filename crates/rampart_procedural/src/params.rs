//! # Visual Parameter Generation
//!
//! Maps a card identity to its complete visual-parameter record.
//!
//! ## Offset Contract
//!
//! Every field reads the seeded sequence at a fixed offset, named by
//! [`Draw`]. The offsets are part of the catalog's identity: reordering or
//! renumbering them changes the art of every card.

use serde::{Deserialize, Serialize};

use crate::barrels::{resolve_barrel_tag, BarrelShape};
use crate::config::{DamageType, Rarity, VisualConfig};
use crate::sequence::SeededSequence;
use crate::shapes::BaseShape;

/// One named draw from the seeded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Draw {
    /// Which of the nine base shapes.
    BaseShape = 1,
    /// Vertex/lobe count.
    BasePoints = 2,
    /// Size before the rarity multiplier.
    BaseScale = 3,
    /// Outline stroke width.
    StrokeWidth = 4,
    /// Quarter-turn rotation.
    Rotation = 5,
    /// Extra 45 degree twist.
    RotationTwist = 6,
    /// Which of the five barrel shapes.
    BarrelShape = 7,
    /// Number of barrels.
    BarrelCount = 8,
    /// Barrel length.
    BarrelLength = 9,
    /// Metal or glow core.
    CoreColor = 10,
    /// Highlight or glow accent.
    AccentColor = 11,
}

impl Draw {
    /// The integer offset fed to the sequence.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> u32 {
        self as u32
    }
}

/// Identity triple that fully determines a card's art.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardIdentity {
    /// Card identifier.
    pub id: String,
    /// Damage type.
    pub damage_type: DamageType,
    /// Rarity tier.
    pub rarity: Rarity,
}

impl CardIdentity {
    /// Creates an identity.
    #[must_use]
    pub fn new(id: impl Into<String>, damage_type: DamageType, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            damage_type,
            rarity,
        }
    }
}

/// Structured geometry and colors for one card.
///
/// Persisted next to the gameplay record and consumed by the composer.
/// Reading a record with an unknown `barrelShape` yields `rect` barrels of
/// [`FALLBACK_LENGTH`](crate::barrels::FALLBACK_LENGTH) instead of an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredParameters")]
pub struct VisualParameters {
    /// Base silhouette.
    pub base_shape: BaseShape,
    /// Vertex/lobe count for polygon-family shapes (3..=9 with the default table).
    pub base_points: u32,
    /// Overall scale.
    pub base_scale: f64,
    /// Outline stroke width (2..5).
    pub base_stroke_width: f64,
    /// Rotation in degrees, a multiple of 45.
    pub base_rotation: u32,
    /// Barrel silhouette.
    pub barrel_shape: BarrelShape,
    /// Number of barrels (1..=3).
    pub barrel_count: u32,
    /// Barrel length (10..20).
    pub barrel_length: f64,
    /// Outline and barrel color.
    pub core_color: String,
    /// Inner accent outline color.
    pub accent_color: String,
    /// Halo color; always the palette entry for the damage type.
    pub glow_color: String,
}

/// On-disk shape of [`VisualParameters`], with the barrel tag left open.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredParameters {
    base_shape: BaseShape,
    base_points: u32,
    base_scale: f64,
    base_stroke_width: f64,
    base_rotation: u32,
    barrel_shape: String,
    barrel_count: u32,
    barrel_length: f64,
    core_color: String,
    accent_color: String,
    glow_color: String,
}

impl From<StoredParameters> for VisualParameters {
    fn from(stored: StoredParameters) -> Self {
        let (barrel_shape, barrel_length) =
            resolve_barrel_tag(&stored.barrel_shape, stored.barrel_length);
        Self {
            base_shape: stored.base_shape,
            base_points: stored.base_points,
            base_scale: stored.base_scale,
            base_stroke_width: stored.base_stroke_width,
            base_rotation: stored.base_rotation,
            barrel_shape,
            barrel_count: stored.barrel_count,
            barrel_length,
            core_color: stored.core_color,
            accent_color: stored.accent_color,
            glow_color: stored.glow_color,
        }
    }
}

/// Derives [`VisualParameters`] from card identities.
#[derive(Clone, Copy, Debug)]
pub struct VisualParameterGenerator<'a> {
    config: &'a VisualConfig,
}

impl<'a> VisualParameterGenerator<'a> {
    /// Creates a generator over `config`.
    #[must_use]
    pub const fn new(config: &'a VisualConfig) -> Self {
        Self { config }
    }

    /// Generates the parameters for `identity`.
    #[must_use]
    pub fn generate(&self, identity: &CardIdentity) -> VisualParameters {
        let seq = SeededSequence::from_id(&identity.id);
        let draw = |d: Draw| seq.next(d.offset());

        let profile = self.config.rarity.profile(identity.rarity);
        let complexity = f64::from(profile.complexity);

        let base_shape = *seq.pick(Draw::BaseShape.offset(), &BaseShape::ALL);
        let base_points = 3 + (draw(Draw::BasePoints) * (5.0 + complexity)).floor() as u32;
        let base_scale = (0.85 + draw(Draw::BaseScale) * 0.35) * profile.scale;
        let base_stroke_width = 2.0 + draw(Draw::StrokeWidth) * 3.0;
        let twist = if draw(Draw::RotationTwist) > 0.8 { 45 } else { 0 };
        let base_rotation = (draw(Draw::Rotation) * 4.0).floor() as u32 * 90 + twist;

        let barrel_shape = *seq.pick(Draw::BarrelShape.offset(), &BarrelShape::ALL);
        let barrel_count = 1 + (draw(Draw::BarrelCount) * (1.5 + complexity * 0.5)).floor() as u32;
        let barrel_length = 10.0 + draw(Draw::BarrelLength) * 10.0;

        let glow_color = self.config.palette.color(identity.damage_type).to_string();
        let core_color = if draw(Draw::CoreColor) > 0.5 {
            self.config.dark_metal.clone()
        } else {
            glow_color.clone()
        };
        let accent_color = if draw(Draw::AccentColor) > 0.7 {
            self.config.highlight.clone()
        } else {
            glow_color.clone()
        };

        tracing::trace!(
            id = %identity.id,
            seed = seq.seed(),
            shape = base_shape.as_str(),
            barrels = barrel_count,
            "generated visual parameters"
        );

        VisualParameters {
            base_shape,
            base_points,
            base_scale,
            base_stroke_width,
            base_rotation,
            barrel_shape,
            barrel_count,
            barrel_length,
            core_color,
            accent_color,
            glow_color,
        }
    }
}

/// Generates parameters with the default configuration.
#[must_use]
pub fn generate_visual_parameters(
    id: &str,
    damage_type: DamageType,
    rarity: Rarity,
) -> VisualParameters {
    let config = VisualConfig::default();
    VisualParameterGenerator::new(&config).generate(&CardIdentity::new(id, damage_type, rarity))
}
