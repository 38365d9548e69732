//! # Visual Configuration Tables
//!
//! The damage-type palette and the rarity table the generator reads.
//!
//! Both are plain values handed to the generator, so tests can substitute
//! their own tables. The defaults are the shipped catalog's visual language;
//! `data/visuals.toml` mirrors them for tooling that prefers a file.
//!
//! ```toml
//! dark_metal = "#2a2a2e"
//!
//! [palette]
//! thermal = "#ff4500"
//!
//! [rarity.legendary]
//! scale = 1.2
//! complexity = 2
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{VisualError, VisualResult};

/// Damage type of a card. Drives the glow color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    /// Bullets, shells, slugs.
    Kinetic,
    /// Fire and heat.
    Thermal,
    /// Arcs and chains.
    Electric,
    /// Acid and toxins.
    Corrosive,
    /// Exotic damage.
    Void,
}

impl DamageType {
    /// Every damage type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Kinetic,
        Self::Thermal,
        Self::Electric,
        Self::Corrosive,
        Self::Void,
    ];

    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kinetic => "kinetic",
            Self::Thermal => "thermal",
            Self::Electric => "electric",
            Self::Corrosive => "corrosive",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamageType {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| VisualError::UnknownTag {
                kind: "damage type",
                tag: s.to_string(),
            })
    }
}

/// Rarity tier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Base tier.
    Common,
    /// Second tier.
    Uncommon,
    /// Third tier. Slightly larger, one step more complex.
    Rare,
    /// Top tier. Largest and most complex.
    Legendary,
}

impl Rarity {
    /// Every rarity, lowest first.
    pub const ALL: [Self; 4] = [Self::Common, Self::Uncommon, Self::Rare, Self::Legendary];

    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| VisualError::UnknownTag {
                kind: "rarity",
                tag: s.to_string(),
            })
    }
}

/// Glow color per damage type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Kinetic glow (white).
    pub kinetic: String,
    /// Thermal glow (red-orange).
    pub thermal: String,
    /// Electric glow (purple).
    pub electric: String,
    /// Corrosive glow (neon green).
    pub corrosive: String,
    /// Void glow (deep purple).
    pub void: String,
}

impl Palette {
    /// Returns the color for `damage_type`.
    #[must_use]
    pub fn color(&self, damage_type: DamageType) -> &str {
        match damage_type {
            DamageType::Kinetic => &self.kinetic,
            DamageType::Thermal => &self.thermal,
            DamageType::Electric => &self.electric,
            DamageType::Corrosive => &self.corrosive,
            DamageType::Void => &self.void,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            kinetic: "#ffffff".to_string(),
            thermal: "#ff4500".to_string(),
            electric: "#b026ff".to_string(),
            corrosive: "#39ff14".to_string(),
            void: "#4b0082".to_string(),
        }
    }
}

/// Size and complexity bonus for one rarity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityProfile {
    /// Multiplier on the base scale.
    pub scale: f64,
    /// Extra vertex/barrel headroom (0, 1 or 2 in the shipped table).
    pub complexity: u32,
}

impl RarityProfile {
    /// Creates a profile.
    #[inline]
    #[must_use]
    pub const fn new(scale: f64, complexity: u32) -> Self {
        Self { scale, complexity }
    }
}

/// Rarity profile per tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RarityTable {
    /// Common profile.
    pub common: RarityProfile,
    /// Uncommon profile.
    pub uncommon: RarityProfile,
    /// Rare profile.
    pub rare: RarityProfile,
    /// Legendary profile.
    pub legendary: RarityProfile,
}

impl RarityTable {
    /// Returns the profile for `rarity`.
    #[must_use]
    pub const fn profile(&self, rarity: Rarity) -> RarityProfile {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            common: RarityProfile::new(1.0, 0),
            uncommon: RarityProfile::new(1.0, 0),
            rare: RarityProfile::new(1.1, 1),
            legendary: RarityProfile::new(1.2, 2),
        }
    }
}

/// Everything the generator needs besides the card identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualConfig {
    /// Glow colors.
    pub palette: Palette,
    /// Rarity scale/complexity table.
    pub rarity: RarityTable,
    /// Core color used when a card rolls "metal" instead of its glow.
    pub dark_metal: String,
    /// Accent color used when a card rolls a highlight.
    pub highlight: String,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            rarity: RarityTable::default(),
            dark_metal: "#2a2a2e".to_string(),
            highlight: "#ffffff".to_string(),
        }
    }
}

impl VisualConfig {
    /// Parses and validates a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `MalformedConfig` for TOML/shape errors and `InvalidConfig`
    /// for bad colors or scales.
    pub fn from_toml_str(source: &str) -> VisualResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| VisualError::MalformedConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> VisualResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| VisualError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every color and scale.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first bad entry.
    pub fn validate(&self) -> VisualResult<()> {
        for damage_type in DamageType::ALL {
            check_color(&format!("palette.{damage_type}"), self.palette.color(damage_type))?;
        }
        check_color("dark_metal", &self.dark_metal)?;
        check_color("highlight", &self.highlight)?;

        for rarity in Rarity::ALL {
            let scale = self.rarity.profile(rarity).scale;
            if !scale.is_finite() || scale <= 0.0 {
                return Err(VisualError::InvalidConfig(format!(
                    "rarity.{rarity}.scale must be a positive number, got {scale}"
                )));
            }
        }
        Ok(())
    }
}

/// Accepts `#rgb` and `#rrggbb`.
fn check_color(key: &str, value: &str) -> VisualResult<()> {
    let digits = value.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(VisualError::InvalidConfig(format!(
            "{key} must be a #rgb or #rrggbb color, got {value:?}"
        )))
    }
}
