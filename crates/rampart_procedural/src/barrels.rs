//! # Barrel Layout
//!
//! Weapon-barrel primitives spread symmetrically about the firing axis.
//!
//! Barrels are always emitted pointing "up" (towards negative Y), starting
//! on the `y = 0` line. Turning a tower to face its target is the runtime
//! renderer's job, not the generator's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisualError;

/// Horizontal distance between neighbouring barrels.
pub const BARREL_SPACING: f64 = 6.0;

/// Radius of the `orb` barrel.
pub const ORB_RADIUS: f64 = 3.0;

/// Length used when a persisted record names an unknown barrel shape.
pub const FALLBACK_LENGTH: f64 = 10.0;

/// Barrel silhouette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrelShape {
    /// 2-wide straight quad.
    Rect,
    /// 3 wide at the base, 1 wide at the tip.
    Tapered,
    /// Triangle with a 4-wide base.
    Tri,
    /// 1.5-wide straight quad.
    Multi,
    /// Floating orb halfway along the barrel.
    Orb,
}

impl BarrelShape {
    /// Every barrel shape, in the order the generator picks from.
    pub const ALL: [Self; 5] = [Self::Rect, Self::Tapered, Self::Tri, Self::Multi, Self::Orb];

    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Tapered => "tapered",
            Self::Tri => "tri",
            Self::Multi => "multi",
            Self::Orb => "orb",
        }
    }
}

impl fmt::Display for BarrelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarrelShape {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| VisualError::UnknownTag {
                kind: "barrel shape",
                tag: s.to_string(),
            })
    }
}

/// Geometry of one barrel.
#[derive(Clone, Debug, PartialEq)]
pub enum BarrelPrimitive {
    /// Closed polygon, absolute coordinates.
    Polygon(Vec<(f64, f64)>),
    /// Circle.
    Orb {
        /// Center X.
        cx: f64,
        /// Center Y.
        cy: f64,
        /// Radius.
        radius: f64,
    },
}

/// One positioned barrel.
#[derive(Clone, Debug, PartialEq)]
pub struct Barrel {
    /// Offset of the barrel axis from the firing axis.
    pub offset_x: f64,
    /// Barrel geometry, already translated by `offset_x`.
    pub primitive: BarrelPrimitive,
}

/// Lays out `count` barrels of `shape`, each `length` long.
#[must_use]
pub fn build_barrels(shape: BarrelShape, count: u32, length: f64) -> Vec<Barrel> {
    let center = f64::from(count.saturating_sub(1)) / 2.0;
    (0..count)
        .map(|i| {
            let offset_x = (f64::from(i) - center) * BARREL_SPACING;
            Barrel {
                offset_x,
                primitive: barrel_body(shape, offset_x, length),
            }
        })
        .collect()
}

/// Resolves a persisted barrel tag and length.
///
/// Unknown tags fall back to `rect` at [`FALLBACK_LENGTH`], matching
/// records written by older tooling. Known tags keep their length.
#[must_use]
pub fn resolve_barrel_tag(tag: &str, length: f64) -> (BarrelShape, f64) {
    match tag.parse::<BarrelShape>() {
        Ok(shape) => (shape, length),
        Err(_) => {
            tracing::warn!(tag, "unknown barrel shape, falling back to rect");
            (BarrelShape::Rect, FALLBACK_LENGTH)
        }
    }
}

fn barrel_body(shape: BarrelShape, x: f64, length: f64) -> BarrelPrimitive {
    let tip = -length;
    match shape {
        BarrelShape::Rect => straight(x, 1.0, tip),
        BarrelShape::Multi => straight(x, 0.75, tip),
        BarrelShape::Tapered => BarrelPrimitive::Polygon(vec![
            (x - 1.5, 0.0),
            (x - 0.5, tip),
            (x + 0.5, tip),
            (x + 1.5, 0.0),
        ]),
        BarrelShape::Tri => BarrelPrimitive::Polygon(vec![(x - 2.0, 0.0), (x, tip), (x + 2.0, 0.0)]),
        BarrelShape::Orb => BarrelPrimitive::Orb {
            cx: x,
            cy: tip / 2.0,
            radius: ORB_RADIUS,
        },
    }
}

fn straight(x: f64, half_width: f64, tip: f64) -> BarrelPrimitive {
    BarrelPrimitive::Polygon(vec![
        (x - half_width, 0.0),
        (x - half_width, tip),
        (x + half_width, tip),
        (x + half_width, 0.0),
    ])
}
