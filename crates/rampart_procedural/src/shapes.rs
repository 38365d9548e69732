//! # Base Shape Outlines
//!
//! Closed 2-D outlines for the nine base silhouettes.
//!
//! ## Shape Families
//!
//! - **Fixed-form**: circle, square, chevron, diamond, crescent. Only the
//!   radius parametrizes them.
//! - **Polygon family**: hex, star, bouba, spiky. `2 * base_points`
//!   vertices alternating between the outer radius and a shape-specific
//!   inner radius.
//!
//! All outlines are centered on the origin; callers scale and rotate them.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisualError;
use crate::format::num;

/// Nominal outer radius of every outline.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Base silhouette of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseShape {
    /// Two semicircular arcs.
    Circle,
    /// Axis-aligned box.
    Square,
    /// Regular polygon with `2 * base_points` corners.
    Hex,
    /// Inner radius 0.5r.
    Star,
    /// Soft blob: inner radius 0.8r, rounded joins and caps.
    Bouba,
    /// Inner radius 0.3r.
    Spiky,
    /// Four-point arrow.
    Chevron,
    /// Four-point rhombus, taller than wide.
    Diamond,
    /// Outer arc hollowed by a concave curve.
    Crescent,
}

impl BaseShape {
    /// Every shape, in the order the generator picks from.
    pub const ALL: [Self; 9] = [
        Self::Circle,
        Self::Square,
        Self::Hex,
        Self::Star,
        Self::Bouba,
        Self::Spiky,
        Self::Chevron,
        Self::Diamond,
        Self::Crescent,
    ];

    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Hex => "hex",
            Self::Star => "star",
            Self::Bouba => "bouba",
            Self::Spiky => "spiky",
            Self::Chevron => "chevron",
            Self::Diamond => "diamond",
            Self::Crescent => "crescent",
        }
    }

    /// Inner radius as a fraction of the outer radius, for polygon-family shapes.
    ///
    /// Returns `None` for fixed-form shapes.
    #[must_use]
    pub const fn inner_radius_factor(self) -> Option<f64> {
        match self {
            Self::Star => Some(0.5),
            Self::Spiky => Some(0.3),
            Self::Bouba => Some(0.8),
            Self::Hex => Some(1.0),
            Self::Circle | Self::Square | Self::Chevron | Self::Diamond | Self::Crescent => None,
        }
    }

    /// Join/cap style the shape is stroked with.
    #[must_use]
    pub const fn line_style(self) -> LineStyle {
        match self {
            Self::Bouba => LineStyle::Rounded,
            Self::Circle
            | Self::Square
            | Self::Hex
            | Self::Star
            | Self::Spiky
            | Self::Chevron
            | Self::Diamond
            | Self::Crescent => LineStyle::Sharp,
        }
    }
}

impl fmt::Display for BaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseShape {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| VisualError::UnknownTag {
                kind: "base shape",
                tag: s.to_string(),
            })
    }
}

/// Stroke join/cap style. A rendering flag only; it never changes the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Miter joins, butt caps.
    Sharp,
    /// Round joins, round caps.
    Rounded,
}

impl LineStyle {
    /// SVG `stroke-linejoin` value.
    #[must_use]
    pub const fn linejoin(self) -> &'static str {
        match self {
            Self::Sharp => "miter",
            Self::Rounded => "round",
        }
    }

    /// SVG `stroke-linecap` value.
    #[must_use]
    pub const fn linecap(self) -> &'static str {
        match self {
            Self::Sharp => "butt",
            Self::Rounded => "round",
        }
    }
}

/// One step of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a subpath.
    MoveTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Straight segment.
    LineTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Circular arc (`rx == ry == radius`, no axis rotation).
    Arc {
        /// Arc radius.
        radius: f64,
        /// SVG large-arc flag.
        large_arc: bool,
        /// SVG sweep flag.
        sweep: bool,
        /// End X.
        x: f64,
        /// End Y.
        y: f64,
    },
    /// Quadratic Bezier segment.
    QuadTo {
        /// Control point X.
        cx: f64,
        /// Control point Y.
        cy: f64,
        /// End X.
        x: f64,
        /// End Y.
        y: f64,
    },
    /// Close the subpath.
    Close,
}

impl PathCommand {
    /// End point of the command, if it draws to one.
    #[must_use]
    pub const fn end_point(&self) -> Option<(f64, f64)> {
        match *self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::Arc { x, y, .. }
            | Self::QuadTo { x, y, .. } => Some((x, y)),
            Self::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo { x, y } => write!(f, "M {} {}", num(x), num(y)),
            Self::LineTo { x, y } => write!(f, "L {} {}", num(x), num(y)),
            Self::Arc {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                f,
                "A {r} {r} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                num(x),
                num(y),
                r = num(radius)
            ),
            Self::QuadTo { cx, cy, x, y } => {
                write!(f, "Q {} {} {} {}", num(cx), num(cy), num(x), num(y))
            }
            Self::Close => f.write_str("Z"),
        }
    }
}

/// A closed outline plus the stroke style it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    commands: Vec<PathCommand>,
    style: LineStyle,
}

impl Outline {
    /// Path commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Stroke style.
    #[must_use]
    pub const fn style(&self) -> LineStyle {
        self.style
    }

    /// End points of every drawing command, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    /// Serializes to an SVG `d` attribute.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }
}

/// Writes the SVG `d` attribute value.
impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Builds the outline of `shape` with outer radius `radius`.
///
/// `base_points` only affects the polygon family. Zero points yields an
/// empty outline.
#[must_use]
pub fn build_outline(shape: BaseShape, base_points: u32, radius: f64) -> Outline {
    let commands = match shape.inner_radius_factor() {
        Some(inner_factor) => polygon(base_points, radius, inner_factor),
        None => fixed_form(shape, radius),
    };

    Outline {
        commands,
        style: shape.line_style(),
    }
}

/// Outline of a fixed-form shape. Polygon-family shapes have none.
fn fixed_form(shape: BaseShape, radius: f64) -> Vec<PathCommand> {
    match shape {
        BaseShape::Circle => circle(radius),
        BaseShape::Square => closed(&[
            (-radius, -radius),
            (radius, -radius),
            (radius, radius),
            (-radius, radius),
        ]),
        BaseShape::Chevron => closed(&[
            (0.0, -radius),
            (radius, radius),
            (0.0, radius * 0.5),
            (-radius, radius),
        ]),
        BaseShape::Diamond => closed(&[
            (0.0, -radius * 1.2),
            (radius * 0.8, 0.0),
            (0.0, radius * 1.2),
            (-radius * 0.8, 0.0),
        ]),
        BaseShape::Crescent => crescent(radius),
        BaseShape::Hex | BaseShape::Star | BaseShape::Bouba | BaseShape::Spiky => Vec::new(),
    }
}

fn closed(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 1);
    for (i, &(x, y)) in points.iter().enumerate() {
        commands.push(if i == 0 {
            PathCommand::MoveTo { x, y }
        } else {
            PathCommand::LineTo { x, y }
        });
    }
    if !commands.is_empty() {
        commands.push(PathCommand::Close);
    }
    commands
}

fn circle(radius: f64) -> Vec<PathCommand> {
    let half = |x| PathCommand::Arc {
        radius,
        large_arc: true,
        sweep: false,
        x,
        y: 0.0,
    };
    vec![
        PathCommand::MoveTo { x: -radius, y: 0.0 },
        half(radius),
        half(-radius),
        PathCommand::Close,
    ]
}

fn crescent(radius: f64) -> Vec<PathCommand> {
    // Horns at +-60 degrees on the right; the outer arc sweeps round the left.
    let horn_x = radius * 0.5;
    let horn_y = radius * 0.866;
    vec![
        PathCommand::MoveTo {
            x: horn_x,
            y: -horn_y,
        },
        PathCommand::Arc {
            radius,
            large_arc: true,
            sweep: false,
            x: horn_x,
            y: horn_y,
        },
        PathCommand::QuadTo {
            cx: 0.0,
            cy: 0.0,
            x: horn_x,
            y: -horn_y,
        },
        PathCommand::Close,
    ]
}

fn polygon(base_points: u32, radius: f64, inner_factor: f64) -> Vec<PathCommand> {
    let count = base_points * 2;
    let step = PI * 2.0 / f64::from(base_points) / 2.0;

    let mut points = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut r = if i % 2 == 0 { radius } else { radius * inner_factor };
        if !r.is_finite() {
            #[cfg(debug_assertions)]
            tracing::warn!(vertex = i, radius, inner_factor, "non-finite polygon radius, using outer radius");
            r = radius;
        }
        let angle = f64::from(i) * step;
        points.push((angle.cos() * r, angle.sin() * r));
    }
    closed(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn radius_of((x, y): (f64, f64)) -> f64 {
        x.hypot(y)
    }

    #[test]
    fn test_polygon_vertex_counts() {
        for shape in [BaseShape::Star, BaseShape::Spiky, BaseShape::Bouba, BaseShape::Hex] {
            for points in 3..=10 {
                let outline = build_outline(shape, points, DEFAULT_RADIUS);
                assert_eq!(
                    outline.vertices().len(),
                    (points * 2) as usize,
                    "{shape} with {points} points"
                );
            }
        }
    }

    #[test]
    fn test_polygon_radii_alternate() {
        for (shape, factor) in [
            (BaseShape::Star, 0.5),
            (BaseShape::Spiky, 0.3),
            (BaseShape::Bouba, 0.8),
            (BaseShape::Hex, 1.0),
        ] {
            assert_eq!(shape.inner_radius_factor(), Some(factor));
            let outline = build_outline(shape, 6, DEFAULT_RADIUS);
            for (i, vertex) in outline.vertices().into_iter().enumerate() {
                let expected = if i % 2 == 0 { DEFAULT_RADIUS } else { DEFAULT_RADIUS * factor };
                assert!(
                    (radius_of(vertex) - expected).abs() < EPS,
                    "{shape} vertex {i}: {} != {expected}",
                    radius_of(vertex)
                );
            }
        }
    }

    #[test]
    fn test_polygon_angular_step() {
        let outline = build_outline(BaseShape::Star, 4, 10.0);
        let vertices = outline.vertices();
        // step = 2pi / 4 / 2 = pi/4; vertex 2 sits straight down (+y)
        assert!((vertices[0].0 - 10.0).abs() < EPS && vertices[0].1.abs() < EPS);
        assert!(vertices[2].0.abs() < EPS && (vertices[2].1 - 10.0).abs() < EPS);
        let (x, y) = vertices[1];
        assert!((y.atan2(x) - PI / 4.0).abs() < EPS);
    }

    #[test]
    fn test_polygon_is_closed() {
        let outline = build_outline(BaseShape::Spiky, 5, 10.0);
        assert!(matches!(outline.commands().first(), Some(PathCommand::MoveTo { .. })));
        assert_eq!(outline.commands().last(), Some(&PathCommand::Close));
        assert!(outline.to_path_data().ends_with('Z'));
    }

    #[test]
    fn test_zero_points_is_empty() {
        let outline = build_outline(BaseShape::Star, 0, 10.0);
        assert!(outline.commands().is_empty());
        assert_eq!(outline.to_path_data(), "");
    }

    #[test]
    fn test_non_finite_inner_radius_substituted() {
        let commands = polygon(3, 10.0, f64::NAN);
        let outline = Outline {
            commands,
            style: LineStyle::Sharp,
        };
        for vertex in outline.vertices() {
            assert!((radius_of(vertex) - 10.0).abs() < EPS);
        }
    }

    #[test]
    fn test_fixed_form_paths() {
        assert_eq!(
            build_outline(BaseShape::Square, 6, 10.0).to_path_data(),
            "M -10 -10 L 10 -10 L 10 10 L -10 10 Z"
        );
        assert_eq!(
            build_outline(BaseShape::Circle, 6, 10.0).to_path_data(),
            "M -10 0 A 10 10 0 1 0 10 0 A 10 10 0 1 0 -10 0 Z"
        );
        assert_eq!(
            build_outline(BaseShape::Chevron, 6, 10.0).to_path_data(),
            "M 0 -10 L 10 10 L 0 5 L -10 10 Z"
        );
        assert_eq!(
            build_outline(BaseShape::Diamond, 6, 10.0).to_path_data(),
            "M 0 -12 L 8 0 L 0 12 L -8 0 Z"
        );
        assert_eq!(
            build_outline(BaseShape::Crescent, 6, 10.0).to_path_data(),
            "M 5 -8.66 A 10 10 0 1 0 5 8.66 Q 0 0 5 -8.66 Z"
        );
    }

    #[test]
    fn test_every_shape_has_an_outline() {
        for shape in BaseShape::ALL {
            let outline = build_outline(shape, 5, DEFAULT_RADIUS);
            assert_eq!(outline.commands().last(), Some(&PathCommand::Close), "{shape}");
            if shape.inner_radius_factor().is_some() {
                assert_eq!(outline.vertices().len(), 10, "{shape}");
            } else {
                assert!(fixed_form(shape, DEFAULT_RADIUS).len() > 1, "{shape}");
            }
        }
    }

    #[test]
    fn test_path_data_matches_display() {
        let outline = build_outline(BaseShape::Crescent, 3, 10.0);
        assert_eq!(outline.to_path_data(), outline.to_string());
        assert_eq!(PathCommand::QuadTo { cx: 0.0, cy: -0.0, x: 1.5, y: 2.0 }.to_string(), "Q 0 0 1.5 2");
    }

    #[test]
    fn test_fixed_form_ignores_points() {
        for shape in [BaseShape::Circle, BaseShape::Square, BaseShape::Diamond] {
            assert_eq!(build_outline(shape, 3, 10.0), build_outline(shape, 9, 10.0));
        }
    }

    #[test]
    fn test_only_bouba_is_rounded() {
        for shape in BaseShape::ALL {
            let expected = if shape == BaseShape::Bouba {
                LineStyle::Rounded
            } else {
                LineStyle::Sharp
            };
            assert_eq!(build_outline(shape, 5, 10.0).style(), expected);
        }
    }

    #[test]
    fn test_shape_tags() {
        for shape in BaseShape::ALL {
            assert_eq!(shape.as_str().parse::<BaseShape>(), Ok(shape));
        }
        assert!("triangle".parse::<BaseShape>().is_err());
    }
}
