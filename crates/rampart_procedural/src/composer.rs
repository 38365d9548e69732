//! # Image Composer
//!
//! Assembles one self-contained SVG document per card.
//!
//! ## Layers (back to front)
//!
//! 1. **Glow**: blurred halo in the damage-type color
//! 2. **Base**: outer outline plus inner accent outline, scaled and rotated
//! 3. **Barrels**: unrotated, pointing up
//!
//! The canvas size, viewport and every opacity/scale factor below are the
//! catalog's visual language. Changing one restyles every card.

use std::fmt;

use crate::barrels::{build_barrels, BarrelPrimitive};
use crate::format::num;
use crate::params::VisualParameters;
use crate::shapes::{build_outline, Outline, DEFAULT_RADIUS};

/// Composes [`VisualParameters`] into SVG markup.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageComposer;

impl ImageComposer {
    /// Rendered width and height, in pixels.
    pub const CANVAS_SIZE: u32 = 64;
    /// Half-extent of the viewport around the origin.
    pub const VIEW_EXTENT: u32 = 20;
    /// Glow radius per unit of base scale.
    pub const GLOW_RADIUS_FACTOR: f64 = 16.0;
    /// Glow opacity.
    pub const GLOW_OPACITY: f64 = 0.4;
    /// Gaussian blur applied to the glow.
    pub const GLOW_BLUR: f64 = 2.0;
    /// Scale of the inner accent outline relative to the outer one.
    pub const INNER_SCALE: f64 = 0.6;
    /// Opacity of the inner accent outline.
    pub const INNER_OPACITY: f64 = 0.7;
    /// Stroke width of the inner accent outline.
    pub const INNER_STROKE_WIDTH: f64 = 1.0;
    /// Fill of the outer outline.
    pub const BODY_FILL: &'static str = "#111111";

    /// Creates a composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders `params` as a complete SVG document.
    #[must_use]
    pub fn compose(&self, params: &VisualParameters) -> String {
        SvgDocument(params).to_string()
    }

    fn write_document(svg: &mut fmt::Formatter<'_>, params: &VisualParameters) -> fmt::Result {
        let size = Self::CANVAS_SIZE;
        let extent = Self::VIEW_EXTENT;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="-{extent} -{extent} {span} {span}">"#,
            span = extent * 2
        )?;
        writeln!(
            svg,
            r#"<defs><filter id="glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter></defs>"#,
            num(Self::GLOW_BLUR)
        )?;

        Self::write_glow(svg, params)?;
        Self::write_base(svg, params)?;
        Self::write_barrels(svg, params)?;

        writeln!(svg, "</svg>")
    }

    fn write_glow(svg: &mut fmt::Formatter<'_>, params: &VisualParameters) -> fmt::Result {
        writeln!(
            svg,
            r#"<circle cx="0" cy="0" r="{}" fill="{}" opacity="{}" filter="url(#glow)"/>"#,
            num(Self::GLOW_RADIUS_FACTOR * params.base_scale),
            params.glow_color,
            num(Self::GLOW_OPACITY)
        )
    }

    fn write_base(svg: &mut fmt::Formatter<'_>, params: &VisualParameters) -> fmt::Result {
        let outline = build_outline(params.base_shape, params.base_points, DEFAULT_RADIUS);
        let style = line_style_attrs(&outline);

        // Full precision: the written scale must equal `base_scale`.
        writeln!(
            svg,
            r#"<g transform="scale({}) rotate({})">"#,
            params.base_scale, params.base_rotation
        )?;
        writeln!(
            svg,
            r#"<path d="{outline}" fill="{}" stroke="{}" stroke-width="{}"{style}/>"#,
            Self::BODY_FILL,
            params.core_color,
            num(params.base_stroke_width),
        )?;
        writeln!(
            svg,
            r#"<path d="{outline}" transform="scale({})" fill="none" stroke="{}" stroke-width="{}" opacity="{}"{style}/>"#,
            num(Self::INNER_SCALE),
            params.accent_color,
            num(Self::INNER_STROKE_WIDTH),
            num(Self::INNER_OPACITY),
        )?;
        writeln!(svg, "</g>")
    }

    fn write_barrels(svg: &mut fmt::Formatter<'_>, params: &VisualParameters) -> fmt::Result {
        writeln!(svg, "<g>")?;
        for barrel in build_barrels(params.barrel_shape, params.barrel_count, params.barrel_length) {
            match barrel.primitive {
                BarrelPrimitive::Polygon(points) => {
                    svg.write_str("<path d=\"")?;
                    for (i, (x, y)) in points.into_iter().enumerate() {
                        let op = if i == 0 { 'M' } else { 'L' };
                        write!(svg, "{op} {} {} ", num(x), num(y))?;
                    }
                    writeln!(svg, r#"Z" fill="{}"/>"#, params.core_color)?;
                }
                BarrelPrimitive::Orb { cx, cy, radius } => {
                    writeln!(
                        svg,
                        r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                        num(cx),
                        num(cy),
                        num(radius),
                        params.core_color
                    )?;
                }
            }
        }
        writeln!(svg, "</g>")
    }
}

/// One card's SVG document, written on demand.
struct SvgDocument<'a>(&'a VisualParameters);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ImageComposer::write_document(f, self.0)
    }
}

fn line_style_attrs(outline: &Outline) -> String {
    let style = outline.style();
    format!(
        r#" stroke-linejoin="{}" stroke-linecap="{}""#,
        style.linejoin(),
        style.linecap()
    )
}

/// Renders `params` with the standard composer.
#[must_use]
pub fn render_image(params: &VisualParameters) -> String {
    ImageComposer::new().compose(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrels::BarrelShape;
    use crate::config::{DamageType, Rarity};
    use crate::params::generate_visual_parameters;
    use crate::shapes::BaseShape;

    fn sample() -> VisualParameters {
        VisualParameters {
            base_shape: BaseShape::Bouba,
            base_points: 5,
            base_scale: 1.25,
            base_stroke_width: 2.5,
            base_rotation: 135,
            barrel_shape: BarrelShape::Tri,
            barrel_count: 3,
            barrel_length: 12.0,
            core_color: "#2a2a2e".to_string(),
            accent_color: "#ffffff".to_string(),
            glow_color: "#b026ff".to_string(),
        }
    }

    #[test]
    fn test_canvas_and_viewport() {
        let svg = render_image(&sample());
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="-20 -20 40 40">"#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_layer_order() {
        let svg = render_image(&sample());
        let glow = svg.find("filter=\"url(#glow)\"").unwrap();
        let base = svg.find("<g transform=").unwrap();
        let barrels = svg.find("<g>").unwrap();
        assert!(glow < base && base < barrels);
    }

    #[test]
    fn test_glow_radius_and_opacity() {
        let svg = render_image(&sample());
        assert!(svg.contains(r##"<circle cx="0" cy="0" r="20" fill="#b026ff" opacity="0.4""##));
    }

    #[test]
    fn test_base_group_transform() {
        let svg = render_image(&sample());
        assert!(svg.contains(r#"<g transform="scale(1.25) rotate(135)">"#));
        assert!(svg.contains(r##"fill="#111111" stroke="#2a2a2e" stroke-width="2.5""##));
        assert!(svg.contains(r##"transform="scale(0.6)" fill="none" stroke="#ffffff" stroke-width="1" opacity="0.7""##));
    }

    #[test]
    fn test_bouba_rounded_others_sharp() {
        let svg = render_image(&sample());
        assert_eq!(svg.matches(r#"stroke-linejoin="round" stroke-linecap="round""#).count(), 2);

        let mut square = sample();
        square.base_shape = BaseShape::Square;
        let svg = render_image(&square);
        assert_eq!(svg.matches(r#"stroke-linejoin="miter" stroke-linecap="butt""#).count(), 2);
    }

    #[test]
    fn test_barrels_unrotated_and_core_colored() {
        let svg = render_image(&sample());
        let barrel_group = &svg[svg.find("<g>").unwrap()..];
        assert!(!barrel_group.contains("rotate"));
        assert_eq!(barrel_group.matches(r##"fill="#2a2a2e""##).count(), 3);
        assert!(barrel_group.contains(r#"<path d="M -8 0 L -6 -12 L -4 0 Z""#));
        assert!(barrel_group.contains(r#"<path d="M 4 0 L 6 -12 L 8 0 Z""#));
    }

    #[test]
    fn test_base_scale_written_in_full() {
        let mut params = sample();
        params.base_scale = 0.8885;
        let svg = render_image(&params);
        assert!(svg.contains(r#"<g transform="scale(0.8885) rotate(135)">"#));
        assert!(svg.contains(r#"r="14.216""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        for id in ["c01", "t17", "zz-legend", ""] {
            let a = generate_visual_parameters(id, DamageType::Electric, Rarity::Legendary);
            let b = generate_visual_parameters(id, DamageType::Electric, Rarity::Legendary);
            assert_eq!(render_image(&a), render_image(&b));
        }
    }
}
