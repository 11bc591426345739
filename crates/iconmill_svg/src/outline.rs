//! Stroke-to-fill conversion
//!
//! Rewrites an SVG document so that every visible shape is expressed as
//! filled geometry: filled paths are carried over with their absolute
//! transform applied, stroked paths are expanded to their outline. The
//! result contains only `path` elements with `d` attributes, ready to be
//! merged into a single path string.

use std::fs;
use std::path::Path as FilePath;

use kurbo::{stroke, Affine, BezPath, Cap, Join, Point, Stroke, StrokeOpts};
use usvg::{Options, Tree};

use crate::error::SvgError;
use crate::path::{fmt_coord, path_to_data};

/// Tolerance for approximating stroke outlines, in user units
const STROKE_TOLERANCE: f64 = 0.01;

/// Convert the SVG file at `path`, returning the fixed document text
pub fn outline_file(path: impl AsRef<FilePath>) -> Result<String, SvgError> {
    let data = fs::read(path)?;
    outline_svg(&data)
}

/// Convert raw SVG bytes, returning the fixed document text
pub fn outline_svg(data: &[u8]) -> Result<String, SvgError> {
    let options = Options::default();
    let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut paths = Vec::new();
    collect_filled_paths(tree.root(), &mut paths);

    let size = tree.size();
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        fmt_coord(size.width() as f64),
        fmt_coord(size.height() as f64)
    ));
    for d in &paths {
        out.push_str(&format!(r#"<path d="{d}"/>"#));
    }
    out.push_str("</svg>");

    Ok(out)
}

/// Recursively collect filled path data from the node tree
fn collect_filled_paths(group: &usvg::Group, paths: &mut Vec<String>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => {
                // Transforms are applied per-path via abs_transform
                collect_filled_paths(g, paths);
            }
            usvg::Node::Path(p) => {
                let base = usvg_path_to_bez(p.data());
                let transformed = apply_transform(&base, &p.abs_transform());

                // Filled geometry passes through unchanged
                if p.fill().is_some() {
                    paths.push(path_to_data(&transformed));
                }

                // Stroked geometry is replaced by its outline
                if let Some(s) = p.stroke() {
                    let outline = stroke_to_outline(&transformed, s);
                    paths.push(path_to_data(&outline));
                }
            }
            usvg::Node::Image(_) => {
                // Raster content carries no path geometry
            }
            usvg::Node::Text(_) => {
                // Text is converted to paths by usvg
            }
        }
    }
}

/// Convert usvg path data to a kurbo path
fn usvg_path_to_bez(path_data: &usvg::tiny_skia_path::Path) -> BezPath {
    let mut bez = BezPath::new();

    for segment in path_data.segments() {
        match segment {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                bez.move_to(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                bez.line_to(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(c, e) => {
                bez.quad_to(
                    Point::new(c.x as f64, c.y as f64),
                    Point::new(e.x as f64, e.y as f64),
                );
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(c1, c2, e) => {
                bez.curve_to(
                    Point::new(c1.x as f64, c1.y as f64),
                    Point::new(c2.x as f64, c2.y as f64),
                    Point::new(e.x as f64, e.y as f64),
                );
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                bez.close_path();
            }
        }
    }

    bez
}

/// Apply a usvg transform to a kurbo path
fn apply_transform(path: &BezPath, transform: &usvg::Transform) -> BezPath {
    if transform.is_identity() {
        return path.clone();
    }

    let affine = Affine::new([
        transform.sx as f64,
        transform.ky as f64,
        transform.kx as f64,
        transform.sy as f64,
        transform.tx as f64,
        transform.ty as f64,
    ]);

    let mut transformed = path.clone();
    transformed.apply_affine(affine);
    transformed
}

/// Expand a stroked path to its filled outline
fn stroke_to_outline(path: &BezPath, svg_stroke: &usvg::Stroke) -> BezPath {
    let cap = match svg_stroke.linecap() {
        usvg::LineCap::Butt => Cap::Butt,
        usvg::LineCap::Round => Cap::Round,
        usvg::LineCap::Square => Cap::Square,
    };

    let join = match svg_stroke.linejoin() {
        usvg::LineJoin::Miter | usvg::LineJoin::MiterClip => Join::Miter,
        usvg::LineJoin::Round => Join::Round,
        usvg::LineJoin::Bevel => Join::Bevel,
    };

    let mut style = Stroke::new(svg_stroke.width().get() as f64)
        .with_caps(cap)
        .with_join(join)
        .with_miter_limit(svg_stroke.miterlimit().get() as f64);

    // Handle dash pattern
    if let Some(dasharray) = svg_stroke.dasharray() {
        style = style.with_dashes(
            svg_stroke.dashoffset() as f64,
            dasharray.iter().map(|&d| d as f64).collect::<Vec<_>>(),
        );
    }

    stroke(path.iter(), &style, &StrokeOpts::default(), STROKE_TOLERANCE)
}
