//! Path-data parsing and serialization

use kurbo::{BezPath, PathEl};

use crate::error::SvgError;

/// Parse an SVG path-data string into a kurbo path
pub fn parse_path_data(d: &str) -> Result<BezPath, SvgError> {
    BezPath::from_svg(d).map_err(|e| SvgError::PathData(e.to_string()))
}

/// Serialize a kurbo path to an SVG path-data string
pub fn path_to_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                d.push_str(&format!("M{} {}", fmt_coord(p.x), fmt_coord(p.y)));
            }
            PathEl::LineTo(p) => {
                d.push_str(&format!("L{} {}", fmt_coord(p.x), fmt_coord(p.y)));
            }
            PathEl::QuadTo(c, p) => {
                d.push_str(&format!(
                    "Q{} {} {} {}",
                    fmt_coord(c.x),
                    fmt_coord(c.y),
                    fmt_coord(p.x),
                    fmt_coord(p.y)
                ));
            }
            PathEl::CurveTo(c1, c2, p) => {
                d.push_str(&format!(
                    "C{} {} {} {} {} {}",
                    fmt_coord(c1.x),
                    fmt_coord(c1.y),
                    fmt_coord(c2.x),
                    fmt_coord(c2.y),
                    fmt_coord(p.x),
                    fmt_coord(p.y)
                ));
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Format a coordinate with at most 3 decimal places, trimming trailing zeros
pub fn fmt_coord(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
