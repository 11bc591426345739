//! Uniform document scaling

use kurbo::Affine;

use crate::document::{parse_view_box, Element, XmlNode};
use crate::error::SvgError;
use crate::path::{fmt_coord, parse_path_data, path_to_data};

/// Attributes holding a single scalable length
const LENGTH_ATTRS: &[&str] = &[
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "width",
    "height",
    "stroke-width",
    "stroke-dashoffset",
];

/// Attributes holding a list of scalable numbers
const LIST_ATTRS: &[&str] = &["points", "stroke-dasharray"];

/// Scale every geometric attribute in the subtree by `factor`
pub fn scale_element(element: &mut Element, factor: f64) -> Result<(), SvgError> {
    for (name, value) in element.attributes_mut().iter_mut() {
        match name.as_str() {
            "viewBox" => {
                if let Some(vb) = parse_view_box(value) {
                    *value = format!(
                        "{} {} {} {}",
                        fmt_coord(vb[0] * factor),
                        fmt_coord(vb[1] * factor),
                        fmt_coord(vb[2] * factor),
                        fmt_coord(vb[3] * factor)
                    );
                }
            }
            "d" => {
                *value = scale_path_data(value, factor)?;
            }
            n if LENGTH_ATTRS.contains(&n) => {
                // Values with units or percentages are left untouched
                if let Some(scaled) = scale_length(value, factor) {
                    *value = scaled;
                }
            }
            n if LIST_ATTRS.contains(&n) => {
                *value = scale_list(value, factor);
            }
            _ => {}
        }
    }

    for child in element.children_mut() {
        if let XmlNode::Element(el) = child {
            scale_element(el, factor)?;
        }
    }

    Ok(())
}

fn scale_length(value: &str, factor: f64) -> Option<String> {
    let n: f64 = value.trim().parse().ok()?;
    Some(fmt_coord(n * factor))
}

fn scale_list(value: &str, factor: f64) -> String {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|part| match part.parse::<f64>() {
            Ok(n) => fmt_coord(n * factor),
            Err(_) => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn scale_path_data(d: &str, factor: f64) -> Result<String, SvgError> {
    let mut path = parse_path_data(d)?;
    path.apply_affine(Affine::scale(factor));
    Ok(path_to_data(&path))
}
