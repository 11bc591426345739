//! Typed SVG document model
//!
//! Parses SVG markup into an explicit element/text tree with ordered
//! attributes and serializes it back to standalone markup. The model is
//! deliberately small: it carries what an icon pipeline needs to read
//! viewboxes, rescale geometry, and enumerate path children, nothing more.

use indexmap::IndexMap;

use crate::error::SvgError;
use crate::scale::scale_element;

/// A node in the document tree
#[derive(Clone, Debug)]
pub enum XmlNode {
    /// An element with attributes and children
    Element(Element),
    /// Character data between elements
    Text(String),
}

/// An element with a tag name, ordered attributes, and child nodes
#[derive(Clone, Debug, Default)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set or replace an attribute, keeping first-insertion order
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Iterate attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut IndexMap<String, String> {
        &mut self.attributes
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<XmlNode> {
        &mut self.children
    }

    /// Append a child node
    pub fn push_child(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Iterate direct child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// Serialize this element and its subtree to markup text
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

/// A parsed SVG document
#[derive(Clone, Debug)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Parse an SVG document from markup text
    pub fn parse(text: &str) -> Result<Self, SvgError> {
        let doc = roxmltree::Document::parse(text)?;
        let root = convert_element(doc.root_element(), true);
        Ok(Self { root })
    }

    /// Root element, usually `svg`
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable root element
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The root `viewBox` as its four numeric components
    ///
    /// Returns `None` when the attribute is missing or does not contain
    /// exactly four numbers.
    pub fn view_box(&self) -> Option<[f64; 4]> {
        parse_view_box(self.root.attribute("viewBox")?)
    }

    /// Uniformly scale all geometry in the document by `factor`
    pub fn scale(&mut self, factor: f64) -> Result<(), SvgError> {
        scale_element(&mut self.root, factor)
    }

    /// Serialize the document back to markup text
    pub fn serialize(&self) -> String {
        self.root.serialize()
    }
}

/// Parse a `viewBox` attribute value into its four numeric components
pub fn parse_view_box(raw: &str) -> Option<[f64; 4]> {
    let mut values = [0.0; 4];
    let mut count = 0;
    for part in raw.replace(',', " ").split_whitespace() {
        if count == 4 {
            return None;
        }
        values[count] = part.parse().ok()?;
        count += 1;
    }
    if count == 4 {
        Some(values)
    } else {
        None
    }
}

fn convert_element(node: roxmltree::Node<'_, '_>, is_root: bool) -> Element {
    let mut element = Element::new(node.tag_name().name());

    // roxmltree does not report namespace declarations as attributes, so
    // re-attach the root's declarations to keep the serialized output a
    // valid standalone document.
    if is_root {
        for ns in node.namespaces() {
            match ns.name() {
                Some(prefix) => element.set_attribute(format!("xmlns:{prefix}"), ns.uri()),
                None => element.set_attribute("xmlns", ns.uri()),
            }
        }
    }

    for attr in node.attributes() {
        element.set_attribute(attr.name(), attr.value());
    }

    for child in node.children() {
        if child.is_element() {
            element.push_child(XmlNode::Element(convert_element(child, false)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                // Whitespace-only text is pretty-printing, not content
                if !text.trim().is_empty() {
                    element.push_child(XmlNode::Text(text.to_string()));
                }
            }
        }
    }

    element
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }

    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in element.children() {
        match child {
            XmlNode::Element(el) => write_element(out, el),
            XmlNode::Text(text) => out.push_str(&escape_text(text)),
        }
    }
    out.push_str(&format!("</{}>", element.name()));
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
