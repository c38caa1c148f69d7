//! Flattening a document tree into one logical string.

use crate::parse::{Document, Element};

/// Concatenate every element's text and tail in document order.
///
/// Text is collected pre-order, tail after the element's children, and the
/// contributions are joined by single spaces. Elements with neither text
/// nor tail contribute nothing and do not break the join; an empty-string
/// contribution still counts toward the join. Tag structure and attributes
/// disappear entirely.
pub fn flatten(document: &Document) -> String {
    let mut parts: Vec<&str> = Vec::new();
    collect(&document.root, &mut parts);
    parts.join(" ")
}

fn collect<'a>(element: &'a Element, parts: &mut Vec<&'a str>) {
    if let Some(text) = element.text.as_deref() {
        parts.push(text);
    }
    for child in &element.children {
        collect(child, parts);
    }
    if let Some(tail) = element.tail.as_deref() {
        parts.push(tail);
    }
}
