//! Entity-aware XML parsing into an element tree.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::entity::EntityTable;
use crate::error::{Error, Result};

/// A parsed XML document.
#[derive(Debug)]
pub struct Document {
    pub root: Element,
}

/// One element of the document tree.
///
/// `text` is the content directly inside the opening tag, before any child;
/// `tail` is the content immediately after the closing tag, before the next
/// sibling. Both are kept verbatim; whitespace handling belongs to the
/// normalizer, not the parser. Attributes are discarded.
#[derive(Debug, Default)]
pub struct Element {
    pub name: String,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    fn named(name: &[u8]) -> Self {
        Element {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Element::default()
        }
    }
}

/// Parse a whole XML document, substituting entities from `entities`.
///
/// A document type declaration is skipped rather than fetched or validated,
/// so references to a foreign/undeclared DTD do not fail. Anything else
/// that is not well-formed (mismatched or unclosed tags, a second document
/// element, an entity reference the table cannot resolve) aborts with an
/// error; there is no partial-output path.
pub fn parse_document(xml: &str, entities: &EntityTable) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(Element::named(e.name().as_ref()));
            }
            Ok(Event::Empty(e)) => {
                attach(Element::named(e.name().as_ref()), &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                // quick-xml has already checked that the name matches
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Malformed("unmatched closing tag".to_string()))?;
                attach(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(e)) => {
                append_text(&mut stack, &String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::CData(e)) => {
                let data = e.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&data));
            }
            Ok(Event::GeneralRef(e)) => {
                let name = String::from_utf8_lossy(e.as_ref()).into_owned();
                match entities.resolve(&name) {
                    Some(replacement) => append_text(&mut stack, &replacement),
                    None => return Err(Error::UnknownEntity(name)),
                }
            }
            // The DTD is neither fetched nor validated; declarations,
            // comments, and processing instructions carry no text content.
            Ok(Event::DocType(_)) | Ok(Event::Decl(_)) | Ok(Event::Comment(_))
            | Ok(Event::PI(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Malformed(format!("unclosed element <{}>", open.name)));
    }

    root.map(|root| Document { root })
        .ok_or_else(|| Error::Malformed("no document element".to_string()))
}

/// Attach a completed element to its parent, or make it the root.
fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(Error::Malformed(format!(
                "second document element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}

/// Append character data to the element currently open on the stack.
///
/// Data lands in the open element's text until it has a child, and in the
/// last child's tail afterwards. Data outside any element (prolog and
/// epilog whitespace) is dropped.
fn append_text(stack: &mut [Element], data: &str) {
    if let Some(top) = stack.last_mut() {
        let slot = match top.children.last_mut() {
            Some(child) => &mut child.tail,
            None => &mut top.text,
        };
        slot.get_or_insert_with(String::new).push_str(data);
    }
}
