//! # xmltext
//!
//! Extracts the textual content of an XML document, ignoring markup, and
//! rewrites it as word-wrapped plain text, so that two documents (DocBook
//! sources, XHTML, any HTML that is valid XML) can be compared with a
//! line-based diff tool independent of markup differences or line-wrapping
//! differences in the source.
//!
//! The whole crate is one linear pipeline:
//!
//! 1. Parse the document into an element tree, substituting a small fixed
//!    table of named entities and skipping any foreign DTD reference.
//! 2. Flatten the tree to a single string in document order, discarding
//!    all tag structure.
//! 3. Collapse whitespace and insert a line break after each
//!    sentence-ending punctuation mark.
//! 4. Re-wrap each line at word boundaries near a fixed column.
//!
//! ## Quick Start
//!
//! ```
//! use xmltext::{EntityTable, normalize_document};
//!
//! let lines = normalize_document(
//!     "<p>Hello world. Goodbye now.</p>",
//!     &EntityTable::default(),
//! ).unwrap();
//! assert_eq!(lines, ["Hello world.", "Goodbye now."]);
//! ```
//!
//! The [`convert_stream`] and [`convert_file`] entry points add the I/O
//! boundary: stream output is newline-terminated, a freshly created file
//! ends at its last line.

pub mod entity;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod wrap;
pub(crate) mod util;

pub use entity::EntityTable;
pub use error::{Error, Result};
pub use parse::{Document, Element, parse_document};
pub use pipeline::{convert_file, convert_stream, normalize_document};
