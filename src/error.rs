//! Error types for text extraction.

use thiserror::Error;

/// Errors that can occur while turning an XML document into normalized text.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("unknown entity reference: &{0};")]
    UnknownEntity(String),

    #[error("undecodable input: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
