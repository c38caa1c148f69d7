//! Input decoding helpers.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Decode raw input bytes to text.
///
/// Tries UTF-8 first (a BOM is sniffed and removed, which also covers
/// UTF-16 documents that carry one). If the bytes are not valid UTF-8,
/// falls back to the encoding named in the `<?xml ... encoding="..."?>`
/// declaration. Input that decodes under neither is a hard error; lossy
/// replacement characters would change diff output.
pub(crate) fn decode_input(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let (text, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return Ok(text);
    }

    if let Some(label) = extract_xml_encoding(bytes)
        && let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes())
    {
        let (text, _, malformed) = encoding.decode(bytes);
        if !malformed {
            return Ok(text);
        }
    }

    Err(Error::Encoding(
        "input is not valid UTF-8 or its declared encoding".to_string(),
    ))
}

/// Extract the encoding label from an XML declaration.
///
/// Only the first 100 bytes are examined; declarations are ASCII even in
/// documents whose body is not.
fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(100)];
    let decl = &prefix[prefix.windows(5).position(|w| w == b"<?xml")?..];

    let attr = decl
        .windows(9)
        .position(|w| w.eq_ignore_ascii_case(b"encoding="))?;
    let value = &decl[attr + 9..];

    let quote = *value.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let end = value[1..].iter().position(|&b| b == quote)?;
    std::str::from_utf8(&value[1..1 + end]).ok()
}
