//! The conversion pipeline and its I/O boundaries.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::entity::EntityTable;
use crate::error::Result;
use crate::flatten::flatten;
use crate::normalize::normalize;
use crate::parse::parse_document;
use crate::util::decode_input;
use crate::wrap::wrap_line;

/// Run the whole pipeline on one XML document: parse, flatten, normalize,
/// wrap. Returns the output lines in order.
pub fn normalize_document(xml: &str, entities: &EntityTable) -> Result<Vec<String>> {
    let document = parse_document(xml, entities)?;
    let text = normalize(&flatten(&document));

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        lines.extend(wrap_line(segment).iter().map(|piece| piece.to_string()));
    }
    Ok(lines)
}

/// Convert an XML stream to normalized text on another stream.
///
/// Stream output always ends with a newline (unless there are no lines at
/// all), so piping through the tool yields newline-terminated text.
pub fn convert_stream<R: Read, W: Write>(
    mut input: R,
    output: &mut W,
    entities: &EntityTable,
) -> Result<()> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let lines = run(&bytes, entities)?;
    if !lines.is_empty() {
        output.write_all(lines.join("\n").as_bytes())?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}

/// Convert an XML file into a newly created text file.
///
/// Unlike [`convert_stream`], the created file ends at its last line with
/// no forced trailing newline. Both handles are scoped to this call and
/// released on every path, error paths included.
pub fn convert_file(input: &Path, output: &Path, entities: &EntityTable) -> Result<()> {
    let bytes = std::fs::read(input)?;
    let lines = run(&bytes, entities)?;

    let mut file = File::create(output)?;
    file.write_all(lines.join("\n").as_bytes())?;
    Ok(())
}

fn run(bytes: &[u8], entities: &EntityTable) -> Result<Vec<String>> {
    let xml = decode_input(bytes)?;
    normalize_document(&xml, entities)
}
