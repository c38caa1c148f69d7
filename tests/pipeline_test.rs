//! End-to-end pipeline tests.
//!
//! These exercise the public conversion entry points the way the CLI uses
//! them: whole documents in, normalized wrapped lines out, including the
//! stream/file trailing-newline asymmetry that diff-based comparison
//! depends on.

use std::fs;
use std::io::Cursor;

use xmltext::{EntityTable, Error, convert_file, convert_stream, normalize_document};

fn stream(xml: &str) -> Vec<u8> {
    let mut out = Vec::new();
    convert_stream(Cursor::new(xml.as_bytes()), &mut out, &EntityTable::default())
        .expect("conversion failed");
    out
}

// ============================================================================
// Pipeline behavior
// ============================================================================

#[test]
fn test_sentence_breaks_end_to_end() {
    let out = stream("<doc><p>Hello world. Goodbye now.</p></doc>");
    assert_eq!(out, b"Hello world.\nGoodbye now.\n");
}

#[test]
fn test_markup_and_wrapping_independence() {
    // Same text, different markup and different source line-wrapping,
    // identical output.
    let a = stream("<doc><p>The quick brown fox jumps over the lazy dog. Again.</p></doc>");
    let b = stream("<doc>The <em>quick</em> brown\n fox jumps\tover the <b>lazy</b> dog. Again.</doc>");
    assert_eq!(a, b);
}

#[test]
fn test_long_paragraph_is_wrapped() {
    let words = "alpha beta gamma delta ".repeat(20);
    let xml = format!("<doc><p>{words}</p></doc>");
    let out = String::from_utf8(stream(&xml)).unwrap();

    for line in out.lines() {
        let n = line.chars().count();
        assert!(
            n < 72 || line.chars().skip(60).all(|c| c != ' '),
            "line too long with an available break: {line:?}"
        );
    }
}

#[test]
fn test_entity_substitution() {
    let out = String::from_utf8(stream("<p>pause &mdash; resume&hellip;</p>")).unwrap();
    assert_eq!(out, "pause \u{2014} resume\u{2026}\n");
}

#[test]
fn test_foreign_dtd_tolerated() {
    let xml = "<?xml version=\"1.0\"?>\n\
               <!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\"\n\
               \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n\
               <html><body><p>Works anyway.</p></body></html>";
    assert_eq!(stream(xml), b"Works anyway.\n");
}

#[test]
fn test_deterministic_across_runs() {
    let xml = "<doc><p>First sentence. Second, longer sentence; with clauses.</p></doc>";
    assert_eq!(stream(xml), stream(xml));
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_malformed_xml_aborts() {
    let mut out = Vec::new();
    let result = convert_stream(
        Cursor::new(&b"<a><b>unbalanced</a>"[..]),
        &mut out,
        &EntityTable::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_entity_aborts() {
    let err = normalize_document("<p>&unknown;</p>", &EntityTable::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownEntity(_)));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert_file(
        &dir.path().join("does-not-exist.xml"),
        &dir.path().join("out.txt"),
        &EntityTable::default(),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

// ============================================================================
// Trailing-newline asymmetry
// ============================================================================

#[test]
fn test_stream_output_ends_with_newline() {
    let out = stream("<p>text</p>");
    assert_eq!(out.last(), Some(&b'\n'));
}

#[test]
fn test_file_output_has_no_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xml");
    let output = dir.path().join("out.txt");
    fs::write(&input, "<p>One sentence. Another one.</p>").unwrap();

    convert_file(&input, &output, &EntityTable::default()).unwrap();

    let written = fs::read(&output).unwrap();
    assert_eq!(written, b"One sentence.\nAnother one.");
}

#[test]
fn test_file_and_stream_differ_only_in_trailing_newline() {
    let xml = "<p>Same content. Both modes.</p>";

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xml");
    let output = dir.path().join("out.txt");
    fs::write(&input, xml).unwrap();
    convert_file(&input, &output, &EntityTable::default()).unwrap();

    let mut from_file = fs::read(&output).unwrap();
    from_file.push(b'\n');
    assert_eq!(from_file, stream(xml));
}

// ============================================================================
// Encodings
// ============================================================================

#[test]
fn test_declared_latin1_input() {
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><p>caf".to_vec();
    bytes.push(0xE9); // e-acute, latin-1
    bytes.extend_from_slice(b"</p>");

    let mut out = Vec::new();
    convert_stream(Cursor::new(bytes), &mut out, &EntityTable::default()).unwrap();
    assert_eq!(out, "caf\u{e9}\n".as_bytes());
}

#[test]
fn test_undecodable_input_aborts() {
    let bytes = vec![b'<', b'p', b'>', 0xFF, 0xFF, b'<', b'/', b'p', b'>'];
    let mut out = Vec::new();
    let result = convert_stream(Cursor::new(bytes), &mut out, &EntityTable::default());
    assert!(matches!(result, Err(Error::Encoding(_))));
}
