//! Whitespace and sentence-boundary normalization.

/// Punctuation that ends a line when followed by a space.
const SENTENCE_MARKS: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Normalize flattened text for diff-friendly output.
///
/// Newlines, carriage returns, and tabs become spaces, runs of spaces
/// collapse to one, and a line break is inserted after each sentence mark
/// (`. , ; : ! ?`) that is followed by a space. The result contains no
/// tabs, no double spaces, and no newlines other than sentence breaks.
/// Applying `normalize` to its own output is a no-op.
pub fn normalize(text: &str) -> String {
    break_sentences(&collapse_whitespace(text))
}

/// Fold `\n`, `\r`, and `\t` into spaces and collapse space runs.
///
/// Only ASCII spaces take part in the collapse; other whitespace such as
/// NO-BREAK SPACE passes through literally.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        let c = match c {
            '\n' | '\r' | '\t' => ' ',
            c => c,
        };
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

/// Replace `<mark><space>` with `<mark><newline>` for each sentence mark.
///
/// The collapse pass has already reduced every boundary to a single space,
/// so one left-to-right scan sees every break site. A mark with no space
/// after it (end of text included) produces no break.
fn break_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if SENTENCE_MARKS.contains(&c) && chars.peek() == Some(&' ') {
            chars.next();
            out.push('\n');
        }
    }
    out
}
