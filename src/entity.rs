//! The table of named character entities the parser may substitute.

use std::collections::HashMap;

/// Immutable mapping from entity name to literal replacement text.
///
/// The table is built once and injected into parser construction; it is
/// consulted only for references that are neither predefined XML entities
/// nor numeric character references. [`EntityTable::default`] carries the
/// entities commonly found in book-like XML that omits its DTD:
///
/// | name | replacement |
/// |---|---|
/// | `mdash` | U+2014 EM DASH |
/// | `hellip` | U+2026 HORIZONTAL ELLIPSIS |
#[derive(Debug, Clone)]
pub struct EntityTable {
    map: HashMap<String, String>,
}

impl EntityTable {
    /// A table with no custom entities; standard XML still resolves.
    pub fn empty() -> Self {
        EntityTable {
            map: HashMap::new(),
        }
    }

    /// Add a custom entity, returning the extended table.
    pub fn with_entity(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(name.into(), value.into());
        self
    }

    /// Resolve an entity reference name (the part between `&` and `;`).
    ///
    /// Predefined XML entities and numeric character references resolve
    /// first; the custom table covers the rest. Returns `None` for names
    /// this table cannot resolve.
    pub fn resolve(&self, name: &str) -> Option<String> {
        match name {
            "apos" => return Some("'".to_string()),
            "quot" => return Some("\"".to_string()),
            "lt" => return Some("<".to_string()),
            "gt" => return Some(">".to_string()),
            "amp" => return Some("&".to_string()),
            _ => {}
        }

        if let Some(hex) = name.strip_prefix("#x") {
            if let Ok(code) = u32::from_str_radix(hex, 16)
                && let Some(c) = char::from_u32(code)
            {
                return Some(c.to_string());
            }
            return None;
        } else if let Some(dec) = name.strip_prefix('#') {
            if let Ok(code) = dec.parse::<u32>()
                && let Some(c) = char::from_u32(code)
            {
                return Some(c.to_string());
            }
            return None;
        }

        self.map.get(name).cloned()
    }
}

impl Default for EntityTable {
    fn default() -> Self {
        EntityTable::empty()
            .with_entity("mdash", "\u{2014}")
            .with_entity("hellip", "\u{2026}")
    }
}
