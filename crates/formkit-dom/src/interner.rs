//! String Interner - Deduplicate tag and attribute names
//!
//! Names like "form", "input" and "enctype" are stored once and referenced
//! by a 4-byte id.

use std::collections::HashMap;

/// Interned string ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// Offset and length of one entry in the shared buffer
#[derive(Debug, Clone, Copy)]
struct StringEntry {
    offset: u32,
    len: u32,
}

/// String interner backed by one contiguous buffer
#[derive(Debug)]
pub struct StringInterner {
    buffer: String,
    map: HashMap<Box<str>, u32>,
    entries: Vec<StringEntry>,
}

impl StringInterner {
    /// Create an interner with the names the form machinery touches pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            buffer: String::with_capacity(1024),
            map: HashMap::with_capacity(64),
            entries: Vec::with_capacity(64),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_NAMES: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "form", "input",
            "button", "select", "option", "textarea", "label", "fieldset",
            "id", "class", "type", "name", "value", "action", "method",
            "enctype", "encoding",
        ];
        for name in COMMON_NAMES {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning the existing ID if it was seen before
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&index) = self.map.get(s) {
            return InternedString(index);
        }

        let index = self.entries.len() as u32;
        let offset = self.buffer.len() as u32;
        self.buffer.push_str(s);
        self.entries.push(StringEntry {
            offset,
            len: s.len() as u32,
        });
        self.map.insert(s.into(), index);

        InternedString(index)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&index| InternedString(index))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        match self.entries.get(id.0 as usize) {
            Some(entry) => {
                let start = entry.offset as usize;
                &self.buffer[start..start + entry.len as usize]
            }
            None => "",
        }
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
