//! Scanner for parameter tokens in statement text.
//!
//! A deliberately small state machine with three token classes: type-cast
//! markers (`::ident`, passed through as literal text), named parameters
//! (`:ident`), and literal text. Identifiers follow the grammar
//! `[A-Za-z_]+`; digits are not part of it. Tokens inside string literals
//! are not skipped; that is a documented limitation of the grammar.

/// A fragment of statement text produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fragment<'a> {
    /// Literal text to copy through unchanged, type-cast markers included.
    Literal(&'a str),
    /// A named parameter; the identifier without its leading colon.
    Param(&'a str),
}

/// What a colon at a given position turns out to be.
enum Colon {
    /// A `::ident` type-cast marker ending at the given byte offset.
    Cast { end: usize },
    /// A `:ident` parameter; identifier spans `name_start..end`.
    Param { name_start: usize, end: usize },
    /// A bare colon with no identifier attached.
    Plain,
}

/// Scans statement text left-to-right, yielding [`Fragment`]s.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given statement text.
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Classifies the colon at byte offset `pos`.
    fn classify(&self, pos: usize) -> Colon {
        let bytes = self.input.as_bytes();
        if bytes.get(pos + 1) == Some(&b':') && bytes.get(pos + 2).copied().is_some_and(is_ident_byte)
        {
            Colon::Cast {
                end: ident_end(bytes, pos + 2),
            }
        } else if bytes.get(pos + 1).copied().is_some_and(is_ident_byte) {
            Colon::Param {
                name_start: pos + 1,
                end: ident_end(bytes, pos + 1),
            }
        } else {
            Colon::Plain
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Fragment<'a>> {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let mut pos = self.pos;
        while pos < bytes.len() {
            if bytes[pos] == b':' {
                match self.classify(pos) {
                    Colon::Param { name_start, end } => {
                        if pos == start {
                            self.pos = end;
                            return Some(Fragment::Param(&self.input[name_start..end]));
                        }
                        // Flush the literal run first; the parameter is
                        // picked up on the next call.
                        self.pos = pos;
                        return Some(Fragment::Literal(&self.input[start..pos]));
                    }
                    // Casts stay inside the literal run.
                    Colon::Cast { end } => pos = end,
                    Colon::Plain => pos += 1,
                }
            } else {
                pos += 1;
            }
        }

        self.pos = bytes.len();
        Some(Fragment::Literal(&self.input[start..]))
    }
}

/// Returns `true` for bytes that may appear in a parameter identifier.
const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns the byte offset one past the identifier starting at `from`.
fn ident_end(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    end
}
