//! Utility functions to classify characters and byte strings.

/// Whitespace a line may be broken at: any Unicode whitespace, line endings
/// included, except the no-break family.
#[inline]
pub fn char_is_breaking_whitespace(ch: char) -> bool {
  match ch {
    '\u{00A0}' | // No-break Space
    '\u{2007}' | // Figure Space
    '\u{202F}' | // Narrow No-break Space
    '\u{FEFF}'   // Zero Width No-break Space
    => false,

    ch => ch.is_whitespace(),
  }
}

/// Unicode `Alphabetic`, the `[:alpha:]` class of a multi-byte aware regex
/// engine.
#[inline]
pub fn char_is_alpha(ch: char) -> bool {
  ch.is_alphabetic()
}

/// Byte oriented alphabetic test: non-empty and ASCII letters only.
pub fn bytes_are_alpha(bytes: &[u8]) -> bool {
  !bytes.is_empty() && bytes.iter().all(u8::is_ascii_alphabetic)
}
