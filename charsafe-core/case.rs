//! Locale-free byte casing.
//!
//! These follow the rules of the neutral "C" locale: only the ASCII letters
//! `A-Z`/`a-z` change, every other byte passes through. Because the table is
//! fixed, the transforms are safe to run from any thread and never depend on
//! (or touch) process locale state.

/// Lowercases the ASCII letters of `bytes`.
pub fn to_ascii_lower(bytes: &[u8]) -> Vec<u8> {
  bytes.to_ascii_lowercase()
}

/// Uppercases the ASCII letters of `bytes`.
pub fn to_ascii_upper(bytes: &[u8]) -> Vec<u8> {
  bytes.to_ascii_uppercase()
}

/// Uppercases only the first byte, leaving the rest untouched.
pub fn ascii_ucfirst(bytes: &[u8]) -> Vec<u8> {
  let mut out = bytes.to_vec();
  if let Some(first) = out.first_mut() {
    first.make_ascii_uppercase();
  }
  out
}
