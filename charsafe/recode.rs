//! Direct byte re-encoding between Latin-1 and UTF-8.
//!
//! Every Latin-1 byte is the Unicode scalar of the same value, so this needs
//! no backend and no lookup tables.

/// Inputs at or above this size skip the recode fast path when a backend can
/// do the conversion instead.
pub const RECODE_THRESHOLD: usize = 16 * 1024 * 1024;

/// Re-encodes Latin-1 (or US-ASCII) bytes as UTF-8.
pub fn latin1_to_utf8(bytes: &[u8]) -> Vec<u8> {
  let mut out = String::with_capacity(bytes.len() + bytes.len() / 2);
  out.extend(bytes.iter().map(|&b| char::from(b)));
  out.into_bytes()
}

/// Re-encodes UTF-8 as Latin-1.
///
/// Scalars above U+00FF and invalid sequences become `?`.
pub fn utf8_to_latin1(bytes: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(bytes.len());
  for chunk in bytes.utf8_chunks() {
    out.extend(
      chunk
        .valid()
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?')),
    );
    if !chunk.invalid().is_empty() {
      out.push(b'?');
    }
  }
  out
}

/// Number of characters in UTF-8 bytes. Each invalid sequence counts as one
/// character, the way a lossy decode would replace it.
pub fn utf8_char_count(bytes: &[u8]) -> usize {
  bytes
    .utf8_chunks()
    .map(|chunk| chunk.valid().chars().count() + usize::from(!chunk.invalid().is_empty()))
    .sum()
}

/// Byte range of `len` characters starting at character `start`, clamped to
/// the text.
pub(crate) fn char_range(text: &str, start: usize, len: usize) -> &str {
  let mut indices = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
  let Some(from) = indices.nth(start) else {
    return "";
  };
  let to = if len == 0 {
    from
  } else {
    indices.nth(len - 1).unwrap_or(text.len())
  };
  &text[from..to]
}

/// Character index of the first `needle` at or after character `offset`.
pub(crate) fn char_find(haystack: &str, needle: &str, offset: usize) -> Option<usize> {
  let start = match haystack.char_indices().nth(offset) {
    Some((idx, _)) => idx,
    None => return None,
  };
  haystack[start..]
    .find(needle)
    .map(|idx| offset + haystack[start..start + idx].chars().count())
}
