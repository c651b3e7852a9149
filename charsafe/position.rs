//! Character based measuring, slicing, searching and padding.

use std::borrow::Cow;

use crate::{
  TextContext,
  backend::Capabilities,
  charset::{
    is_utf8,
    normalize,
  },
  recode,
};

/// Which side [`TextContext::pad`] grows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
  Left,
  #[default]
  Right,
  /// Both sides, the left one getting the smaller half.
  Both,
}

impl TextContext {
  /// Number of characters in `input`.
  ///
  /// UTF-8 is counted directly. Other charsets ask the length backends and
  /// fall back to the byte count when none gives an answer.
  pub fn length(&self, input: &[u8], charset: Option<&str>) -> usize {
    let charset = self.charset_or_default(charset);
    if is_utf8(charset) {
      return recode::utf8_char_count(input);
    }

    let charset = normalize(charset);
    for backend in self.registry().ranked(Capabilities::LENGTH) {
      match backend.length(input, &charset) {
        Some(len) if len > 0 => return len,
        _ => tracing::trace!(backend = backend.name(), charset = %charset, "length failed"),
      }
    }
    input.len()
  }

  /// `len` characters of `input` from character `start`; `None` takes
  /// everything up to the end.
  pub fn substr(&self, input: &[u8], start: usize, len: Option<usize>, charset: Option<&str>) -> Vec<u8> {
    let charset = self.charset_or_default(charset);
    let len = match len {
      Some(len) => len,
      None => self.length(input, Some(charset)).saturating_sub(start),
    };
    if len == 0 {
      return Vec::new();
    }

    let normalized = normalize(charset);
    for backend in self.registry().ranked(Capabilities::SUBSTR) {
      match backend.substr(input, start, len, &normalized) {
        Some(output) => return output,
        None => tracing::trace!(backend = backend.name(), charset, "substring failed"),
      }
    }

    if is_utf8(charset) {
      if let Ok(text) = std::str::from_utf8(input) {
        return recode::char_range(text, start, len).as_bytes().to_vec();
      }
    }
    let start = start.min(input.len());
    let end = start.saturating_add(len).min(input.len());
    input[start..end].to_vec()
  }

  /// Character index of the first `needle` in `haystack` at or after
  /// character `offset`.
  pub fn pos(&self, haystack: &[u8], needle: &[u8], offset: usize, charset: Option<&str>) -> Option<usize> {
    if needle.is_empty() {
      return None;
    }
    let charset = self.charset_or_default(charset);

    let normalized = normalize(charset);
    for backend in self.registry().ranked(Capabilities::SEARCH) {
      match backend.pos(haystack, needle, offset, &normalized) {
        Some(found) => return found,
        None => tracing::trace!(backend = backend.name(), charset, "search failed"),
      }
    }

    if is_utf8(charset) {
      if let (Ok(haystack), Ok(needle)) = (std::str::from_utf8(haystack), std::str::from_utf8(needle)) {
        return recode::char_find(haystack, needle, offset);
      }
    }
    haystack
      .get(offset..)?
      .windows(needle.len())
      .position(|window| window == needle)
      .map(|idx| offset + idx)
  }

  /// Pads `input` with repetitions of `pad` until it is `target`
  /// characters long.
  ///
  /// Input already at least `target` long, or an empty `pad`, comes back
  /// borrowed.
  pub fn pad<'a>(
    &self,
    input: &'a [u8],
    target: usize,
    pad: &[u8],
    mode: PadMode,
    charset: Option<&str>,
  ) -> Cow<'a, [u8]> {
    if pad.is_empty() {
      return Cow::Borrowed(input);
    }
    let charset = self.charset_or_default(charset);

    let length = self.length(input, Some(charset));
    let Some(missing) = target.checked_sub(length).filter(|&n| n > 0) else {
      return Cow::Borrowed(input);
    };
    let pad_length = self.length(pad, Some(charset));
    if length == input.len() && pad_length == pad.len() {
      // One byte per character.
      return Cow::Owned(surround(input, missing, mode, |n| {
        pad.iter().copied().cycle().take(n).collect()
      }));
    }

    let pad_length = pad_length.max(1);
    Cow::Owned(surround(input, missing, mode, |n| {
      let material = pad.repeat(n.div_ceil(pad_length));
      self.substr(&material, 0, Some(n), Some(charset))
    }))
  }
}

fn surround(input: &[u8], missing: usize, mode: PadMode, fill: impl Fn(usize) -> Vec<u8>) -> Vec<u8> {
  let (left, right) = match mode {
    PadMode::Left => (missing, 0),
    PadMode::Right => (0, missing),
    PadMode::Both => (missing / 2, missing - missing / 2),
  };

  let mut out = fill(left);
  out.extend_from_slice(input);
  out.extend(fill(right));
  out
}
