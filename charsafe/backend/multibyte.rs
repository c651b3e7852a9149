use super::{
  Backend,
  Capabilities,
  codec,
};
use crate::recode;

/// General purpose multi-byte support.
///
/// Malformed input is decoded lossily and unmappable output replaced with
/// `?`, so this backend produces an answer for almost anything as long as
/// both charsets are known.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultibyteBackend;

impl MultibyteBackend {
  pub const NAME: &'static str = "multibyte";
}

fn question_mark(_: char) -> &'static str {
  "?"
}

impl Backend for MultibyteBackend {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn capabilities(&self) -> Capabilities {
    Capabilities::CONVERT
      | Capabilities::LENGTH
      | Capabilities::SUBSTR
      | Capabilities::SEARCH
      | Capabilities::CASE
      | Capabilities::CLASSIFY
  }

  fn convert(&self, input: &[u8], from: &str, to: &str) -> Option<Vec<u8>> {
    let source = codec::lookup(from)?;
    let target = codec::lookup(to)?;
    let text = codec::decode_lossy(source, input);
    codec::encode_with(target, &text, question_mark)
  }

  fn length(&self, input: &[u8], charset: &str) -> Option<usize> {
    let encoding = codec::lookup(charset)?;
    Some(codec::decode_lossy(encoding, input).chars().count())
  }

  fn substr(&self, input: &[u8], start: usize, len: usize, charset: &str) -> Option<Vec<u8>> {
    let encoding = codec::lookup(charset)?;
    let text = codec::decode_lossy(encoding, input);
    let part = recode::char_range(&text, start, len);
    // An empty slice is indistinguishable from a failure.
    if part.is_empty() {
      return None;
    }
    codec::encode_with(encoding, part, question_mark)
  }

  fn pos(
    &self,
    haystack: &[u8],
    needle: &[u8],
    offset: usize,
    charset: &str,
  ) -> Option<Option<usize>> {
    let encoding = codec::lookup(charset)?;
    let haystack = codec::decode_lossy(encoding, haystack);
    let needle = codec::decode_lossy(encoding, needle);
    if needle.is_empty() {
      return None;
    }

    let start = match haystack.char_indices().nth(offset) {
      Some((idx, _)) => idx,
      None if offset == haystack.chars().count() => haystack.len(),
      None => return None,
    };
    Some(
      haystack[start..]
        .find(&*needle)
        .map(|idx| offset + haystack[start..start + idx].chars().count()),
    )
  }

  fn lower(&self, input: &[u8], charset: &str) -> Option<Vec<u8>> {
    let encoding = codec::lookup(charset)?;
    let text = codec::decode_lossy(encoding, input).to_lowercase();
    codec::encode_with(encoding, &text, question_mark)
  }

  fn upper(&self, input: &[u8], charset: &str) -> Option<Vec<u8>> {
    let encoding = codec::lookup(charset)?;
    let text = codec::decode_lossy(encoding, input).to_uppercase();
    codec::encode_with(encoding, &text, question_mark)
  }

  fn is_alpha(&self, input: &[u8], charset: &str) -> Option<bool> {
    let encoding = codec::lookup(charset)?;
    Some(
      codec::decode_lossy(encoding, input)
        .chars()
        .all(charsafe_core::chars::char_is_alpha),
    )
  }
}
