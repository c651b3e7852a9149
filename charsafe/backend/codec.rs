//! encoding_rs plumbing shared by the transliterating and multi-byte
//! backends.

use std::borrow::Cow;

use encoding_rs::{
  EUC_KR,
  EncoderResult,
  Encoding,
  UTF_8,
};

/// Resolves a normalized charset name to an encoding.
///
/// Names WHATWG does not know but the alias table produces are handled here.
pub(super) fn lookup(charset: &str) -> Option<&'static Encoding> {
  if charset.eq_ignore_ascii_case("uhc") || charset.eq_ignore_ascii_case("cp949") {
    return Some(EUC_KR);
  }
  Encoding::for_label_no_replacement(charset.trim().as_bytes())
}

/// Decodes, failing on the first malformed sequence.
pub(super) fn decode_strict<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
  encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Decodes, replacing malformed sequences with U+FFFD.
pub(super) fn decode_lossy<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Cow<'a, str> {
  encoding.decode_without_bom_handling(bytes).0
}

/// Encodes `text`, asking `substitute` for an ASCII stand-in whenever a
/// character has no mapping in the target.
///
/// Returns `None` for encodings encoding_rs can only decode (UTF-16).
pub(super) fn encode_with(
  encoding: &'static Encoding,
  text: &str,
  mut substitute: impl FnMut(char) -> &'static str,
) -> Option<Vec<u8>> {
  if encoding.output_encoding() != encoding {
    return None;
  }
  if encoding == UTF_8 {
    return Some(text.as_bytes().to_vec());
  }

  let mut encoder = encoding.new_encoder();
  let mut out = Vec::with_capacity(text.len());
  let mut src = text;
  loop {
    out.reserve(encoder.max_buffer_length_from_utf8_without_replacement(src.len())?);
    let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(src, &mut out, true);
    src = &src[read..];
    match result {
      EncoderResult::InputEmpty => return Some(out),
      EncoderResult::OutputFull => {},
      EncoderResult::Unmappable(ch) => {
        let stand_in = substitute(ch);
        out.reserve(encoder.max_buffer_length_from_utf8_without_replacement(stand_in.len())?);
        let (result, _) =
          encoder.encode_from_utf8_to_vec_without_replacement(stand_in, &mut out, false);
        if !matches!(result, EncoderResult::InputEmpty) {
          return None;
        }
      },
    }
  }
}

/// Encodes without substitution, `None` if anything is unmappable.
pub(super) fn encode_strict(encoding: &'static Encoding, text: &str) -> Option<Vec<u8>> {
  let mut unmappable = false;
  let out = encode_with(encoding, text, |_| {
    unmappable = true;
    ""
  })?;
  (!unmappable).then_some(out)
}
