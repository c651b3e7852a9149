use base64::{
  Engine,
  alphabet,
  engine::{
    GeneralPurpose,
    general_purpose::NO_PAD,
  },
};

use super::{
  Backend,
  Capabilities,
};
use crate::charset::{
  is_imap_utf7,
  is_latin1_or_ascii,
};

/// Modified base64 of RFC 3501: `,` instead of `/`, no padding.
const MUTF7: GeneralPurpose = GeneralPurpose::new(&alphabet::IMAP_MUTF7, NO_PAD);

/// IMAP mailbox name encoding (modified UTF-7), to and from Latin-1.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImapUtf7Backend;

impl ImapUtf7Backend {
  pub const NAME: &'static str = "imap";
}

impl Backend for ImapUtf7Backend {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn capabilities(&self) -> Capabilities {
    Capabilities::MAIL
  }

  fn mail_convert(&self, input: &[u8], from: &str, to: &str) -> Option<Vec<u8>> {
    if is_latin1_or_ascii(from) && is_imap_utf7(to) {
      Some(encode(input))
    } else if is_imap_utf7(from) && is_latin1_or_ascii(to) {
      decode(input)
    } else {
      None
    }
  }
}

fn is_direct(byte: u8) -> bool {
  (0x20..=0x7e).contains(&byte)
}

/// Latin-1 bytes to modified UTF-7.
pub(crate) fn encode(latin1: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(latin1.len());
  let mut rest = latin1;
  while let Some((&byte, tail)) = rest.split_first() {
    if byte == b'&' {
      out.extend_from_slice(b"&-");
      rest = tail;
    } else if is_direct(byte) {
      out.push(byte);
      rest = tail;
    } else {
      let run = rest.iter().position(|&b| is_direct(b)).unwrap_or(rest.len());
      let utf16: Vec<u8> = rest[..run]
        .iter()
        .flat_map(|&b| u16::from(b).to_be_bytes())
        .collect();
      out.push(b'&');
      out.extend_from_slice(MUTF7.encode(utf16).as_bytes());
      out.push(b'-');
      rest = &rest[run..];
    }
  }
  out
}

/// Modified UTF-7 to Latin-1. `None` for malformed input or characters
/// beyond U+00FF.
pub(crate) fn decode(mutf7: &[u8]) -> Option<Vec<u8>> {
  let mut out = Vec::with_capacity(mutf7.len());
  let mut rest = mutf7;
  while let Some((&byte, tail)) = rest.split_first() {
    if byte != b'&' {
      if !is_direct(byte) {
        return None;
      }
      out.push(byte);
      rest = tail;
      continue;
    }

    let end = tail.iter().position(|&b| b == b'-')?;
    if end == 0 {
      out.push(b'&');
    } else {
      let utf16 = MUTF7.decode(&tail[..end]).ok()?;
      if utf16.len() % 2 != 0 {
        return None;
      }
      let units = utf16.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
      for ch in char::decode_utf16(units) {
        out.push(u8::try_from(u32::from(ch.ok()?)).ok()?);
      }
    }
    rest = &tail[end + 1..];
  }
  Some(out)
}
