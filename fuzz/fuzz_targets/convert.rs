#![no_main]

use charsafe::{
  PadMode,
  TextContext,
};
use libfuzzer_sys::fuzz_target;

const CHARSETS: &[&str] = &[
  "UTF-8",
  "ISO-8859-1",
  "US-ASCII",
  "ISO-8859-2",
  "windows-1251",
  "EUC-KR",
  "ks_c_5601-1987",
  "Shift_JIS",
  "UTF-16LE",
  "utf7-imap",
  "x-unknown",
];

fuzz_target!(|data: &[u8]| {
  let [from, to, rest @ ..] = data else {
    return;
  };
  let from = CHARSETS[usize::from(*from) % CHARSETS.len()];
  let to = CHARSETS[usize::from(*to) % CHARSETS.len()];
  let context = TextContext::new();

  let _ = context.convert(rest, from, to);
  let length = context.length(rest, Some(from));
  let _ = context.substr(rest, length / 2, None, Some(from));
  let _ = context.pos(rest, b"a", 0, Some(from));
  let _ = context.lower(rest, true, Some(from));
  let _ = context.ucfirst(rest, true, Some(from));
  let _ = context.is_upper(rest, Some(from));
  let padded = context.pad(rest, length + 3, b"-", PadMode::Both, Some(from));
  assert!(padded.len() >= rest.len());
});
