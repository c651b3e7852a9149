//! Charset names and the alias table backends rely on.

use std::borrow::Cow;

pub const UTF_8: &str = "UTF-8";

/// Canonical name of the IMAP flavour of UTF-7 (RFC 3501, 5.1.3).
pub const UTF7_IMAP: &str = "utf7-imap";

/// Legacy identifiers that multi-byte backends mishandle, mapped to a
/// working equivalent.
///
/// Outlook labels Korean mail `ks_c_5601-1987`/`ks_c_5601-1989`, which really
/// is the UHC (CP949) superset of EUC-KR.
const ALIASES: &[(&str, &str)] = &[
  ("ks_c_5601-1987", "UHC"),
  ("ks_c_5601-1989", "UHC"),
];

/// Maps a charset alias to its canonical name. Unknown names pass through.
pub fn normalize(charset: &str) -> Cow<'_, str> {
  ALIASES
    .iter()
    .find(|(alias, _)| alias.eq_ignore_ascii_case(charset))
    .map_or(Cow::Borrowed(charset), |(_, canonical)| {
      Cow::Borrowed(*canonical)
    })
}

/// True if both names refer to the same charset once aliases are resolved.
pub fn same_charset(a: &str, b: &str) -> bool {
  normalize(a).eq_ignore_ascii_case(&normalize(b))
}

pub fn is_utf8(charset: &str) -> bool {
  charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8")
}

/// The single byte charsets the legacy recode path understands.
pub fn is_latin1_or_ascii(charset: &str) -> bool {
  charset.eq_ignore_ascii_case("iso-8859-1") || charset.eq_ignore_ascii_case("us-ascii")
}

pub fn is_imap_utf7(charset: &str) -> bool {
  charset.eq_ignore_ascii_case(UTF7_IMAP)
}
