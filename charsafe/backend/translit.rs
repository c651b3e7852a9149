use super::{
  Backend,
  Capabilities,
  codec,
};
use crate::recode;

/// Strict conversion with transliteration of unmappable characters.
///
/// Malformed input is a failure here rather than being patched up, which lets
/// the lossy [`MultibyteBackend`](super::MultibyteBackend) take over.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranslitBackend;

impl TranslitBackend {
  pub const NAME: &'static str = "translit";
}

impl Backend for TranslitBackend {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn capabilities(&self) -> Capabilities {
    Capabilities::TRANSLITERATE | Capabilities::SUBSTR
  }

  fn transliterate(&self, input: &[u8], from: &str, to: &str) -> Option<Vec<u8>> {
    let source = codec::lookup(from)?;
    let target = codec::lookup(to)?;
    let text = codec::decode_strict(source, input)?;
    codec::encode_with(target, &text, transliterate_char)
  }

  fn substr(&self, input: &[u8], start: usize, len: usize, charset: &str) -> Option<Vec<u8>> {
    let encoding = codec::lookup(charset)?;
    let text = codec::decode_strict(encoding, input)?;
    // Starting past the end is an error rather than an empty slice.
    if start > text.chars().count() {
      return None;
    }
    codec::encode_strict(encoding, recode::char_range(&text, start, len))
  }
}

/// ASCII approximation of a character, `?` when there is none.
fn transliterate_char(ch: char) -> &'static str {
  match ch {
    'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
    'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
    'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
    'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
    'Ď' | 'Đ' | 'Ð' => "D",
    'ď' | 'đ' | 'ð' => "d",
    'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
    'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
    'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
    'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
    'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
    'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
    'Ł' | 'Ľ' | 'Ĺ' | 'Ļ' => "L",
    'ł' | 'ľ' | 'ĺ' | 'ļ' => "l",
    'Ñ' | 'Ń' | 'Ň' | 'Ņ' => "N",
    'ñ' | 'ń' | 'ň' | 'ņ' => "n",
    'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "O",
    'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
    'Ŕ' | 'Ř' => "R",
    'ŕ' | 'ř' => "r",
    'Ś' | 'Ş' | 'Š' | 'Ș' => "S",
    'ś' | 'ş' | 'š' | 'ș' => "s",
    'Ţ' | 'Ť' | 'Ț' => "T",
    'ţ' | 'ť' | 'ț' => "t",
    'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
    'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
    'Ý' | 'Ÿ' => "Y",
    'ý' | 'ÿ' => "y",
    'Ź' | 'Ż' | 'Ž' => "Z",
    'ź' | 'ż' | 'ž' => "z",
    'Æ' => "AE",
    'æ' => "ae",
    'Œ' => "OE",
    'œ' => "oe",
    'ß' => "ss",
    'Þ' => "TH",
    'þ' => "th",
    'ﬁ' => "fi",
    'ﬂ' => "fl",
    '‘' | '’' | '‚' | '′' => "'",
    '“' | '”' | '„' | '″' | '«' | '»' => "\"",
    '‹' => "<",
    '›' => ">",
    '‐' | '‑' | '‒' | '–' | '—' | '−' => "-",
    '…' => "...",
    '•' | '·' => "*",
    '€' => "EUR",
    '£' => "GBP",
    '¥' => "JPY",
    '©' => "(C)",
    '®' => "(R)",
    '™' => "(TM)",
    '×' => "x",
    '÷' => "/",
    '½' => "1/2",
    '¼' => "1/4",
    '¾' => "3/4",
    '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' | '\u{202F}' => " ",
    '\u{200B}' | '\u{FEFF}' | '\u{00AD}' => "",
    _ => "?",
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn approximates_unmappable() {
    let out = TranslitBackend.transliterate("“Ærø” – 5€".as_bytes(), "utf-8", "us-ascii");
    // us-ascii is windows-1252 in WHATWG terms, which has curly quotes,
    // the en dash and the euro sign.
    assert_eq!(out, Some(b"\x93\xC6r\xF8\x94 \x96 5\x80".to_vec()));

    let out = TranslitBackend.transliterate("“Ærø” – 5€ 日".as_bytes(), "utf-8", "iso-8859-2");
    assert_eq!(out, Some(b"\"AEro\" - 5EUR ?".to_vec()));
  }

  #[test]
  fn trailing_non_ascii_character_survives() {
    let out = TranslitBackend.transliterate("café".as_bytes(), "utf-8", "iso-8859-15");
    assert_eq!(out, Some(b"caf\xE9".to_vec()));
  }

  #[test]
  fn malformed_input_fails() {
    assert_eq!(
      TranslitBackend.transliterate(b"caf\xE9", "utf-8", "iso-8859-15"),
      None
    );
    assert_eq!(TranslitBackend.substr(b"caf\xE9", 0, 2, "utf-8"), None);
  }

  #[test]
  fn unknown_charset_fails() {
    assert_eq!(TranslitBackend.transliterate(b"abc", "x-unknown", "utf-8"), None);
  }

  #[test]
  fn substring_by_character() {
    assert_eq!(
      TranslitBackend.substr("日本語テキスト".as_bytes(), 2, 3, "utf-8"),
      Some("語テキ".as_bytes().to_vec())
    );
    assert_eq!(TranslitBackend.substr(b"abc", 3, 1, "utf-8"), Some(Vec::new()));
    assert_eq!(TranslitBackend.substr(b"abc", 4, 1, "utf-8"), None);
  }
}
