//! Charset conversion with an ordered fallback over the installed backends.

use std::borrow::Cow;

use crate::{
  TextContext,
  Value,
  backend::Capabilities,
  charset::{
    is_imap_utf7,
    is_latin1_or_ascii,
    is_utf8,
    normalize,
    same_charset,
  },
  recode,
};

impl TextContext {
  /// Converts `input` from one charset to another.
  ///
  /// Never fails: when no backend manages the conversion the input comes back
  /// unchanged. Converting between two names of the same charset borrows the
  /// input.
  pub fn convert<'a>(&self, input: &'a [u8], from: &str, to: &str) -> Cow<'a, [u8]> {
    if same_charset(from, to) {
      return Cow::Borrowed(input);
    }
    match self.convert_text(input, from, to) {
      Some(output) => Cow::Owned(output),
      None => Cow::Borrowed(input),
    }
  }

  /// [`convert`](Self::convert) with the default charset as target.
  pub fn convert_to_default<'a>(&self, input: &'a [u8], from: &str) -> Cow<'a, [u8]> {
    self.convert(input, from, self.default_charset())
  }

  /// Converts every piece of text in `value`, map keys included.
  pub fn convert_value(&self, value: Value, from: &str, to: &str) -> Value {
    if same_charset(from, to) {
      return value;
    }
    self.convert_value_inner(value, from, to)
  }

  fn convert_value_inner(&self, value: Value, from: &str, to: &str) -> Value {
    if value.is_numeric() {
      return value;
    }
    match value {
      Value::Text(text) => match self.convert_text(&text, from, to) {
        Some(output) => Value::Text(output),
        None => Value::Text(text),
      },
      Value::List(items) => Value::List(
        items
          .into_iter()
          .map(|item| self.convert_value_inner(item, from, to))
          .collect(),
      ),
      Value::Map(entries) => Value::Map(
        entries
          .into_iter()
          .map(|(key, item)| {
            let key = self.convert(&key, from, to).into_owned();
            (key, self.convert_value_inner(item, from, to))
          })
          .collect(),
      ),
      other => other,
    }
  }

  /// The fallback chain proper. `None` means nothing produced output.
  fn convert_text(&self, input: &[u8], from: &str, to: &str) -> Option<Vec<u8>> {
    let registry = self.registry();
    let from_legacy = is_latin1_or_ascii(from);
    let to_legacy = is_latin1_or_ascii(to);

    if input.len() < self.recode_threshold() || !registry.supports(Capabilities::CONVERSION) {
      if from_legacy && is_utf8(to) {
        return Some(recode::latin1_to_utf8(input));
      }
      if is_utf8(from) && to_legacy {
        return Some(recode::utf8_to_latin1(input));
      }
    }

    if !is_imap_utf7(from) && !is_imap_utf7(to) {
      for backend in registry.ranked(Capabilities::TRANSLITERATE) {
        match backend.transliterate(input, from, to) {
          Some(output) if !output.is_empty() => return Some(output),
          _ => tracing::trace!(backend = backend.name(), from, to, "transliteration failed"),
        }
      }
    }

    let source = normalize(from);
    let target = normalize(to);
    for backend in registry.ranked(Capabilities::CONVERT) {
      match backend.convert(input, &source, &target) {
        Some(output) if !output.is_empty() => return Some(output),
        _ => tracing::trace!(backend = backend.name(), from, to, "conversion failed"),
      }
    }

    if (from_legacy && is_imap_utf7(to)) || (is_imap_utf7(from) && to_legacy) {
      for backend in registry.ranked(Capabilities::MAIL) {
        match backend.mail_convert(input, from, to) {
          Some(output) if !output.is_empty() => return Some(output),
          _ => tracing::trace!(backend = backend.name(), from, to, "mail conversion failed"),
        }
      }
    }

    tracing::debug!(from, to, "no backend converted the text, keeping it as is");
    None
  }
}
