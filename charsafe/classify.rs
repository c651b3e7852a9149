use charsafe_core::chars::bytes_are_alpha;

use crate::{
  TextContext,
  backend::Capabilities,
  charset::normalize,
};

impl TextContext {
  /// Whether `input` consists of alphabetic characters only.
  ///
  /// Without a classifying backend only ASCII letters count, and empty input
  /// is not alphabetic.
  pub fn is_alpha(&self, input: &[u8], charset: Option<&str>) -> bool {
    let charset = normalize(self.charset_or_default(charset));
    for backend in self.registry().ranked(Capabilities::CLASSIFY) {
      match backend.is_alpha(input, &charset) {
        Some(alpha) => return alpha,
        None => tracing::trace!(backend = backend.name(), charset = %charset, "classification failed"),
      }
    }
    bytes_are_alpha(input)
  }

  /// Alphabetic and unchanged by lowercasing.
  pub fn is_lower(&self, input: &[u8], charset: Option<&str>) -> bool {
    self.lower(input, true, charset) == input && self.is_alpha(input, charset)
  }

  /// Alphabetic and unchanged by uppercasing.
  pub fn is_upper(&self, input: &[u8], charset: Option<&str>) -> bool {
    self.upper(input, true, charset) == input && self.is_alpha(input, charset)
  }
}
