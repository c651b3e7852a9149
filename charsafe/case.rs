use charsafe_core::case::{
  ascii_ucfirst,
  to_ascii_lower,
  to_ascii_upper,
};

use crate::{
  TextContext,
  backend::{
    Backend,
    Capabilities,
  },
  cache::CaseCache,
  charset::normalize,
};

#[derive(Debug, Clone, Copy)]
enum Case {
  Lower,
  Upper,
}

impl Case {
  fn ascii(self, input: &[u8]) -> Vec<u8> {
    match self {
      Case::Lower => to_ascii_lower(input),
      Case::Upper => to_ascii_upper(input),
    }
  }

  fn with_backend(self, backend: &dyn Backend, input: &[u8], charset: &str) -> Option<Vec<u8>> {
    match self {
      Case::Lower => backend.lower(input, charset),
      Case::Upper => backend.upper(input, charset),
    }
  }
}

impl TextContext {
  /// Lowercases `input`.
  ///
  /// With `locale_aware` the first case capable backend decides, in the
  /// given charset. Otherwise only ASCII letters change, which is what
  /// protocol keywords and identifiers want.
  pub fn lower(&self, input: &[u8], locale_aware: bool, charset: Option<&str>) -> Vec<u8> {
    if locale_aware {
      self.locale_case(Case::Lower, input, charset)
    } else {
      memoized(self.lowers.as_ref(), input, Case::Lower)
    }
  }

  /// Uppercases `input`, see [`lower`](Self::lower).
  pub fn upper(&self, input: &[u8], locale_aware: bool, charset: Option<&str>) -> Vec<u8> {
    if locale_aware {
      self.locale_case(Case::Upper, input, charset)
    } else {
      memoized(self.uppers.as_ref(), input, Case::Upper)
    }
  }

  /// Uppercases the first character of `input`.
  ///
  /// Locale aware mode only touches a first character that is alphabetic in
  /// `charset`; the other mode uppercases the first byte if it is an ASCII
  /// letter.
  pub fn ucfirst(&self, input: &[u8], locale_aware: bool, charset: Option<&str>) -> Vec<u8> {
    if !locale_aware {
      return ascii_ucfirst(input);
    }

    let first = self.substr(input, 0, Some(1), charset);
    if !self.is_alpha(&first, charset) {
      return input.to_vec();
    }
    let mut out = self.upper(&first, true, charset);
    out.extend(self.substr(input, 1, None, charset));
    out
  }

  fn locale_case(&self, case: Case, input: &[u8], charset: Option<&str>) -> Vec<u8> {
    let charset = normalize(self.charset_or_default(charset));
    for backend in self.registry().ranked(Capabilities::CASE) {
      match case.with_backend(backend, input, &charset) {
        Some(output) if !output.is_empty() => return output,
        _ => tracing::trace!(backend = backend.name(), charset = %charset, ?case, "case mapping failed"),
      }
    }
    case.ascii(input)
  }
}

fn memoized(cache: &dyn CaseCache, input: &[u8], case: Case) -> Vec<u8> {
  if let Some(hit) = cache.get(input) {
    return hit;
  }
  let output = case.ascii(input);
  cache.insert(input, &output);
  output
}
