use regex::bytes::Regex;

use crate::{
  Error,
  Result,
  TextContext,
  charset::UTF_8,
};

impl TextContext {
  /// Runs `patterns` against `text` in order and returns the captures of
  /// the first one that matches: the whole match first, then every group.
  /// Groups that took no part in the match are empty, trailing ones are left
  /// out. No match at all gives an empty vector.
  ///
  /// With a `charset`, patterns, text and captures are all in that charset.
  pub fn regex_match<P: AsRef<[u8]>>(
    &self,
    text: &[u8],
    patterns: &[P],
    charset: Option<&str>,
  ) -> Result<Vec<Vec<u8>>> {
    let text = match charset {
      Some(charset) => self.convert(text, charset, UTF_8),
      None => text.into(),
    };

    for pattern in patterns {
      let regex = self.compile(pattern.as_ref(), charset)?;
      let Some(captures) = regex.captures(&text) else {
        continue;
      };

      let last = (0..captures.len())
        .rev()
        .find(|&idx| captures.get(idx).is_some())
        .unwrap_or(0);
      return Ok(
        (0..=last)
          .map(|idx| {
            let group = captures.get(idx).map_or(&[][..], |m| m.as_bytes());
            match charset {
              Some(charset) => self.convert(group, UTF_8, charset).into_owned(),
              None => group.to_vec(),
            }
          })
          .collect(),
      );
    }
    Ok(Vec::new())
  }

  fn compile(&self, pattern: &[u8], charset: Option<&str>) -> Result<Regex> {
    let source = match charset {
      Some(charset) => self.convert(pattern, charset, UTF_8),
      None => pattern.into(),
    };
    let invalid = |reason: String| Error::Pattern {
      pattern: String::from_utf8_lossy(pattern).into_owned(),
      reason,
    };

    let source = std::str::from_utf8(&source).map_err(|err| invalid(err.to_string()))?;
    Regex::new(source).map_err(|err| invalid(err.to_string()))
  }
}
