//! Line splitting for message text.

/// Splits bytes on `\n` and `\r\n`.
///
/// Unlike [`str::lines`] a trailing line ending yields a final empty line, so
/// joining the pieces with a single break reproduces the line structure.
pub fn split_lines(bytes: &[u8]) -> SplitLines<'_> {
  SplitLines {
    rest: Some(bytes),
  }
}

#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
  rest: Option<&'a [u8]>,
}

impl<'a> Iterator for SplitLines<'a> {
  type Item = &'a [u8];

  fn next(&mut self) -> Option<&'a [u8]> {
    let rest = self.rest?;
    match rest.iter().position(|&b| b == b'\n') {
      Some(lf) => {
        self.rest = Some(&rest[lf + 1..]);
        let line = &rest[..lf];
        Some(line.strip_suffix(b"\r").unwrap_or(line))
      },
      None => {
        self.rest = None;
        Some(rest)
      },
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn split_mixed_endings() {
    let lines: Vec<&[u8]> = split_lines(b"one\r\ntwo\nthree").collect();
    assert_eq!(lines, vec![b"one".as_slice(), b"two".as_slice(), b"three".as_slice()]);

    let lines: Vec<&[u8]> = split_lines(b"trailing\n").collect();
    assert_eq!(lines, vec![b"trailing".as_slice(), b"".as_slice()]);

    let lines: Vec<&[u8]> = split_lines(b"").collect();
    assert_eq!(lines, vec![b"".as_slice()]);

    // A lone carriage return is not a line break.
    let lines: Vec<&[u8]> = split_lines(b"a\rb").collect();
    assert_eq!(lines, vec![b"a\rb".as_slice()]);
  }

  quickcheck::quickcheck! {
      fn split_then_join_restores_lf_text(text: String) -> bool {
          let text = text.replace('\r', "");
          let joined = split_lines(text.as_bytes()).collect::<Vec<_>>().join(&b'\n');
          joined == text.as_bytes()
      }
  }
}
