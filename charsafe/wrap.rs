//! Greedy line breaking for plain text and mail bodies.

use charsafe_core::{
  chars::char_is_breaking_whitespace,
  line_ending::split_lines,
};

use crate::{
  Error,
  Result,
  TextContext,
  charset::UTF_8,
};

/// Options for [`TextContext::wordwrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWrap<'a> {
  /// Target line length in characters.
  pub width: usize,
  /// Inserted at every break, in the text's charset.
  pub break_seq: &'a [u8],
  /// Split words longer than `width`.
  pub cut: bool,
  /// RFC 822 header folding: prefer breaking after `;` or `:` and keep the
  /// whitespace that starts a continuation line.
  pub line_folding: bool,
  /// Charset of the text, the context default when absent.
  pub charset: Option<&'a str>,
}

impl Default for WordWrap<'_> {
  fn default() -> Self {
    Self {
      width: 75,
      break_seq: b"\n",
      cut: false,
      line_folding: false,
      charset: None,
    }
  }
}

/// Options for [`TextContext::wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphWrap<'a> {
  pub width: usize,
  /// Inserted at every break and between the input lines.
  pub break_seq: &'a [u8],
  pub charset: Option<&'a str>,
  /// Leave lines starting with `>` alone (RFC 2646 quoting).
  pub quote: bool,
}

impl Default for ParagraphWrap<'_> {
  fn default() -> Self {
    Self {
      width: 80,
      break_seq: b"\n",
      charset: None,
      quote: false,
    }
  }
}

/// Usenet signature separator, its trailing space is significant.
const SIGNATURE_SEPARATOR: &[u8] = b"-- ";

impl TextContext {
  /// Breaks `text` into lines of at most `options.width` characters.
  ///
  /// Existing line breaks are kept. Words are only split with `cut`, so a
  /// word longer than the width makes its line longer too.
  pub fn wordwrap(&self, text: &[u8], options: &WordWrap<'_>) -> Result<Vec<u8>> {
    if options.width == 0 {
      return Err(Error::InvalidWidth);
    }

    let charset = self.charset_or_default(options.charset);
    let decoded = self.convert(text, charset, UTF_8);
    let break_seq = self.convert(options.break_seq, charset, UTF_8);
    if let (Ok(decoded), Ok(break_seq)) = (std::str::from_utf8(&decoded), std::str::from_utf8(&break_seq)) {
      let wrapped = wrap_words(decoded, break_seq, options, Breaks::Unicode);
      return Ok(self.convert(wrapped.as_bytes(), UTF_8, charset).into_owned());
    }

    // Undecodable text: one byte per character, bytes kept as they are.
    tracing::debug!(charset, "wrapping undecodable text byte by byte");
    let widen = |bytes: &[u8]| bytes.iter().copied().map(char::from).collect::<String>();
    let wrapped = wrap_words(&widen(text), &widen(options.break_seq), options, Breaks::Ascii);
    Ok(wrapped.chars().filter_map(|ch| u8::try_from(ch).ok()).collect())
  }

  /// Wraps every line of a message body on its own.
  ///
  /// Trailing whitespace is dropped except on a signature separator line.
  /// In quote mode, lines starting with `>` pass through untouched.
  pub fn wrap(&self, text: &[u8], options: &ParagraphWrap<'_>) -> Result<Vec<u8>> {
    let line_options = WordWrap {
      width: options.width,
      break_seq: options.break_seq,
      cut: false,
      line_folding: false,
      charset: options.charset,
    };

    let mut out = Vec::with_capacity(text.len());
    for (idx, line) in split_lines(text).enumerate() {
      if idx > 0 {
        out.extend_from_slice(options.break_seq);
      }
      if options.quote && line.starts_with(b">") {
        out.extend_from_slice(line);
        continue;
      }
      let line = if line == SIGNATURE_SEPARATOR {
        line
      } else {
        trim_end(line)
      };
      out.extend(self.wordwrap(line, &line_options)?);
    }
    Ok(out)
  }
}

fn trim_end(line: &[u8]) -> &[u8] {
  let end = line
    .iter()
    .rposition(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\0' | b'\x0B'))
    .map_or(0, |idx| idx + 1);
  &line[..end]
}

/// Characters a line may be broken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Breaks {
  /// Unicode whitespace except the no-break family.
  Unicode,
  /// ASCII whitespace only, for text of unknown encoding.
  Ascii,
}

impl Breaks {
  fn at(self, ch: char) -> bool {
    match self {
      Self::Unicode => char_is_breaking_whitespace(ch),
      Self::Ascii => ch.is_ascii() && char_is_breaking_whitespace(ch),
    }
  }
}

/// The wrapping loop proper. Every iteration consumes at least one
/// character of `rest`.
fn wrap_words(text: &str, break_seq: &str, options: &WordWrap<'_>, breaks: Breaks) -> String {
  let WordWrap {
    width,
    cut,
    line_folding: folding,
    ..
  } = *options;
  let mut out = String::with_capacity(text.len() + text.len() / width * break_seq.len());
  let mut rest = text;

  while let Some((width_end, _)) = rest.char_indices().nth(width) {
    let line_end = if cut {
      width_end
    } else {
      width_end + word_tail(&rest[width_end..], breaks)
    };
    let line = &rest[..line_end];

    // Existing breaks win.
    if let Some(lf) = line.find('\n') {
      out.push_str(&line[..=lf]);
      rest = &rest[lf + 1..];
      continue;
    }

    if folding {
      if let Some(at) = fold_point(line, breaks) {
        out.push_str(&line[..at]);
        out.push_str(break_seq);
        rest = &rest[at..];
        continue;
      }
    }

    match last_space_run(line, breaks) {
      Some((start, end)) if !folding => {
        out.push_str(&line[..start]);
        out.push_str(break_seq);
        rest = &rest[end..];
        continue;
      },
      Some((start, _)) if start > 0 => {
        out.push_str(&line[..start]);
        out.push_str(break_seq);
        rest = &rest[start..];
        continue;
      },
      _ => {},
    }

    out.push_str(line);
    if cut {
      out.push_str(break_seq);
    }
    rest = &rest[line_end..];
  }

  out.push_str(rest);
  out
}

/// Length of the word fragment at the start of `rest` that is directly
/// followed by whitespace, zero if there is none.
fn word_tail(rest: &str, breaks: Breaks) -> usize {
  let mut chars = rest.char_indices();
  match chars.next() {
    None | Some((_, '\n')) => 0,
    Some(_) => chars.find(|&(_, ch)| breaks.at(ch)).map_or(0, |(idx, _)| idx),
  }
}

/// Byte offset just past the first `;` or `:` that is followed by
/// whitespace.
fn fold_point(line: &str, breaks: Breaks) -> Option<usize> {
  let mut chars = line.char_indices().peekable();
  while let Some((idx, ch)) = chars.next() {
    if matches!(ch, ';' | ':') && chars.peek().is_some_and(|&(_, next)| breaks.at(next)) {
      return Some(idx + ch.len_utf8());
    }
  }
  None
}

/// Byte range of the last whitespace run in `line`.
fn last_space_run(line: &str, breaks: Breaks) -> Option<(usize, usize)> {
  let (last, ch) = line.char_indices().rfind(|&(_, ch)| breaks.at(ch))?;
  let end = last + ch.len_utf8();
  let start = line[..last]
    .char_indices()
    .rev()
    .take_while(|&(_, ch)| breaks.at(ch))
    .last()
    .map_or(last, |(idx, _)| idx);
  Some((start, end))
}
