//! End to end behavior of the text operations.
//! Run with: cargo test -p charsafe --test text

use charsafe::{
  Config,
  PadMode,
  ParagraphWrap,
  Registry,
  TextContext,
  WordWrap,
};

const ASCII_COMPATIBLE: &[&str] = &[
  "UTF-8",
  "utf8",
  "ISO-8859-1",
  "US-ASCII",
  "ISO-8859-2",
  "ISO-8859-15",
  "windows-1252",
  "KOI8-R",
];

fn wordwrap(context: &TextContext, text: &str, width: usize) -> String {
  let options = WordWrap {
    width,
    ..WordWrap::default()
  };
  String::from_utf8(context.wordwrap(text.as_bytes(), &options).unwrap()).unwrap()
}

#[test]
fn wraps_at_word_boundaries() {
  let context = TextContext::new();
  assert_eq!(wordwrap(&context, "The quick brown fox", 10), "The quick\nbrown fox");
}

#[test]
fn pads_each_side() {
  let context = TextContext::new();
  assert_eq!(context.pad(b"ab", 5, b"-", PadMode::Right, None).as_ref(), b"ab---");
  assert_eq!(context.pad(b"ab", 5, b"-", PadMode::Both, None).as_ref(), b"-ab--");
}

#[test]
fn classifies_alphabetic_text() {
  for context in [TextContext::new(), TextContext::with_registry(Registry::empty())] {
    assert!(context.is_alpha(b"abc", None));
    assert!(!context.is_alpha(b"ab1", None));
  }
}

#[test]
fn keeps_signature_and_quotes() {
  let context = TextContext::new();
  let body = b"> a quoted line that runs well past the width  \n\
               plain text that is long enough to be wrapped\n\
               -- \n\
               Signature";
  let options = ParagraphWrap {
    width: 20,
    quote: true,
    ..ParagraphWrap::default()
  };
  let wrapped = String::from_utf8(context.wrap(body, &options).unwrap()).unwrap();
  let lines: Vec<&str> = wrapped.split('\n').collect();
  assert_eq!(lines[0], "> a quoted line that runs well past the width  ");
  assert!(lines.contains(&"-- "));
  assert_eq!(lines.last(), Some(&"Signature"));
  assert!(lines[1..].iter().all(|line| line.chars().count() <= 20));
}

#[test]
fn default_charset_drives_operations() {
  let config = Config::from_toml(r#"default-charset = "ISO-8859-1""#).unwrap();
  let context = TextContext::from_config(&config).unwrap();
  let text = b"caf\xE9 cr\xE8me br\xFBl\xE9e";

  assert_eq!(context.length(text, None), 17);
  assert_eq!(context.substr(text, 5, Some(5), None), b"cr\xE8me");
  assert_eq!(context.pos(text, b"br", 0, None), Some(11));
  assert_eq!(
    context.wordwrap(text, &WordWrap {
      width: 10,
      ..WordWrap::default()
    })
    .unwrap(),
    b"caf\xE9\ncr\xE8me\nbr\xFBl\xE9e"
  );
  assert_eq!(context.convert_to_default("café".as_bytes(), "UTF-8").as_ref(), b"caf\xE9");
}

#[cfg(feature = "imap")]
#[test]
fn mailbox_names_round_trip() {
  let context = TextContext::new();
  let name = b"Ges\xE4ndte & Entw\xFCrfe";
  let encoded = context.convert(name, "ISO-8859-1", "UTF7-IMAP").into_owned();
  assert_eq!(encoded, b"Ges&AOQ-ndte &- Entw&APw-rfe");
  assert_eq!(context.convert(&encoded, "UTF7-IMAP", "ISO-8859-1").as_ref(), name);
}

#[test]
fn concurrent_use_of_one_context() {
  let context = std::sync::Arc::new(TextContext::new());
  let handles: Vec<_> = (0..4)
    .map(|idx| {
      let context = context.clone();
      std::thread::spawn(move || {
        let word = format!("Word{idx}");
        for _ in 0..100 {
          assert_eq!(
            context.lower(word.as_bytes(), false, None),
            word.to_ascii_lowercase().as_bytes()
          );
          assert!(context.registry().is_available("multibyte") == cfg!(feature = "multibyte"));
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }
}

fn pick(charset: u8) -> &'static str {
  ASCII_COMPATIBLE[usize::from(charset) % ASCII_COMPATIBLE.len()]
}

fn to_words(raw: Vec<String>, width: usize) -> Vec<String> {
  raw
    .into_iter()
    .map(|word| {
      word
        .chars()
        .take(width)
        .map(|ch| char::from(b'a' + (u32::from(ch) % 26) as u8))
        .collect::<String>()
    })
    .filter(|word| !word.is_empty())
    .collect()
}

quickcheck::quickcheck! {
    fn ascii_conversion_is_a_noop(bytes: Vec<u8>, from: u8, to: u8) -> bool {
        let context = TextContext::new();
        let ascii: Vec<u8> = bytes.iter().map(|b| b & 0x7F).collect();
        context.convert(&ascii, pick(from), pick(to)).as_ref() == ascii.as_slice()
    }

    fn latin1_round_trips(text: String) -> bool {
        let context = TextContext::new();
        let text: String = text.chars().map(|ch| char::from((u32::from(ch) % 256) as u8)).collect();
        let latin1 = context.convert(text.as_bytes(), "UTF-8", "ISO-8859-1").into_owned();
        context.convert(&latin1, "ISO-8859-1", "UTF-8").as_ref() == text.as_bytes()
    }

    fn utf8_length_bounded_by_bytes(text: String) -> bool {
        let context = TextContext::new();
        let length = context.length(text.as_bytes(), Some("UTF-8"));
        length <= text.len() && (length == text.len()) == text.is_ascii()
    }

    fn right_pad_reaches_target(text: String, pad: String, target: u8) -> bool {
        if pad.is_empty() {
            return true;
        }
        let context = TextContext::new();
        let target = usize::from(target);
        let padded = context.pad(text.as_bytes(), target, pad.as_bytes(), PadMode::Right, None);
        let length = context.length(text.as_bytes(), None);
        context.length(&padded, None) == target.max(length)
    }

    fn wordwrap_keeps_words_and_widths(raw: Vec<String>, width: u8) -> bool {
        let context = TextContext::new();
        let width = 1 + usize::from(width % 20);
        let words = to_words(raw, width);
        let wrapped = wordwrap(&context, &words.join(" "), width);

        let kept = wrapped.split_whitespace().eq(words.iter().map(String::as_str));
        let lines: Vec<&str> = wrapped.split('\n').collect();
        let fitting = lines[..lines.len() - 1]
            .iter()
            .all(|line| line.chars().count() <= width);
        kept && fitting
    }

    fn quoted_lines_are_untouched(line: String, width: u8) -> bool {
        let context = TextContext::new();
        let line: String = line.chars().filter(|&ch| ch != '\n' && ch != '\r').collect();
        let quoted = format!(">{line}");
        let options = ParagraphWrap {
            width: 1 + usize::from(width % 20),
            quote: true,
            ..ParagraphWrap::default()
        };
        context.wrap(quoted.as_bytes(), &options).unwrap() == quoted.as_bytes()
    }
}
