//! Benchmarks for line wrapping and conversion.
//!
//! Run with: `cargo bench -p charsafe --bench wrap`

use charsafe::{
  ParagraphWrap,
  TextContext,
  WordWrap,
};
use divan::{
  Bencher,
  black_box,
};

fn main() {
  divan::main();
}

const PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                         tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
                         veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
                         commodo consequat. ";

fn body(paragraphs: usize) -> String {
  let mut text = String::new();
  for _ in 0..paragraphs {
    text.push_str(&PARAGRAPH.repeat(4));
    text.push_str("\n> quoted reply line\n\n");
  }
  text.push_str("-- \nSignature");
  text
}

mod wordwrap {
  use super::*;

  #[divan::bench(args = [20, 75, 200])]
  fn width(bencher: Bencher, width: usize) {
    let context = TextContext::new();
    let text = PARAGRAPH.repeat(16);
    let options = WordWrap {
      width,
      ..WordWrap::default()
    };
    bencher.bench(|| context.wordwrap(black_box(text.as_bytes()), &options));
  }

  #[divan::bench]
  fn folding(bencher: Bencher) {
    let context = TextContext::new();
    let header = "Content-Type: multipart/alternative; boundary=\"=_abc\"; charset=utf-8; ".repeat(8);
    let options = WordWrap {
      width: 76,
      break_seq: b"\r\n",
      line_folding: true,
      ..WordWrap::default()
    };
    bencher.bench(|| context.wordwrap(black_box(header.as_bytes()), &options));
  }

  #[divan::bench]
  fn latin1(bencher: Bencher) {
    let context = TextContext::new();
    let text = context
      .convert(PARAGRAPH.repeat(16).as_bytes(), "UTF-8", "ISO-8859-1")
      .into_owned();
    let options = WordWrap {
      charset: Some("ISO-8859-1"),
      ..WordWrap::default()
    };
    bencher.bench(|| context.wordwrap(black_box(&text), &options));
  }
}

mod wrap {
  use super::*;

  #[divan::bench(args = [1, 10, 100])]
  fn message_body(bencher: Bencher, paragraphs: usize) {
    let context = TextContext::new();
    let text = body(paragraphs);
    let options = ParagraphWrap {
      quote: true,
      ..ParagraphWrap::default()
    };
    bencher.bench(|| context.wrap(black_box(text.as_bytes()), &options));
  }
}

mod convert {
  use super::*;

  #[divan::bench]
  fn recode_latin1(bencher: Bencher) {
    let context = TextContext::new();
    let text = "Grüße aus Köln, àéîõü ".repeat(256);
    bencher.bench(|| context.convert(black_box(text.as_bytes()), "UTF-8", "ISO-8859-1").into_owned());
  }

  #[cfg(feature = "translit")]
  #[divan::bench]
  fn transliterate(bencher: Bencher) {
    let context = TextContext::new();
    let text = "“Quoted” – 5€ ‘text’ ".repeat(256);
    bencher.bench(|| context.convert(black_box(text.as_bytes()), "UTF-8", "ISO-8859-2").into_owned());
  }
}
