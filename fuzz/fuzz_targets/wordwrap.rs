#![no_main]

use charsafe::{
  ParagraphWrap,
  TextContext,
  WordWrap,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let Some((&flags, text)) = data.split_first() else {
    return;
  };
  let context = TextContext::new();
  let width = usize::from(flags & 0x3F) + 1;
  let charset = if flags & 0x80 != 0 { "ISO-8859-1" } else { "UTF-8" };

  let options = WordWrap {
    width,
    cut: flags & 0x40 != 0,
    line_folding: flags & 0x01 != 0,
    charset: Some(charset),
    ..WordWrap::default()
  };
  let wrapped = context.wordwrap(text, &options).expect("width is never zero");
  if !options.cut && !options.line_folding && charset == "UTF-8" {
    if let Ok(text) = std::str::from_utf8(text) {
      let wrapped = String::from_utf8_lossy(&wrapped);
      assert!(wrapped.split_whitespace().eq(text.split_whitespace()));
    }
  }

  let paragraphs = ParagraphWrap {
    width,
    charset: Some(charset),
    quote: flags & 0x02 != 0,
    ..ParagraphWrap::default()
  };
  let _ = context.wrap(text, &paragraphs).expect("width is never zero");
});
