//! Character level building blocks shared by the `charsafe` text core.
//!
//! Nothing in here knows about charsets: functions either take decoded
//! `char`s/`str`s or operate on bytes with plain ASCII semantics.

pub mod case;
pub mod chars;
pub mod line_ending;
