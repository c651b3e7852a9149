//! Charset safe text handling.
//!
//! Every operation lives on [`TextContext`], which carries the default
//! charset, the ranked [`Registry`] of optional backends and the case memo
//! caches. Text is handled as raw bytes in a named charset; when no backend
//! can help, operations fall back to byte oriented behavior instead of
//! failing.

pub mod backend;
pub mod cache;
pub mod charset;
mod config;
mod context;
mod convert;
mod error;
pub mod recode;
mod registry;
mod value;

mod case;
mod classify;
mod pattern;
mod position;
mod wrap;

pub use backend::{
  Backend,
  Capabilities,
};
pub use cache::{
  CaseCache,
  MemoCache,
  NoCache,
};
pub use charset::normalize;
pub use config::{
  CaseCacheConfig,
  Config,
};
pub use context::TextContext;
pub use error::{
  Error,
  Result,
};
pub use position::PadMode;
pub use registry::Registry;
pub use value::Value;
pub use wrap::{
  ParagraphWrap,
  WordWrap,
};
