//! Optional text backends.
//!
//! A backend is anything that can do some charset aware text work. Each one
//! advertises what it can do through [`Capabilities`]; every primitive has a
//! default implementation returning `None`, which callers read as "not
//! applicable here, try the next backend". Backends are ranked by their
//! position in a [`Registry`](crate::Registry).

use std::fmt;

use bitflags::bitflags;

#[cfg(any(feature = "translit", feature = "multibyte"))]
mod codec;
#[cfg(feature = "imap")]
mod imap;
#[cfg(feature = "multibyte")]
mod multibyte;
#[cfg(feature = "translit")]
mod translit;

#[cfg(feature = "imap")]
pub use imap::ImapUtf7Backend;
#[cfg(feature = "multibyte")]
pub use multibyte::MultibyteBackend;
#[cfg(feature = "translit")]
pub use translit::TranslitBackend;

bitflags! {
  /// What a backend is able to do.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct Capabilities: u16 {
    /// Conversion that approximates characters missing from the target.
    const TRANSLITERATE = 1 << 0;
    /// General charset conversion.
    const CONVERT       = 1 << 1;
    /// Latin-1/US-ASCII <-> IMAP modified UTF-7.
    const MAIL          = 1 << 2;
    const LENGTH        = 1 << 3;
    const SUBSTR        = 1 << 4;
    const SEARCH        = 1 << 5;
    const CASE          = 1 << 6;
    const CLASSIFY      = 1 << 7;
  }
}

impl Capabilities {
  /// Conversion between arbitrary charsets. [`MAIL`](Self::MAIL) only covers
  /// one fixed pair and is not part of it.
  pub const CONVERSION: Self = Self::TRANSLITERATE.union(Self::CONVERT);
}

/// A charset aware text primitive provider.
///
/// Charset names handed to a backend are already normalized. Implementations
/// must not panic on malformed input; they return `None` instead.
pub trait Backend: Send + Sync {
  /// Identifier used for availability queries and configuration.
  fn name(&self) -> &'static str;

  fn capabilities(&self) -> Capabilities;

  /// Converts with best-effort substitution of unmappable characters.
  fn transliterate(&self, _input: &[u8], _from: &str, _to: &str) -> Option<Vec<u8>> {
    None
  }

  fn convert(&self, _input: &[u8], _from: &str, _to: &str) -> Option<Vec<u8>> {
    None
  }

  /// Mail specific conversion, see [`Capabilities::MAIL`].
  fn mail_convert(&self, _input: &[u8], _from: &str, _to: &str) -> Option<Vec<u8>> {
    None
  }

  /// Character count of `input`.
  fn length(&self, _input: &[u8], _charset: &str) -> Option<usize> {
    None
  }

  /// `len` characters of `input` starting at character `start`.
  fn substr(&self, _input: &[u8], _start: usize, _len: usize, _charset: &str) -> Option<Vec<u8>> {
    None
  }

  /// Character index of the first `needle` at or after character `offset`.
  ///
  /// The outer `None` means the search itself failed, the inner one that the
  /// needle does not occur.
  fn pos(
    &self,
    _haystack: &[u8],
    _needle: &[u8],
    _offset: usize,
    _charset: &str,
  ) -> Option<Option<usize>> {
    None
  }

  fn lower(&self, _input: &[u8], _charset: &str) -> Option<Vec<u8>> {
    None
  }

  fn upper(&self, _input: &[u8], _charset: &str) -> Option<Vec<u8>> {
    None
  }

  /// True if `input` holds no non-alphabetic character.
  fn is_alpha(&self, _input: &[u8], _charset: &str) -> Option<bool> {
    None
  }
}

impl fmt::Debug for dyn Backend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Backend")
      .field("name", &self.name())
      .field("capabilities", &self.capabilities())
      .finish()
  }
}
