use thiserror::Error;

/// Errors surfaced by the text core.
///
/// Conversion and text shaping never fail, they hand back their input
/// instead. Only caller mistakes and broken configuration end up here.
#[derive(Error, Debug)]
pub enum Error {
  /// A wrap width of zero can never make progress
  #[error("wrap width must be at least one character")]
  InvalidWidth,

  /// The default charset was set to an empty name
  #[error("charset name must not be empty")]
  EmptyCharset,

  /// A match pattern is not valid UTF-8 or does not compile
  #[error("invalid pattern `{pattern}`: {reason}")]
  Pattern { pattern: String, reason: String },

  /// Configuration could not be parsed
  #[error("failed to parse configuration: {0}")]
  Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
