use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Result,
  cache,
  charset,
  recode,
};

/// Settings for building a [`TextContext`](crate::TextContext).
///
/// ```toml
/// default-charset = "ISO-8859-1"
/// backends = ["multibyte", "imap"]
///
/// [case-cache]
/// capacity = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
  /// Charset used by every operation called without one.
  pub default_charset: String,
  /// Backend names in rank order. Absent means every compiled-in backend.
  pub backends: Option<Vec<String>>,
  /// Inputs this large skip the Latin-1/UTF-8 recode fast path when a
  /// backend is installed.
  pub recode_threshold: usize,
  pub case_cache: CaseCacheConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_charset: charset::UTF_8.to_string(),
      backends: None,
      recode_threshold: recode::RECODE_THRESHOLD,
      case_cache: CaseCacheConfig::default(),
    }
  }
}

impl Config {
  pub fn from_toml(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CaseCacheConfig {
  pub enabled: bool,
  pub capacity: usize,
}

impl Default for CaseCacheConfig {
  fn default() -> Self {
    Self {
      enabled: true,
      capacity: cache::DEFAULT_CAPACITY,
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn empty_source_is_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
  }

  #[test]
  fn parses_all_keys() {
    let config = Config::from_toml(
      r#"
        default-charset = "ISO-8859-1"
        backends = ["multibyte", "imap"]
        recode-threshold = 1024

        [case-cache]
        enabled = false
      "#,
    )
    .unwrap();

    assert_eq!(config.default_charset, "ISO-8859-1");
    assert_eq!(
      config.backends,
      Some(vec!["multibyte".to_string(), "imap".to_string()])
    );
    assert_eq!(config.recode_threshold, 1024);
    assert!(!config.case_cache.enabled);
    assert_eq!(config.case_cache.capacity, cache::DEFAULT_CAPACITY);
  }

  #[test]
  fn malformed_source_is_an_error() {
    assert!(matches!(
      Config::from_toml("default-charset = 5"),
      Err(crate::Error::Config(_))
    ));
  }
}
