use std::{
  fmt,
  sync::Arc,
};

use crate::{
  Config,
  Error,
  Registry,
  Result,
  cache::{
    CaseCache,
    MemoCache,
    NoCache,
  },
  charset,
  recode,
};

/// Everything the text operations need to know about their environment: the
/// default charset, the installed backends and the case memo caches.
///
/// Build one at startup and share it (`Arc<TextContext>`) between threads.
/// Changing the default charset needs exclusive access, so it cannot race
/// with readers.
pub struct TextContext {
  default_charset: String,
  registry: Arc<Registry>,
  recode_threshold: usize,
  pub(crate) lowers: Arc<dyn CaseCache>,
  pub(crate) uppers: Arc<dyn CaseCache>,
}

impl TextContext {
  /// A UTF-8 context using every compiled-in backend.
  pub fn new() -> Self {
    Self::with_registry(Registry::detect())
  }

  pub fn with_registry(registry: Registry) -> Self {
    Self {
      default_charset: charset::UTF_8.to_string(),
      registry: Arc::new(registry),
      recode_threshold: recode::RECODE_THRESHOLD,
      lowers: Arc::new(MemoCache::default()),
      uppers: Arc::new(MemoCache::default()),
    }
  }

  pub fn from_config(config: &Config) -> Result<Self> {
    let registry = match &config.backends {
      None => Registry::detect(),
      Some(names) => Registry::new(
        names
          .iter()
          .filter_map(|name| {
            let backend = Registry::builtin(name);
            if backend.is_none() {
              tracing::warn!("ignoring unknown text backend '{name}'");
            }
            backend
          })
          .collect(),
      ),
    };

    let mut context = Self::with_registry(registry);
    context.set_default_charset(&config.default_charset)?;
    context.recode_threshold = config.recode_threshold;
    if config.case_cache.enabled {
      context.lowers = Arc::new(MemoCache::new(config.case_cache.capacity));
      context.uppers = Arc::new(MemoCache::new(config.case_cache.capacity));
    } else {
      context.lowers = Arc::new(NoCache);
      context.uppers = Arc::new(NoCache);
    }
    Ok(context)
  }

  /// Replaces the memo caches used by locale independent casing.
  pub fn with_case_caches(mut self, lowers: Arc<dyn CaseCache>, uppers: Arc<dyn CaseCache>) -> Self {
    self.lowers = lowers;
    self.uppers = uppers;
    self
  }

  /// Sets the charset used when an operation is not given one.
  pub fn set_default_charset(&mut self, charset: &str) -> Result<()> {
    let charset = charset.trim();
    if charset.is_empty() {
      return Err(Error::EmptyCharset);
    }
    self.default_charset = charset.to_string();
    Ok(())
  }

  pub fn default_charset(&self) -> &str {
    &self.default_charset
  }

  pub fn registry(&self) -> &Registry {
    &self.registry
  }

  pub fn recode_threshold(&self) -> usize {
    self.recode_threshold
  }

  pub(crate) fn charset_or_default<'a>(&'a self, charset: Option<&'a str>) -> &'a str {
    charset.unwrap_or(&self.default_charset)
  }
}

impl Default for TextContext {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for TextContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TextContext")
      .field("default_charset", &self.default_charset)
      .field("registry", &self.registry)
      .field("recode_threshold", &self.recode_threshold)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn defaults_to_utf8() {
    let context = TextContext::new();
    assert_eq!(context.default_charset(), "UTF-8");
    assert_eq!(context.charset_or_default(None), "UTF-8");
    assert_eq!(context.charset_or_default(Some("koi8-r")), "koi8-r");
  }

  #[test]
  fn empty_default_is_rejected() {
    let mut context = TextContext::new();
    assert!(matches!(context.set_default_charset("  "), Err(Error::EmptyCharset)));
    assert_eq!(context.default_charset(), "UTF-8");
    context.set_default_charset("ISO-8859-1").unwrap();
    assert_eq!(context.default_charset(), "ISO-8859-1");
  }

  #[test]
  fn config_selects_backends() {
    let config = Config {
      default_charset: "ISO-8859-1".to_string(),
      backends: Some(vec!["imap".to_string(), "no-such-backend".to_string()]),
      ..Config::default()
    };
    let context = TextContext::from_config(&config).unwrap();
    assert_eq!(context.default_charset(), "ISO-8859-1");
    assert_eq!(context.registry().backends().len(), usize::from(cfg!(feature = "imap")));
    assert!(!context.registry().is_available("no-such-backend"));
  }

  #[test]
  fn config_with_empty_charset_fails() {
    let config = Config {
      default_charset: String::new(),
      ..Config::default()
    };
    assert!(TextContext::from_config(&config).is_err());
  }

  #[test]
  fn context_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextContext>();
  }
}
