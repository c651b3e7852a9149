//! Ranked list of the backends available to a [`TextContext`](crate::TextContext).

use std::{
  collections::HashSet,
  fmt,
  sync::Arc,
};

use parking_lot::RwLock;

use crate::backend::{
  Backend,
  Capabilities,
};

pub struct Registry {
  backends: Vec<Arc<dyn Backend>>,
  // Backends never change once the registry exists. Only installed names
  // are remembered, unknown ones are cheap to reject again.
  available: RwLock<HashSet<String>>,
}

impl Registry {
  /// Builds a registry from backends in rank order, best first.
  pub fn new(backends: Vec<Arc<dyn Backend>>) -> Self {
    Self {
      backends,
      available: RwLock::new(HashSet::new()),
    }
  }

  /// A registry without any backend: every operation runs its byte oriented
  /// fallback.
  pub fn empty() -> Self {
    Self::new(Vec::new())
  }

  /// All backends compiled into this build, in their default rank.
  pub fn detect() -> Self {
    Self::new(
      Self::builtin_names()
        .iter()
        .filter_map(|name| Self::builtin(name))
        .collect(),
    )
  }

  /// Names of the compiled-in backends in default rank order.
  pub fn builtin_names() -> &'static [&'static str] {
    &["translit", "multibyte", "imap"]
  }

  /// Instantiates a compiled-in backend by name.
  pub fn builtin(name: &str) -> Option<Arc<dyn Backend>> {
    match name.to_ascii_lowercase().as_str() {
      #[cfg(feature = "translit")]
      "translit" => Some(Arc::new(crate::backend::TranslitBackend)),
      #[cfg(feature = "multibyte")]
      "multibyte" => Some(Arc::new(crate::backend::MultibyteBackend)),
      #[cfg(feature = "imap")]
      "imap" => Some(Arc::new(crate::backend::ImapUtf7Backend)),
      _ => None,
    }
  }

  /// Is a backend of this name installed? Unknown names are simply
  /// unavailable.
  pub fn is_available(&self, name: &str) -> bool {
    let key = name.to_ascii_lowercase();
    if self.available.read().contains(&key) {
      return true;
    }

    let available = self
      .backends
      .iter()
      .any(|backend| backend.name().eq_ignore_ascii_case(&key));
    tracing::debug!(backend = %key, available, "probed text backend");
    if available {
      self.available.write().insert(key);
    }
    available
  }

  /// Backends offering `capability`, best first.
  pub fn ranked(&self, capability: Capabilities) -> impl Iterator<Item = &dyn Backend> {
    self
      .backends
      .iter()
      .map(|backend| backend.as_ref())
      .filter(move |backend| backend.capabilities().intersects(capability))
  }

  /// Does any backend offer `capability`?
  pub fn supports(&self, capability: Capabilities) -> bool {
    self.ranked(capability).next().is_some()
  }

  pub fn backends(&self) -> &[Arc<dyn Backend>] {
    &self.backends
  }
}

impl Default for Registry {
  fn default() -> Self {
    Self::detect()
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("backends", &self.backends)
      .finish_non_exhaustive()
  }
}
