//! Memoization of locale independent case transforms.

use std::collections::HashMap;

use parking_lot::RwLock;

/// A best-effort memo of `input -> result`.
///
/// A cache may forget or refuse entries at will; callers recompute on a miss,
/// so a cache can never change a result, only its cost.
pub trait CaseCache: Send + Sync {
  fn get(&self, input: &[u8]) -> Option<Vec<u8>>;

  fn insert(&self, input: &[u8], result: &[u8]);
}

/// Entries kept by default before a [`MemoCache`] stops growing.
pub const DEFAULT_CAPACITY: usize = 4096;

/// An in-memory cache that stops taking new entries once `capacity` is
/// reached.
#[derive(Debug)]
pub struct MemoCache {
  capacity: usize,
  entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoCache {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      entries: RwLock::new(HashMap::new()),
    }
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for MemoCache {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl CaseCache for MemoCache {
  fn get(&self, input: &[u8]) -> Option<Vec<u8>> {
    self.entries.read().get(input).cloned()
  }

  fn insert(&self, input: &[u8], result: &[u8]) {
    let mut entries = self.entries.write();
    if entries.len() < self.capacity {
      entries
        .entry(input.to_vec())
        .or_insert_with(|| result.to_vec());
    }
  }
}

/// Never remembers anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl CaseCache for NoCache {
  fn get(&self, _input: &[u8]) -> Option<Vec<u8>> {
    None
  }

  fn insert(&self, _input: &[u8], _result: &[u8]) {}
}
