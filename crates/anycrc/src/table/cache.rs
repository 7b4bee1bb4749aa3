//! Shared lookup-table cache.
//!
//! Tables depend only on `(width, poly, refin)`, so every parameter set that
//! agrees on those three fields shares one table regardless of name, `init`,
//! `xorout` or `refout`. Entries are built under the cache lock, which means
//! concurrent constructors for the same key observe exactly one build.

use alloc::sync::Arc;
use std::{
  collections::HashMap,
  sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use super::CrcTable;
use crate::ParameterSet;

/// Process-wide cache used by [`TableCrc::new`](super::TableCrc::new).
static GLOBAL: OnceLock<TableCache> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TableKey {
  width: u8,
  poly: u64,
  refin: bool,
}

impl TableKey {
  #[inline]
  const fn of(params: &ParameterSet) -> Self {
    Self {
      width: params.width(),
      poly: params.poly(),
      refin: params.refin(),
    }
  }
}

/// Counters describing cache activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
  /// Lookups satisfied by an existing table.
  pub hits: u64,
  /// Tables built.
  pub builds: u64,
  /// Tables currently held.
  pub entries: usize,
}

#[derive(Debug, Default)]
struct Inner {
  tables: HashMap<TableKey, Arc<CrcTable>>,
  hits: u64,
  builds: u64,
}

/// A thread-safe map from algorithm shape to its lookup table.
///
/// Most callers use [`TableCache::global`] implicitly through
/// [`TableCrc::new`](super::TableCrc::new). A private cache is useful when
/// table lifetime should be bounded, or in tests that count builds.
///
/// ```
/// use anycrc::{TableCache, TableCrc, catalog};
///
/// let cache = TableCache::new();
/// let a = TableCrc::with_cache(catalog::CRC_32_ISO_HDLC, &cache);
/// let b = TableCrc::with_cache(catalog::CRC_32_JAMCRC, &cache);
/// assert!(std::sync::Arc::ptr_eq(a.table(), b.table()));
/// assert_eq!(cache.stats().builds, 1);
/// ```
#[derive(Debug, Default)]
pub struct TableCache {
  inner: Mutex<Inner>,
}

impl TableCache {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// The process-wide cache.
  #[must_use]
  pub fn global() -> &'static Self {
    GLOBAL.get_or_init(Self::new)
  }

  /// Return the table for `params`, building it on first use.
  #[must_use]
  pub fn get_or_build(&self, params: &ParameterSet) -> Arc<CrcTable> {
    let key = TableKey::of(params);
    let mut inner = self.lock();

    if let Some(table) = inner.tables.get(&key) {
      let table = Arc::clone(table);
      inner.hits += 1;
      tracing::trace!(name = params.name(), "CRC lookup table cache hit");
      return table;
    }

    let table = Arc::new(CrcTable::build(params));
    inner.tables.insert(key, Arc::clone(&table));
    inner.builds += 1;
    tracing::debug!(
      name = params.name(),
      width = params.width(),
      poly = params.poly(),
      refin = params.refin(),
      "built CRC lookup table"
    );
    table
  }

  /// Snapshot of the cache counters.
  #[must_use]
  pub fn stats(&self) -> CacheStats {
    let inner = self.lock();
    CacheStats {
      hits: inner.hits,
      builds: inner.builds,
      entries: inner.tables.len(),
    }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.lock().tables.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drop every cached table. Engines already holding a table keep it alive.
  pub fn clear(&self) {
    self.lock().tables.clear();
  }

  // Tables are inserted fully built, so a poisoned lock still guards a
  // consistent map.
  fn lock(&self) -> MutexGuard<'_, Inner> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
