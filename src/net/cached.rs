use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::core::Result;
use crate::net::mapping::RackMapping;

/// Memoizing wrapper around another [`RackMapping`].
///
/// Every rack returned by the inner mapping is remembered, so repeated
/// lookups for the same host skip the inner resolver entirely. The reload
/// hooks invalidate the memo (wholesale or per name) and then forward to the
/// inner mapping so a wrapped resolver can refresh its own state too.
///
/// Wrapping [`StaticMapping`](crate::net::StaticMapping) is mostly useful to
/// exercise the wrapper itself; the static table is already in memory.
pub struct CachedMapping<R: RackMapping> {
    inner: R,
    cache: RwLock<HashMap<String, String>>,
}

impl<R: RackMapping> CachedMapping<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped mapping.
    pub fn raw_mapping(&self) -> &R {
        &self.inner
    }

    /// Number of memoized entries.
    pub fn cached_count(&self) -> Result<usize> {
        Ok(self.cache.read()?.len())
    }
}

impl<R: RackMapping> RackMapping for CachedMapping<R> {
    fn resolve(&self, names: &[String]) -> Result<Vec<String>> {
        let misses: Vec<String> = {
            let cache = self.cache.read()?;
            names
                .iter()
                .filter(|name| !cache.contains_key(*name))
                .cloned()
                .collect()
        };

        if !misses.is_empty() {
            debug!("Resolving {} uncached names", misses.len());
            let racks = self.inner.resolve(&misses)?;
            let mut cache = self.cache.write()?;
            for (name, rack) in misses.into_iter().zip(racks) {
                cache.insert(name, rack);
            }
        }

        let mut racks = Vec::with_capacity(names.len());
        {
            let cache = self.cache.read()?;
            for name in names {
                racks.push(cache.get(name).cloned());
            }
        }

        let mut out = Vec::with_capacity(names.len());
        for (name, cached) in names.iter().zip(racks) {
            match cached {
                Some(rack) => out.push(rack),
                // A concurrent reload dropped the entry between the fill and
                // the read; ask the inner mapping again.
                None => {
                    let mut fresh = self.inner.resolve(std::slice::from_ref(name))?;
                    out.push(fresh.remove(0));
                }
            }
        }

        Ok(out)
    }

    fn reload_cached_mappings(&self) -> Result<()> {
        {
            let mut cache = self.cache.write()?;
            debug!("Dropping {} memoized entries", cache.len());
            cache.clear();
        }
        self.inner.reload_cached_mappings()
    }

    fn reload_cached_mappings_for(&self, names: &[String]) -> Result<()> {
        {
            let mut cache = self.cache.write()?;
            for name in names {
                cache.remove(name);
            }
        }
        self.inner.reload_cached_mappings_for(names)
    }
}
