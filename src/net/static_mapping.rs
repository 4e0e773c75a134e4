use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use log::debug;

use crate::core::{Result, TopologyError};
use crate::net::constants::DEFAULT_RACK;
use crate::net::mapping::RackMapping;

type RackTable = Arc<RwLock<HashMap<String, String>>>;

// One simulated cluster topology per process. Every handle created through
// `StaticMapping::shared()` reads and mutates this same table.
lazy_static! {
    static ref PROCESS_TABLE: RackTable = Arc::new(RwLock::new(HashMap::new()));
}

/// Static name-to-rack mapping used to simulate racks in tests.
///
/// Entries are added with [`add_entry`](StaticMapping::add_entry) and served
/// through [`RackMapping::resolve`]; hosts that were never added resolve to
/// [`DEFAULT_RACK`]. The table persists until [`reset`](StaticMapping::reset)
/// wipes it or the process exits. There is no eviction or capacity bound.
///
/// The table behind a handle is shared: clones of a handle, and all handles
/// from [`shared`](StaticMapping::shared), observe the same entries. Tests
/// that must not see each other's topology should use
/// [`isolated`](StaticMapping::isolated) instead.
///
/// # Examples
///
/// ```
/// use rackmap::{RackMapping, StaticMapping, DEFAULT_RACK};
///
/// # fn main() -> rackmap::Result<()> {
/// let mapping = StaticMapping::isolated();
/// mapping.add_entry("host1", "/rack1")?;
///
/// let racks = mapping.resolve(&["host1".to_string(), "host2".to_string()])?;
/// assert_eq!(racks, vec!["/rack1".to_string(), DEFAULT_RACK.to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StaticMapping {
    table: RackTable,
}

impl StaticMapping {
    /// Create a handle onto the process-wide table.
    ///
    /// This models one simulated cluster topology visible to all code in the
    /// process, so every `shared()` handle sees every other handle's entries.
    pub fn shared() -> Self {
        Self {
            table: Arc::clone(&PROCESS_TABLE),
        }
    }

    /// Create a mapping with its own private table.
    ///
    /// Useful in tests that would otherwise race on the process-wide table.
    pub fn isolated() -> Self {
        Self {
            table: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Map a node to a rack, overwriting any previous rack for that node.
    ///
    /// Empty identifiers are rejected; there is no other constraint on the
    /// values.
    pub fn add_entry(&self, name: &str, rack: &str) -> Result<()> {
        if name.is_empty() {
            return Err(TopologyError::InvalidIdentifier(
                "host name must not be empty".to_string(),
            ));
        }
        if rack.is_empty() {
            return Err(TopologyError::InvalidIdentifier(format!(
                "rack for host '{}' must not be empty",
                name
            )));
        }

        let mut table = self.table.write()?;
        debug!("Mapping node '{}' to rack '{}'", name, rack);
        table.insert(name.to_string(), rack.to_string());
        Ok(())
    }

    /// Clear every entry from the table.
    ///
    /// The clear is atomic: no concurrent `resolve` observes a half-cleared
    /// table. Until new entries are added, every subsequent lookup returns
    /// [`DEFAULT_RACK`].
    pub fn reset(&self) -> Result<()> {
        let mut table = self.table.write()?;
        debug!("Clearing {} topology entries", table.len());
        table.clear();
        Ok(())
    }

    /// Number of registered entries.
    pub fn entry_count(&self) -> Result<usize> {
        Ok(self.table.read()?.len())
    }
}

impl Default for StaticMapping {
    fn default() -> Self {
        Self::shared()
    }
}

impl RackMapping for StaticMapping {
    fn resolve(&self, names: &[String]) -> Result<Vec<String>> {
        let table = self.table.read()?;

        let mut racks = Vec::with_capacity(names.len());
        for name in names {
            match table.get(name) {
                Some(rack) => racks.push(rack.clone()),
                None => racks.push(DEFAULT_RACK.to_string()),
            }
        }

        Ok(racks)
    }

    fn reload_cached_mappings(&self) -> Result<()> {
        // Nothing to reload; all data already lives in memory.
        Ok(())
    }

    fn reload_cached_mappings_for(&self, _names: &[String]) -> Result<()> {
        // Nothing to reload; all data already lives in memory.
        Ok(())
    }
}
