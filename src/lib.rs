// ============================================================================
// Rackmap Library
// ============================================================================

//! Simulated rack topology for cluster test environments.
//!
//! Maps host names to logical rack identifiers so placement and replication
//! code can reason about fault-domain locality without real network topology
//! detection. The table is in-memory only; hosts that were never registered
//! resolve to [`DEFAULT_RACK`].
//!
//! # Examples
//!
//! ```
//! use rackmap::{RackMapping, StaticMapping, DEFAULT_RACK};
//!
//! # fn main() -> rackmap::Result<()> {
//! let mapping = StaticMapping::isolated();
//! mapping.add_entry("host1", "/rack1")?;
//! mapping.add_entry("host2", "/rack2")?;
//!
//! let racks = mapping.resolve(&[
//!     "host1".to_string(),
//!     "host2".to_string(),
//!     "host3".to_string(),
//! ])?;
//! assert_eq!(racks, vec![
//!     "/rack1".to_string(),
//!     "/rack2".to_string(),
//!     DEFAULT_RACK.to_string(),
//! ]);
//!
//! mapping.reset()?;
//! assert_eq!(
//!     mapping.resolve(&["host1".to_string()])?,
//!     vec![DEFAULT_RACK.to_string()],
//! );
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod net;

// Re-export main types for convenience
pub use crate::core::{Result, TopologyError};
pub use crate::net::{CachedMapping, DEFAULT_RACK, RackMapping, StaticMapping, TopologyConfig};
