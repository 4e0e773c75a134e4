use log::debug;
use serde::Deserialize;

use crate::core::{Result, TopologyError};
use crate::net::static_mapping::StaticMapping;

/// Declarative topology for a simulated cluster.
///
/// `node_mapping` entries use the `host=/rack` form and are registered into a
/// [`StaticMapping`] with [`apply_to`](TopologyConfig::apply_to). The optional
/// script name is carried for parity with script-driven resolvers: its mere
/// presence signals a multi-rack setup to the surrounding system, but the
/// script itself is never executed here.
///
/// # Examples
///
/// ```
/// use rackmap::{RackMapping, StaticMapping, TopologyConfig};
///
/// # fn main() -> rackmap::Result<()> {
/// let config = TopologyConfig::from_json(
///     r#"{ "node_mapping": ["host1=/rack1", "host2=/rack2"] }"#,
/// )?;
///
/// let mapping = StaticMapping::isolated();
/// config.apply_to(&mapping)?;
///
/// assert_eq!(mapping.resolve(&["host1".to_string()])?, vec!["/rack1".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopologyConfig {
    /// `host=/rack` pairs registered when the configuration is applied.
    #[serde(default)]
    pub node_mapping: Vec<String>,

    /// Name of a topology script. Never executed; presence alone matters.
    #[serde(default)]
    pub script_file_name: Option<String>,
}

impl TopologyConfig {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TopologyError::ConfigError(e.to_string()))
    }

    /// Split the raw `node_mapping` entries into `(host, rack)` pairs.
    ///
    /// An entry without a `=` separator, or with an empty host or rack side,
    /// is a configuration error.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(self.node_mapping.len());
        for raw in &self.node_mapping {
            let (host, rack) = raw.split_once('=').ok_or_else(|| {
                TopologyError::ConfigError(format!(
                    "node mapping '{}' is not of the form host=/rack",
                    raw
                ))
            })?;
            let (host, rack) = (host.trim(), rack.trim());
            if host.is_empty() || rack.is_empty() {
                return Err(TopologyError::ConfigError(format!(
                    "node mapping '{}' has an empty host or rack",
                    raw
                )));
            }
            pairs.push((host.to_string(), rack.to_string()));
        }
        Ok(pairs)
    }

    /// Register every configured node with the given mapping.
    pub fn apply_to(&self, mapping: &StaticMapping) -> Result<()> {
        let entries = self.entries()?;
        debug!("Applying {} configured node mappings", entries.len());
        for (host, rack) in entries {
            mapping.add_entry(&host, &rack)?;
        }
        Ok(())
    }
}
