use crate::core::Result;

/// A strategy for resolving host names to rack identifiers.
///
/// This trait allows writing placement code that is agnostic to how the
/// topology is discovered. `StaticMapping` (a shared in-memory table) serves
/// tests and simulations; script-driven or DNS-driven resolvers can implement
/// the same trait for real clusters. Callers typically hold an
/// `Arc<dyn RackMapping>` and get the same contract from every variant:
/// exactly one rack identifier per input name, in input order.
pub trait RackMapping: Send + Sync {
    /// Resolve each name to a rack identifier.
    ///
    /// The output has the same length and order as `names`. A name with no
    /// known rack resolves to [`DEFAULT_RACK`](crate::net::constants::DEFAULT_RACK)
    /// rather than being omitted.
    fn resolve(&self, names: &[String]) -> Result<Vec<String>>;

    /// Drop any cached resolution state so the next `resolve` re-reads the
    /// underlying source. Implementations that keep no cache do nothing.
    fn reload_cached_mappings(&self) -> Result<()>;

    /// Drop cached resolution state for the given names only.
    fn reload_cached_mappings_for(&self, names: &[String]) -> Result<()>;
}
