/// Rack identifier returned for every host that has no registered mapping.
///
/// A topology where every host resolves to this value is effectively a
/// single-rack cluster.
pub const DEFAULT_RACK: &str = "/default-rack";
