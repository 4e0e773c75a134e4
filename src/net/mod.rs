pub mod cached;
pub mod config;
pub mod constants;
pub mod mapping;
pub mod static_mapping;

pub use cached::CachedMapping;
pub use config::TopologyConfig;
pub use constants::DEFAULT_RACK;
pub use mapping::RackMapping;
pub use static_mapping::StaticMapping;
