//! Fabric capability discovery: the vocabulary types, the discovery
//! seam, and the built-in registry behind it.

pub mod error;
pub mod providers;
pub mod registry;
pub mod render;
pub mod types;

pub use error::{FabricError, Result};
pub use registry::Registry;
pub use types::{AddrFormat, Caps, EpType, FabricInfo, Mode, Protocol, Version};

/// Library release version, reported by `--version`.
pub const LIB_VERSION: &str = "1.1.0";

/// Interface version callers negotiate against when querying.
pub const API_VERSION: Version = Version::new(1, 1);

/// A source of provider capability records.
///
/// `getinfo` returns every known entry that satisfies the hints record,
/// scoped to an optional node name and service port. A `None` hints
/// record accepts every entry. Failures carry a [`FabricError`] with a
/// negative code.
pub trait Discovery {
    fn getinfo(
        &self,
        version: Version,
        node: Option<&str>,
        service: Option<&str>,
        hints: Option<&FabricInfo>,
    ) -> Result<Vec<FabricInfo>>;
}
