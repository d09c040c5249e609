//! Built-in provider capability tables. Each submodule describes one
//! provider and contributes the entries it exports.

pub(crate) mod shm;
pub(crate) mod tcp;
pub(crate) mod udp;

use std::sync::LazyLock;

use crate::fabric::types::FabricInfo;

static ALL_ENTRIES: LazyLock<Vec<FabricInfo>> = LazyLock::new(|| {
    let mut entries = Vec::new();
    entries.extend(tcp::entries());
    entries.extend(udp::entries());
    entries.extend(shm::entries());
    entries
});

/// Every entry known to the registry, in registration order.
pub fn all_entries() -> &'static [FabricInfo] {
    &ALL_ENTRIES
}
