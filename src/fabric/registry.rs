//! The built-in discovery backend. Walks the provider tables and returns
//! every entry the hints record accepts.

use tracing::debug;

use crate::fabric::error::{FabricError, Result};
use crate::fabric::providers;
use crate::fabric::types::{EpType, FabricInfo, Version};
use crate::fabric::{API_VERSION, Discovery};

/// Capability registry backed by the built-in provider tables.
#[derive(Debug, Default)]
pub struct Registry;

impl Registry {
    pub fn new() -> Registry {
        Registry
    }
}

impl Discovery for Registry {
    fn getinfo(
        &self,
        version: Version,
        node: Option<&str>,
        service: Option<&str>,
        hints: Option<&FabricInfo>,
    ) -> Result<Vec<FabricInfo>> {
        if version > API_VERSION {
            return Err(FabricError::NotSupported(format!(
                "interface version {version}"
            )));
        }
        if node == Some("") {
            return Err(FabricError::InvalidArg("node name is empty".to_string()));
        }

        let port = match service {
            Some(service) => Some(service.parse::<u16>().map_err(|_| {
                FabricError::AddrNotAvail(format!("service '{service}' is not a valid port"))
            })?),
            None => None,
        };

        let src_addr = source_address(node, port);
        let entries: Vec<FabricInfo> = providers::all_entries()
            .iter()
            .filter(|entry| matches(hints, entry))
            .map(|entry| {
                let mut entry = entry.clone();
                entry.src_addr = src_addr.clone();
                entry
            })
            .collect();

        debug!(matched = entries.len(), hinted = hints.is_some(), "registry scan complete");
        Ok(entries)
    }
}

/// Whether `entry` satisfies every constraint the hints record sets. A
/// missing hints record accepts everything.
fn matches(hints: Option<&FabricInfo>, entry: &FabricInfo) -> bool {
    let Some(hints) = hints else {
        return true;
    };

    if !entry.caps.contains(hints.caps) {
        return false;
    }
    // The caller must accept every mode bit the entry requires.
    if !hints.mode.contains(entry.mode) {
        return false;
    }
    if hints.ep_attr.ep_type != EpType::Unspec && hints.ep_attr.ep_type != entry.ep_attr.ep_type {
        return false;
    }
    if !hints.addr_format.accepts(entry.addr_format) {
        return false;
    }
    if let Some(want) = hints.fabric_attr.prov_name.as_deref() {
        if entry.fabric_attr.prov_name.as_deref() != Some(want) {
            return false;
        }
    }

    true
}

fn source_address(node: Option<&str>, port: Option<u16>) -> Option<String> {
    match (node, port) {
        (Some(node), Some(port)) => Some(format!("{node}:{port}")),
        (Some(node), None) => Some(node.to_string()),
        (None, Some(port)) => Some(format!("*:{port}")),
        (None, None) => None,
    }
}
