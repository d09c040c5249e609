//! Builds the discovery request from parsed command line options.

use tracing::debug;

use crate::cli::Cli;
use crate::fabric::{AddrFormat, Caps, EpType, FabricInfo, Mode};
use crate::tokens::parse_tokens;

/// A discovery request: optional node/service scope plus the hints
/// record assembled from the filter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub node: Option<String>,
    pub service: Option<String>,
    pub hints: Option<FabricInfo>,
}

impl Query {
    /// Maps filter options onto a hints record. When no filter option was
    /// given the query carries no hints at all, which is not the same as
    /// an all-default hints record. Node and port scope the query but are
    /// not filters, so they do not activate hints on their own.
    pub fn from_cli(cli: &Cli) -> Query {
        let mut hints = FabricInfo::hints();
        let mut filtered = false;

        if let Some(caps) = &cli.caps {
            hints.caps = parse_tokens(caps, Caps::resolve);
            filtered = true;
        }
        if let Some(mode) = &cli.mode {
            hints.mode = parse_tokens(mode, Mode::resolve);
            filtered = true;
        }
        if let Some(ep_type) = &cli.ep_type {
            hints.ep_attr.ep_type = EpType::resolve(ep_type);
            filtered = true;
        }
        if let Some(addr_format) = &cli.addr_format {
            hints.addr_format = AddrFormat::resolve(addr_format);
            filtered = true;
        }
        if let Some(provider) = &cli.provider {
            hints.fabric_attr.prov_name = Some(provider.clone());
            filtered = true;
        }

        debug!(filtered, "assembled discovery query");

        Query {
            node: cli.node.clone(),
            service: cli.port.clone(),
            hints: filtered.then_some(hints),
        }
    }
}
