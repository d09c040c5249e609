//! The udp provider: unreliable datagram messaging over UDP sockets.

use crate::fabric::types::{
    AddrFormat, Caps, DomainAttr, EndpointAttr, EpType, FabricAttr, FabricInfo, Mode, Protocol,
    Version,
};

const PROVIDER: &str = "udp";

// Largest UDP payload over IPv4: 65535 minus IP and UDP headers.
const MAX_MSG_SIZE: u64 = 65507;

pub(crate) fn entries() -> Vec<FabricInfo> {
    vec![
        entry(AddrFormat::SockaddrIn, "inet"),
        entry(AddrFormat::SockaddrIn6, "inet6"),
    ]
}

fn entry(addr_format: AddrFormat, fabric_name: &str) -> FabricInfo {
    FabricInfo {
        caps: Caps::MSG | Caps::MULTI_RECV | Caps::SOURCE | Caps::RECV | Caps::SEND,
        mode: Mode::empty(),
        addr_format,
        src_addr: None,
        ep_attr: EndpointAttr {
            ep_type: EpType::Dgram,
            protocol: Protocol::Udp,
            max_msg_size: MAX_MSG_SIZE,
        },
        domain_attr: DomainAttr {
            name: "udp0".to_string(),
        },
        fabric_attr: FabricAttr {
            name: fabric_name.to_string(),
            prov_name: Some(PROVIDER.to_string()),
            prov_version: Version::new(1, 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_entries_are_datagram_endpoints() {
        for entry in entries() {
            assert_eq!(entry.ep_attr.ep_type, EpType::Dgram);
            assert_eq!(entry.ep_attr.protocol, Protocol::Udp);
            assert!(!entry.caps.contains(Caps::RMA));
        }
    }

    #[test]
    fn test_udp_imposes_no_mode_bits() {
        for entry in entries() {
            assert_eq!(entry.mode, Mode::empty());
        }
    }
}
