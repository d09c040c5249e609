//! The tcp provider: connection-oriented messaging with RMA emulation
//! over stream sockets.

use crate::fabric::types::{
    AddrFormat, Caps, DomainAttr, EndpointAttr, EpType, FabricAttr, FabricInfo, Mode, Protocol,
    Version,
};

const PROVIDER: &str = "tcp";
const MAX_MSG_SIZE: u64 = 1 << 23;

pub(crate) fn entries() -> Vec<FabricInfo> {
    vec![
        entry(AddrFormat::SockaddrIn, "inet"),
        entry(AddrFormat::SockaddrIn6, "inet6"),
    ]
}

fn entry(addr_format: AddrFormat, fabric_name: &str) -> FabricInfo {
    FabricInfo {
        caps: caps(),
        mode: Mode::CONTEXT | Mode::RX_CQ_DATA,
        addr_format,
        src_addr: None,
        ep_attr: EndpointAttr {
            ep_type: EpType::Msg,
            protocol: Protocol::Tcp,
            max_msg_size: MAX_MSG_SIZE,
        },
        domain_attr: DomainAttr {
            name: "tcp0".to_string(),
        },
        fabric_attr: FabricAttr {
            name: fabric_name.to_string(),
            prov_name: Some(PROVIDER.to_string()),
            prov_version: Version::new(1, 1),
        },
    }
}

fn caps() -> Caps {
    Caps::MSG
        | Caps::RMA
        | Caps::DIRECTED_RECV
        | Caps::MULTI_RECV
        | Caps::SOURCE
        | Caps::READ
        | Caps::WRITE
        | Caps::RECV
        | Caps::SEND
        | Caps::REMOTE_READ
        | Caps::REMOTE_WRITE
}
