//! The shm provider: intra-node transfers over shared memory, with
//! tagged messaging and atomics.

use crate::fabric::types::{
    AddrFormat, Caps, DomainAttr, EndpointAttr, EpType, FabricAttr, FabricInfo, Mode, Protocol,
    Version,
};

const PROVIDER: &str = "shm";
const MAX_MSG_SIZE: u64 = 1 << 32;

pub(crate) fn entries() -> Vec<FabricInfo> {
    vec![FabricInfo {
        caps: caps(),
        mode: Mode::CONTEXT | Mode::LOCAL_MR,
        addr_format: AddrFormat::Native,
        src_addr: None,
        ep_attr: EndpointAttr {
            ep_type: EpType::Rdm,
            protocol: Protocol::Shm,
            max_msg_size: MAX_MSG_SIZE,
        },
        domain_attr: DomainAttr {
            name: "shm0".to_string(),
        },
        fabric_attr: FabricAttr {
            name: "local".to_string(),
            prov_name: Some(PROVIDER.to_string()),
            prov_version: Version::new(1, 1),
        },
    }]
}

fn caps() -> Caps {
    Caps::MSG
        | Caps::RMA
        | Caps::TAGGED
        | Caps::ATOMICS
        | Caps::READ
        | Caps::WRITE
        | Caps::RECV
        | Caps::SEND
        | Caps::REMOTE_READ
        | Caps::REMOTE_WRITE
        | Caps::INJECT_COMPLETE
        | Caps::TRANSMIT_COMPLETE
}
