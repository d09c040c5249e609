//! Core fabric vocabulary: capability and mode bits, endpoint types,
//! address formats, and the record passed to and returned from discovery.

use std::fmt;

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    /// Capability bits a provider advertises and a caller can request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Caps: u64 {
        const MSG = 1 << 0;
        const RMA = 1 << 1;
        const TAGGED = 1 << 2;
        const ATOMICS = 1 << 3;
        const DYNAMIC_MR = 1 << 4;
        const NAMED_RX_CTX = 1 << 5;
        const DIRECTED_RECV = 1 << 6;
        const MULTI_RECV = 1 << 7;
        const SOURCE = 1 << 8;
        const SYMMETRIC = 1 << 9;
        const READ = 1 << 10;
        const WRITE = 1 << 11;
        const RECV = 1 << 12;
        const SEND = 1 << 13;
        const REMOTE_READ = 1 << 14;
        const REMOTE_WRITE = 1 << 15;
        const EVENT = 1 << 16;
        const COMPLETION = 1 << 17;
        const INJECT_COMPLETE = 1 << 18;
        const TRANSMIT_COMPLETE = 1 << 19;
        const CANCEL = 1 << 20;
        const MORE = 1 << 21;
        const PEEK = 1 << 22;
        const TRIGGER = 1 << 23;
        const FENCE = 1 << 24;
    }
}

bitflags! {
    /// Usage constraints a provider imposes on its callers. A provider
    /// entry only matches when the caller accepts every bit it requires.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mode: u64 {
        const CONTEXT = 1 << 0;
        const LOCAL_MR = 1 << 1;
        const PROV_MR_ATTR = 1 << 2;
        const MSG_PREFIX = 1 << 3;
        const ASYNC_IOV = 1 << 4;
        const RX_CQ_DATA = 1 << 5;
    }
}

impl Caps {
    /// Looks up a single capability token. Unknown tokens resolve to no
    /// bits so a misspelled filter widens the query instead of failing it.
    pub fn resolve(token: &str) -> Caps {
        Caps::from_name(token).unwrap_or(Caps::empty())
    }
}

impl Mode {
    /// Looks up a single mode token, case sensitive, empty on no match.
    pub fn resolve(token: &str) -> Mode {
        Mode::from_name(token).unwrap_or(Mode::empty())
    }
}

impl Default for Caps {
    fn default() -> Self {
        Caps::empty()
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::empty()
    }
}

impl Serialize for Caps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_names().map(|(name, _)| name))
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_names().map(|(name, _)| name))
    }
}

/// Endpoint semantics a provider entry implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpType {
    #[default]
    Unspec,
    Msg,
    Dgram,
    Rdm,
}

impl EpType {
    /// Parses an endpoint type token. Anything unrecognized falls back to
    /// `Unspec`, which matches every entry.
    pub fn resolve(token: &str) -> EpType {
        match token {
            "EP_MSG" => EpType::Msg,
            "EP_DGRAM" => EpType::Dgram,
            "EP_RDM" => EpType::Rdm,
            _ => EpType::Unspec,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EpType::Unspec => "EP_UNSPEC",
            EpType::Msg => "EP_MSG",
            EpType::Dgram => "EP_DGRAM",
            EpType::Rdm => "EP_RDM",
        }
    }
}

impl fmt::Display for EpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for EpType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Source address encoding an entry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddrFormat {
    #[default]
    Unspec,
    Sockaddr,
    SockaddrIn,
    SockaddrIn6,
    SockaddrIb,
    Native,
}

impl AddrFormat {
    /// Parses an address format token, `Unspec` on no match.
    pub fn resolve(token: &str) -> AddrFormat {
        match token {
            "SOCKADDR" => AddrFormat::Sockaddr,
            "SOCKADDR_IN" => AddrFormat::SockaddrIn,
            "SOCKADDR_IN6" => AddrFormat::SockaddrIn6,
            "SOCKADDR_IB" => AddrFormat::SockaddrIb,
            "ADDR_NATIVE" => AddrFormat::Native,
            _ => AddrFormat::Unspec,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddrFormat::Unspec => "FORMAT_UNSPEC",
            AddrFormat::Sockaddr => "SOCKADDR",
            AddrFormat::SockaddrIn => "SOCKADDR_IN",
            AddrFormat::SockaddrIn6 => "SOCKADDR_IN6",
            AddrFormat::SockaddrIb => "SOCKADDR_IB",
            AddrFormat::Native => "ADDR_NATIVE",
        }
    }

    /// Whether a filter set to `self` accepts an entry advertising `other`.
    /// `Unspec` accepts everything and `SOCKADDR` accepts the whole
    /// sockaddr family.
    pub fn accepts(self, other: AddrFormat) -> bool {
        match self {
            AddrFormat::Unspec => true,
            AddrFormat::Sockaddr => matches!(
                other,
                AddrFormat::Sockaddr
                    | AddrFormat::SockaddrIn
                    | AddrFormat::SockaddrIn6
                    | AddrFormat::SockaddrIb
            ),
            _ => self == other,
        }
    }
}

impl fmt::Display for AddrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AddrFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Wire protocol behind an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Unspec,
    Tcp,
    Udp,
    Shm,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Unspec => "UNSPEC",
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Shm => "SHM",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A `major.minor` interface or provider version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Version {
        Version { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Endpoint attributes of a provider entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EndpointAttr {
    #[serde(rename = "type")]
    pub ep_type: EpType,
    pub protocol: Protocol,
    pub max_msg_size: u64,
}

/// Domain attributes of a provider entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DomainAttr {
    pub name: String,
}

/// Fabric attributes of a provider entry, including the provider that
/// exports it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FabricAttr {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prov_name: Option<String>,
    pub prov_version: Version,
}

/// One provider capability record. The same shape serves as the hints
/// filter passed into discovery and as each entry returned from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FabricInfo {
    pub caps: Caps,
    pub mode: Mode,
    pub addr_format: AddrFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_addr: Option<String>,
    pub ep_attr: EndpointAttr,
    pub domain_attr: DomainAttr,
    pub fabric_attr: FabricAttr,
}

impl FabricInfo {
    /// An empty hints record. Every filter field starts out unset, and
    /// `mode` starts with every bit raised so providers with operating
    /// requirements are not excluded by default.
    pub fn hints() -> FabricInfo {
        FabricInfo {
            caps: Caps::empty(),
            mode: Mode::all(),
            addr_format: AddrFormat::Unspec,
            src_addr: None,
            ep_attr: EndpointAttr::default(),
            domain_attr: DomainAttr::default(),
            fabric_attr: FabricAttr::default(),
        }
    }
}
