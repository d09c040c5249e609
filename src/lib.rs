//! fabinfo queries a fabric's capability-discovery interface and prints
//! every matching provider entry.
//!
//! The crate splits into the fabric API (`fabric`: vocabulary types, the
//! `Discovery` seam, the built-in registry), the option-to-hints mapping
//! (`tokens`, `query`), and the command handlers (`run`).

pub mod cli;
pub mod fabric;
pub mod query;
pub mod run;
pub mod tokens;

pub use cli::{Cli, OutputFormat};
pub use fabric::{
    AddrFormat, Caps, Discovery, EpType, FabricError, FabricInfo, Mode, Registry, Version,
};
pub use query::Query;
pub use tokens::parse_tokens;
