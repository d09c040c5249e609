use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "fabinfo",
    about = "Query fabric provider capability information",
    long_about = "fabinfo translates filter options into a hints record, queries the fabric capability registry, and prints every matching provider entry."
)]
pub struct Cli {
    /// Node name or address the query is scoped to
    #[arg(short, long)]
    pub node: Option<String>,

    /// Port number the source address should use
    #[arg(short, long)]
    pub port: Option<String>,

    /// One or more capabilities: MSG|RMA|TAGGED|..
    #[arg(short, long, value_name = "CAP1|CAP2..")]
    pub caps: Option<String>,

    /// One or more mode bits the caller accepts: CONTEXT|LOCAL_MR|..
    #[arg(short, long, value_name = "MOD1|MOD2..")]
    pub mode: Option<String>,

    /// Endpoint type: EP_MSG, EP_DGRAM or EP_RDM
    #[arg(short, long = "ep_type")]
    pub ep_type: Option<String>,

    /// Address format: SOCKADDR, SOCKADDR_IN, SOCKADDR_IN6, SOCKADDR_IB or ADDR_NATIVE
    #[arg(short, long = "addr_format")]
    pub addr_format: Option<String>,

    /// Only query the named provider
    #[arg(short = 'f', long)]
    pub provider: Option<String>,

    /// List the known providers and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print version information and exit
    #[arg(short, long)]
    pub version: bool,

    /// Output format for matched entries
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["fabinfo"]).unwrap();
        assert!(cli.node.is_none());
        assert!(cli.caps.is_none());
        assert!(cli.mode.is_none());
        assert!(!cli.version);
        assert!(!cli.list);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_parse_caps() {
        let cli = Cli::try_parse_from(["fabinfo", "-c", "MSG|RMA"]).unwrap();
        assert_eq!(cli.caps.as_deref(), Some("MSG|RMA"));
    }

    #[test]
    fn test_parse_mode() {
        let cli = Cli::try_parse_from(["fabinfo", "--mode", "CONTEXT"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("CONTEXT"));
    }

    #[test]
    fn test_parse_ep_type() {
        let cli = Cli::try_parse_from(["fabinfo", "--ep_type", "EP_DGRAM"]).unwrap();
        assert_eq!(cli.ep_type.as_deref(), Some("EP_DGRAM"));
    }

    #[test]
    fn test_parse_addr_format() {
        let cli = Cli::try_parse_from(["fabinfo", "-a", "SOCKADDR_IN6"]).unwrap();
        assert_eq!(cli.addr_format.as_deref(), Some("SOCKADDR_IN6"));
    }

    #[test]
    fn test_parse_provider() {
        let cli = Cli::try_parse_from(["fabinfo", "-f", "tcp"]).unwrap();
        assert_eq!(cli.provider.as_deref(), Some("tcp"));
    }

    #[test]
    fn test_parse_node_and_port() {
        let cli = Cli::try_parse_from(["fabinfo", "-n", "node0", "-p", "7500"]).unwrap();
        assert_eq!(cli.node.as_deref(), Some("node0"));
        assert_eq!(cli.port.as_deref(), Some("7500"));
    }

    #[test]
    fn test_parse_version_flag() {
        let cli = Cli::try_parse_from(["fabinfo", "-v"]).unwrap();
        assert!(cli.version);

        let cli = Cli::try_parse_from(["fabinfo", "--version"]).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["fabinfo", "-l"]).unwrap();
        assert!(cli.list);
    }

    #[test]
    fn test_parse_format_json() {
        let cli = Cli::try_parse_from(["fabinfo", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        assert!(Cli::try_parse_from(["fabinfo", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["fabinfo", "-z"]).is_err());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(Cli::try_parse_from(["fabinfo", "-c"]).is_err());
    }
}
