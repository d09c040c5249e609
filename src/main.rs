use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use fabinfo::cli::Cli;
use fabinfo::fabric::Registry;
use fabinfo::query::Query;
use fabinfo::run;

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_usage(err),
    };

    if cli.version {
        return run::print_version();
    }

    let registry = Registry::new();
    if cli.list {
        return run::run_list(&registry);
    }

    let query = Query::from_cli(&cli);
    run::run_query(&registry, &query, cli.format)
}

/// Logging goes to stderr, quiet unless RUST_LOG raises it. Stdout
/// carries nothing but query output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .init();
}

/// Help requests and usage errors both end with the full option table
/// printed and exit code 1.
fn report_usage(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if !matches!(err.kind(), clap::error::ErrorKind::DisplayHelp) {
        let _ = Cli::command().print_help();
    }
    ExitCode::from(1)
}
