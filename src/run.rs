//! Handlers behind each top-level command branch: discovery, provider
//! listing, and the version banner.

use std::process::ExitCode;

use colored::Colorize;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::fabric::render::format_info;
use crate::fabric::{API_VERSION, Discovery, FabricError, FabricInfo, LIB_VERSION, Result};
use crate::query::Query;

/// Runs discovery for `query` and prints every matching entry to stdout.
/// Zero matches is success with no output. A failed call prints one
/// stderr line and exits with the negated failure code.
pub fn run_query<D: Discovery>(fabric: &D, query: &Query, format: OutputFormat) -> ExitCode {
    match discover(fabric, query) {
        Ok(entries) => {
            print!("{}", format_entries(&entries, format));
            ExitCode::SUCCESS
        }
        Err(err) => report_failure("getinfo", &err),
    }
}

/// Prints a brief name-and-version line per known provider.
pub fn run_list<D: Discovery>(fabric: &D) -> ExitCode {
    match fabric.getinfo(API_VERSION, None, None, None) {
        Ok(entries) => {
            print!("{}", format_provider_list(&entries));
            ExitCode::SUCCESS
        }
        Err(err) => report_failure("getinfo", &err),
    }
}

/// Prints the tool, library, and interface versions without touching
/// the registry.
pub fn print_version() -> ExitCode {
    println!("fabinfo: {}", env!("CARGO_PKG_VERSION"));
    println!("fabric: {LIB_VERSION}");
    println!("fabric api: {API_VERSION}");
    ExitCode::SUCCESS
}

fn discover<D: Discovery>(fabric: &D, query: &Query) -> Result<Vec<FabricInfo>> {
    debug!(node = ?query.node, service = ?query.service, "invoking discovery");
    let entries = fabric.getinfo(
        API_VERSION,
        query.node.as_deref(),
        query.service.as_deref(),
        query.hints.as_ref(),
    )?;
    info!(matched = entries.len(), "discovery completed");
    Ok(entries)
}

/// Renders the result list: in text mode one `---` separator followed by
/// the record block per entry, in json mode one pretty-printed array.
pub fn format_entries(entries: &[FabricInfo], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for entry in entries {
                output.push_str("---\n");
                output.push_str(&format_info(entry));
            }
            output
        }
        OutputFormat::Json => {
            let mut output =
                serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string());
            output.push('\n');
            output
        }
    }
}

/// One line pair per distinct provider, in registry order.
pub fn format_provider_list(entries: &[FabricInfo]) -> String {
    let mut output = String::new();
    let mut seen: Vec<&str> = Vec::new();

    for entry in entries {
        let Some(name) = entry.fabric_attr.prov_name.as_deref() else {
            continue;
        };
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        output.push_str(&format!("{name}:\n"));
        output.push_str(&format!(
            "    version: {}\n",
            entry.fabric_attr.prov_version
        ));
    }

    output
}

fn report_failure(operation: &str, err: &FabricError) -> ExitCode {
    eprintln!("{}", failure_line(operation, err));
    ExitCode::from(err.exit_code())
}

/// The single stderr line a failed call produces, tagged with the
/// operation name and the numeric failure code.
pub fn failure_line(operation: &str, err: &FabricError) -> String {
    let tag = format!("{operation} failed");
    format!("{}: {} ({})", tag.red().bold(), err, err.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fabric::{Registry, Version};

    struct FailingFabric;

    impl Discovery for FailingFabric {
        fn getinfo(
            &self,
            _version: Version,
            _node: Option<&str>,
            _service: Option<&str>,
            _hints: Option<&FabricInfo>,
        ) -> Result<Vec<FabricInfo>> {
            Err(FabricError::NotSupported("stub".to_string()))
        }
    }

    fn empty_query() -> Query {
        Query {
            node: None,
            service: None,
            hints: None,
        }
    }

    fn sample_entries() -> Vec<FabricInfo> {
        Registry::new()
            .getinfo(API_VERSION, None, None, None)
            .unwrap()
    }

    #[test]
    fn test_discover_passes_entries_through() {
        let entries = discover(&Registry::new(), &empty_query()).unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_discover_propagates_stub_failures() {
        let err = discover(&FailingFabric, &empty_query()).unwrap_err();
        assert_eq!(err, FabricError::NotSupported("stub".to_string()));
    }

    #[test]
    fn test_run_query_maps_failure_to_negated_code() {
        let code = run_query(&FailingFabric, &empty_query(), OutputFormat::Text);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(38)));
    }

    #[test]
    fn test_run_query_succeeds_on_matches() {
        let code = run_query(&Registry::new(), &empty_query(), OutputFormat::Text);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn test_format_entries_text_separates_each_record() {
        let output = format_entries(&sample_entries(), OutputFormat::Text);
        assert!(output.starts_with("---\n"));
        assert_eq!(output.matches("---\n").count(), 5);
        assert_eq!(output.matches("info:\n").count(), 5);
    }

    #[test]
    fn test_format_entries_text_empty_is_silent() {
        assert_eq!(format_entries(&[], OutputFormat::Text), "");
    }

    #[test]
    fn test_format_entries_json_parses_back() {
        let output = format_entries(&sample_entries(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["fabric_attr"]["prov_name"], "tcp");
    }

    #[test]
    fn test_format_entries_json_empty_is_an_empty_array() {
        let output = format_entries(&[], OutputFormat::Json);
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_format_provider_list_dedups_in_order() {
        let output = format_provider_list(&sample_entries());
        let tcp = output.find("tcp:").unwrap();
        let udp = output.find("udp:").unwrap();
        let shm = output.find("shm:").unwrap();
        assert!(tcp < udp && udp < shm);
        assert_eq!(output.matches("tcp:").count(), 1);
        assert_eq!(output.matches("version: 1.1").count(), 3);
    }

    #[test]
    fn test_failure_line_names_operation_and_code() {
        let err = FabricError::AddrNotAvail("service 'x' is not a valid port".to_string());
        let line = failure_line("getinfo", &err);
        assert!(line.contains("getinfo failed"));
        assert!(line.contains("address not available"));
        assert!(line.contains("(-99)"));
    }
}
