//! Text rendering of a provider capability record.

use crate::fabric::types::{Caps, FabricInfo, Mode};

/// Renders one record as an indented block, one attribute per line,
/// terminated by a newline.
pub fn format_info(info: &FabricInfo) -> String {
    let mut output = String::new();

    output.push_str("info:\n");
    output.push_str(&format!("    caps: {}\n", caps_list(info.caps)));
    output.push_str(&format!("    mode: {}\n", mode_list(info.mode)));
    output.push_str(&format!("    addr_format: {}\n", info.addr_format));
    output.push_str(&format!(
        "    src_addr: {}\n",
        info.src_addr.as_deref().unwrap_or("none")
    ));
    output.push_str("    ep_attr:\n");
    output.push_str(&format!("        type: {}\n", info.ep_attr.ep_type));
    output.push_str(&format!("        protocol: {}\n", info.ep_attr.protocol));
    output.push_str(&format!(
        "        max_msg_size: {}\n",
        info.ep_attr.max_msg_size
    ));
    output.push_str("    domain_attr:\n");
    output.push_str(&format!("        name: {}\n", info.domain_attr.name));
    output.push_str("    fabric_attr:\n");
    output.push_str(&format!("        name: {}\n", info.fabric_attr.name));
    output.push_str(&format!(
        "        prov_name: {}\n",
        info.fabric_attr.prov_name.as_deref().unwrap_or("none")
    ));
    output.push_str(&format!(
        "        prov_version: {}\n",
        info.fabric_attr.prov_version
    ));

    output
}

fn caps_list(caps: Caps) -> String {
    let names: Vec<&str> = caps.iter_names().map(|(name, _)| name).collect();
    bracket_list(&names)
}

fn mode_list(mode: Mode) -> String {
    let names: Vec<&str> = mode.iter_names().map(|(name, _)| name).collect();
    bracket_list(&names)
}

fn bracket_list(names: &[&str]) -> String {
    if names.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {} ]", names.join(", "))
    }
}
