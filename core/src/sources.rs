//! # Address Sources
//!
//! Line-oriented parsers for the files a run can ingest. They only extract
//! candidate literals; validation happens when the literal reaches a
//! [`Definition`](discogen_common::discovery::Definition).
//!
//! Supported inputs:
//! * CIDR and plain address lists, one entry per line (`#` starts a comment).
//! * DNS exports, where addresses appear as `ipv4addr: 10.0.0.1`.
//! * NNMi exports, where each line ends with the address as 8 hex digits.

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use regex::Regex;

static DNS_RECORD: OnceLock<Regex> = OnceLock::new();

fn dns_record() -> &'static Regex {
    DNS_RECORD.get_or_init(|| {
        Regex::new(r"ipv4addr: (\d+\.\d+\.\d+\.\d+)").expect("DNS record pattern is valid")
    })
}

pub fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed opening file {}", path.display()))
}

/// Non-empty lines with comments stripped.
pub fn entries(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter_map(|line| {
        let line = line.split('#').next().unwrap_or_default().trim();
        (!line.is_empty()).then_some(line)
    })
}

/// Addresses found in `ipv4addr: a.b.c.d` records.
pub fn dns_addresses(input: &str) -> impl Iterator<Item = &str> {
    let pattern = dns_record();
    input.lines().filter_map(move |line| {
        pattern
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|found| found.as_str())
    })
}

/// Decodes the trailing 8 hex digits of an NNMi line, e.g. `...0A000001` is `10.0.0.1`.
pub fn decode_nnmi_hex(line: &str) -> Option<Ipv4Addr> {
    let line = line.trim();
    let hex = line.get(line.len().checked_sub(8)?..)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Ipv4Addr::from)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
