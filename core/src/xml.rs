//! XML rendering of the discovery configuration document.

use anyhow::Context;
use discogen_common::discovery::DiscoveryConfiguration;
use quick_xml::se::Serializer;
use serde::Serialize;

const INDENT_WIDTH: usize = 3;

pub fn to_xml(configuration: &DiscoveryConfiguration) -> anyhow::Result<String> {
    let mut xml = String::new();
    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', INDENT_WIDTH);
    configuration
        .serialize(serializer)
        .context("failed to serialize discovery configuration")?;
    Ok(xml)
}

pub fn from_xml(input: &str) -> anyhow::Result<DiscoveryConfiguration> {
    quick_xml::de::from_str(input).context("failed to parse discovery configuration")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
