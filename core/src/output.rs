//! # Configuration Output
//!
//! Replaces the discovery configuration on disk, but only when the generated
//! document differs from what the file already describes. The comparison is
//! made on the parsed document, so formatting, comments and the XML
//! declaration of an existing file do not count as differences.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, bail};
use discogen_common::discovery::DiscoveryConfiguration;
use tracing::debug;

use crate::xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already described the same configuration; nothing was touched.
    Unchanged,
}

/// Whether a missing target file may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The file must already exist, as it does in an OpenNMS installation.
    Existing,
    CreateMissing,
}

pub fn write_if_changed(
    path: &Path,
    configuration: &DiscoveryConfiguration,
    target: Target,
) -> anyhow::Result<WriteOutcome> {
    match fs::read_to_string(path) {
        Ok(current) => match xml::from_xml(&current) {
            Ok(current) if current == *configuration => return Ok(WriteOutcome::Unchanged),
            Ok(_) => debug!("{} differs from the generated configuration", path.display()),
            Err(e) => debug!("{} is not a readable configuration: {e:#}", path.display()),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if target == Target::Existing {
                bail!("discovery configuration file not found at {}", path.display());
            }
            debug!("{} does not exist yet", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("cannot read discovery configuration at {}", path.display())
            });
        }
    }

    let document = xml::to_xml(configuration)?;
    fs::write(path, document)
        .with_context(|| format!("cannot write discovery configuration to {}", path.display()))?;
    Ok(WriteOutcome::Written)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
