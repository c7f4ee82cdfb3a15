use std::path::Path;

use discogen_core::{aggregator, sources, xml};
use tracing::debug;

use crate::terminal::print;

pub fn estimate(file: &Path) -> anyhow::Result<()> {
    let mut configuration = xml::from_xml(&sources::read_source(file)?)?;
    aggregator::merge_configuration(&mut configuration);

    for (idx, definition) in configuration.definitions.iter().enumerate() {
        debug!(
            "definition {idx}: {} specifics, {} include ranges, {} exclude ranges",
            definition.specifics.len(),
            definition.include_ranges.len(),
            definition.exclude_ranges.len()
        );
        let label = definition.location.as_deref().unwrap_or("Default");
        print::aligned_line(
            &format!("[{idx}] {label}"),
            aggregator::estimate_total_addresses(definition),
        );
    }

    print::fat_separator();
    print::aligned_line(
        "Estimated addresses",
        aggregator::estimate_configuration(&configuration),
    );
    Ok(())
}
