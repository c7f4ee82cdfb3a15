use discogen_common::config::Config;
use discogen_core::output::{self, Target, WriteOutcome};
use discogen_core::{aggregator, discovery, xml};
use tracing::{info, warn};

use crate::terminal::print;

pub fn generate(cfg: &Config) -> anyhow::Result<()> {
    let (configuration, summary) = discovery::assemble(cfg)?;

    print::header("summary");
    print::aligned_line("CIDRs included", summary.cidrs_included);
    print::aligned_line("CIDRs excluded", summary.cidrs_excluded);
    print::aligned_line("Blacklisted addresses", summary.blacklisted);
    print::aligned_line("Specifics added", summary.specifics_added);
    print::aligned_line("Specifics skipped", summary.specifics_skipped);
    print::aligned_line(
        "Estimated addresses",
        aggregator::estimate_configuration(&configuration),
    );
    print::fat_separator();

    if cfg.dry_run {
        println!("{}", xml::to_xml(&configuration)?);
        return Ok(());
    }

    // An explicit output path may be new; the installation file must exist.
    let target = match cfg.output {
        Some(_) => Target::CreateMissing,
        None => Target::Existing,
    };
    let path = cfg.output_path();
    match output::write_if_changed(&path, &configuration, target)? {
        WriteOutcome::Written => info!("Saved discovery configuration to {}", path.display()),
        WriteOutcome::Unchanged => warn!("No changes detected, {} left untouched", path.display()),
    }

    Ok(())
}
