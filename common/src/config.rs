use std::path::PathBuf;

use crate::discovery::{Definition, Detector, Detectors, DiscoveryConfiguration, Parameter};

pub const DEFAULT_ONMS_HOME: &str = "/opt/opennms";
const CONFIG_RELATIVE_PATH: &str = "etc/discovery-configuration.xml";

/// Settings for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File with one CIDR per line to include.
    pub include_cidr: Option<PathBuf>,
    /// File with one CIDR per line to exclude.
    pub exclude_cidr: Option<PathBuf>,
    /// File with one address per line to include.
    pub include_list: Option<PathBuf>,
    /// Addresses never added as specifics, from any source.
    pub exclude_list: Option<PathBuf>,
    /// DNS export with `ipv4addr: a.b.c.d` lines.
    pub include_dns: Option<PathBuf>,
    /// NNMi export with hex-encoded IPv4 addresses.
    pub include_nnmi_hex: Option<PathBuf>,
    pub onms_home: PathBuf,
    /// Overrides the file under `onms_home`.
    pub output: Option<PathBuf>,
    /// Print the document instead of writing it.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_cidr: None,
            exclude_cidr: None,
            include_list: None,
            exclude_list: None,
            include_dns: None,
            include_nnmi_hex: None,
            onms_home: PathBuf::from(DEFAULT_ONMS_HOME),
            output: None,
            dry_run: false,
        }
    }
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.onms_home.join(CONFIG_RELATIVE_PATH),
        }
    }
}

/// The configuration every run starts from: one definition probing with
/// reverse DNS and SNMP (profiles enabled).
pub fn base_configuration() -> DiscoveryConfiguration {
    let detectors = Detectors {
        detectors: vec![
            Detector {
                name: "ReverseDNS".to_string(),
                class_name: "org.opennms.netmgt.provision.detector.rdns.ReverseDNSLookupDetector"
                    .to_string(),
                parameters: Vec::new(),
            },
            Detector {
                name: "SNMP".to_string(),
                class_name: "org.opennms.netmgt.provision.detector.snmp.SnmpDetector".to_string(),
                parameters: vec![Parameter {
                    key: "useSnmpProfiles".to_string(),
                    value: "true".to_string(),
                }],
            },
        ],
    };

    DiscoveryConfiguration {
        packets_per_second: Some(1),
        initial_sleep_time: Some(30_000),
        restart_sleep_time: Some(86_400_000),
        retries: Some(1),
        timeout: Some(2_000),
        definitions: vec![Definition {
            detectors: Some(detectors),
            ..Definition::default()
        }],
        ..DiscoveryConfiguration::default()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
