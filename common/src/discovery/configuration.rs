use serde::{Deserialize, Serialize};

use crate::discovery::Definition;

pub const DISCOVERY_NAMESPACE: &str = "http://xmlns.opennms.org/xsd/config/discovery";

fn default_namespace() -> String {
    DISCOVERY_NAMESPACE.to_string()
}

/// Root of the discovery configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "discovery-configuration")]
pub struct DiscoveryConfiguration {
    #[serde(rename = "@xmlns", default = "default_namespace")]
    pub xmlns: String,
    #[serde(rename = "@packets-per-second", default, skip_serializing_if = "Option::is_none")]
    pub packets_per_second: Option<u32>,
    #[serde(rename = "@initial-sleep-time", default, skip_serializing_if = "Option::is_none")]
    pub initial_sleep_time: Option<u64>,
    #[serde(rename = "@restart-sleep-time", default, skip_serializing_if = "Option::is_none")]
    pub restart_sleep_time: Option<u64>,
    #[serde(rename = "@retries", default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(rename = "@timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@chunk-size", default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(rename = "definition", default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
}

impl Default for DiscoveryConfiguration {
    fn default() -> Self {
        Self {
            xmlns: default_namespace(),
            packets_per_second: None,
            initial_sleep_time: None,
            restart_sleep_time: None,
            retries: None,
            timeout: None,
            chunk_size: None,
            definitions: Vec::new(),
        }
    }
}

impl DiscoveryConfiguration {
    pub fn add_definition(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    pub fn sort(&mut self) {
        for definition in &mut self.definitions {
            definition.sort();
        }
    }
}
