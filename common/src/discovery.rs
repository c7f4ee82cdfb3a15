//! # Discovery Configuration Model
//!
//! Serde-shaped mirror of the OpenNMS `discovery-configuration.xml` document.
//! Attribute fields carry the `@` prefix and text content the `$text` name, the
//! convention `quick-xml` uses; attributes are declared before child elements.

mod configuration;
mod definition;

pub use configuration::{DISCOVERY_NAMESPACE, DiscoveryConfiguration};
pub use definition::{
    Definition, Detector, Detectors, ExcludeRange, IncludeRange, IncludeUrl, Parameter, Specific,
};
