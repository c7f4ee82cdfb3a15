//! Shared building blocks for the discovery configuration generator.
//!
//! * [`network`] holds the address range engine: the address codec, the
//!   [`network::range::IpRange`] interval and the coalescing
//!   [`network::range_set::IpRangeSet`].
//! * [`discovery`] models the discovery configuration document.
//! * [`config`] carries the run settings and the base configuration.

pub mod config;
pub mod discovery;
pub mod error;
pub mod network;

pub use error::RangeError;
