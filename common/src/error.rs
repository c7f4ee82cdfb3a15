use thiserror::Error;

use crate::network::address::Family;

/// Failures produced by the address range engine.
///
/// Every variant is a local, synchronous failure. Nothing here is transient,
/// so callers either skip the offending entry or surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The literal is not a well-formed IPv4 or IPv6 address.
    #[error("invalid IP address: '{0}'")]
    InvalidAddress(String),

    /// The literal is not a well-formed `address/prefix` block.
    #[error("invalid CIDR: '{0}'")]
    InvalidCidr(String),

    /// The range ends before it begins (e.g. a /31 or /32 has no usable hosts).
    ///
    /// Advisory: callers treat it as "produces nothing".
    #[error("empty range: {begin} -> {end}")]
    EmptyRange { begin: String, end: String },

    /// Both ends of a range must belong to the same address family.
    #[error("address family mismatch: {begin} -> {end}")]
    FamilyMismatch { begin: String, end: String },

    /// The integer does not fit in the requested family.
    #[error("value {value} does not fit in an {family} address")]
    AddressOverflow { value: u128, family: Family },
}
