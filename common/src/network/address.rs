//! # Address Codec
//!
//! Reduces IPv4 and IPv6 addresses to unsigned integers and back.
//!
//! Both families share one `u128` representation so that range arithmetic
//! never needs family-specific overflow handling. An [`Address`] keeps the
//! family next to the value: IPv4 `1.2.3.4` and IPv6 `::102:304` have the same
//! integer but are different addresses, and all IPv4 addresses order before
//! all IPv6 addresses.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Width of the family in bits.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Largest integer that still decodes into this family.
    pub fn max_value(self) -> u128 {
        match self {
            Family::V4 => u128::from(u32::MAX),
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IP address reduced to its integer value within its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    pub fn new(value: u128, family: Family) -> Result<Self, RangeError> {
        if value > family.max_value() {
            return Err(RangeError::AddressOverflow { value, family });
        }
        Ok(Self { family, value })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn ip(&self) -> IpAddr {
        match self.family {
            // `new` and `From<IpAddr>` keep V4 values within u32.
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }

    /// The next address in the same family, `None` past the family's last address.
    pub fn successor(&self) -> Option<Self> {
        self.value
            .checked_add(1)
            .filter(|value| *value <= self.family.max_value())
            .map(|value| Self { family: self.family, value })
    }

    /// The previous address in the same family, `None` before the first address.
    pub fn predecessor(&self) -> Option<Self> {
        self.value
            .checked_sub(1)
            .map(|value| Self { family: self.family, value })
    }
}

impl From<IpAddr> for Address {
    /// IPv4-mapped IPv6 addresses are folded into the IPv4 family.
    fn from(ip: IpAddr) -> Self {
        let ip = ip.to_canonical();
        Self {
            family: Family::of(&ip),
            value: encode(ip),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(address: Address) -> Self {
        address.ip()
    }
}

impl FromStr for Address {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ip())
    }
}

/// Parses an IPv4 or IPv6 literal.
pub fn parse_address(literal: &str) -> Result<Address, RangeError> {
    literal
        .trim()
        .parse::<IpAddr>()
        .map(Address::from)
        .map_err(|_| RangeError::InvalidAddress(literal.to_string()))
}

/// Maps an address to its integer form, most significant byte first.
pub fn encode(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Inverse of [`encode`]. The family must be given since short values fit both.
pub fn decode(value: u128, family: Family) -> Result<IpAddr, RangeError> {
    Address::new(value, family).map(|address| address.ip())
}

/// Computes the usable host range of a CIDR block, i.e. the block without its
/// network and broadcast (last) addresses.
///
/// IPv4-mapped IPv6 blocks (`::ffff:a.b.c.d/p`, `p >= 96`) are folded into the
/// equivalent IPv4 block, matching how single addresses are parsed.
///
/// Blocks with 0 or 1 host bits yield `begin > end`; values saturate at the
/// family boundaries so the result stays ordered that way instead of wrapping.
pub fn cidr_to_range(cidr: &str) -> Result<(Address, Address), RangeError> {
    let invalid = || RangeError::InvalidCidr(cidr.to_string());

    let (ip_str, prefix_str) = cidr.trim().split_once('/').ok_or_else(invalid)?;
    let literal: IpAddr = ip_str.parse().map_err(|_| invalid())?;
    let mut prefix: u8 = prefix_str.parse().map_err(|_| invalid())?;

    let ip = literal.to_canonical();
    if ip.is_ipv4() && literal.is_ipv6() {
        prefix = prefix.checked_sub(96).ok_or_else(invalid)?;
    }
    let network = IpNetwork::new(ip, prefix).map_err(|_| invalid())?;

    let family = Family::of(&ip);
    let first = encode(network.network());
    let last = encode(network.broadcast());

    let begin = Address {
        family,
        value: first.saturating_add(1).min(family.max_value()),
    };
    let end = Address {
        family,
        value: last.saturating_sub(1),
    };

    Ok((begin, end))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
