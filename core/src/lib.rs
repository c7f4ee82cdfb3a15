//! Assembly of a discovery configuration from address sources.
//!
//! [`aggregator`] is the pure part: it canonicalizes a definition and
//! estimates how many addresses it covers. The remaining modules read input
//! files, filter specifics, and render or persist the document.

pub mod aggregator;
pub mod builder;
pub mod discovery;
pub mod output;
pub mod sources;
pub mod xml;
