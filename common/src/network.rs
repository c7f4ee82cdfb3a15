pub mod address;
pub mod range;
pub mod range_set;
