mod aggregation;
mod properties;
