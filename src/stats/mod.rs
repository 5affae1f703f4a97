pub mod descriptive;
pub mod timeseries;
