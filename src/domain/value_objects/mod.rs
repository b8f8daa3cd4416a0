pub mod thresholds;

pub use thresholds::ThresholdSet;
