pub mod misc;
pub mod processor;

pub use misc::{FEATURE_NAMES, Features, NUM_FEATURES};
pub use processor::build_feature_row;
