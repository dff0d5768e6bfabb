mod category;
mod label;

pub use category::{
    parse_sleep_hours, EmotionalPressure, Workload, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS,
};
pub use label::StressLabel;
