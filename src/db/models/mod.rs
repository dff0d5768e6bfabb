pub mod stress_record;

pub use stress_record::{NewStressRecord, StressRecord};
