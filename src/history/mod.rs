mod summary;

pub use summary::{
    summarize, summarize_with_threshold, HistorySummary, Insight, LabelCount, LabelSleepMean,
    LOW_SLEEP_THRESHOLD,
};
