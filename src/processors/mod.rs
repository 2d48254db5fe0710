pub mod daily;
pub mod window;

pub use daily::{DailyAggregator, DailySummary};
pub use window::{WindowExtractor, WindowedSeries};
