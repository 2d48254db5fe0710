/// Sentinel written for unavailable numeric fields
pub const SENTINEL: i64 = -100;

/// Header identifier at index 0 of every record
pub const DEFAULT_HEADER_ID: i64 = 12345;

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "clientraw.txt";

/// Trailing-window parameters
pub const WINDOW_SLOTS: usize = 10;
pub const WINDOW_MINUTES: i64 = 60;

/// Aggregator observation timestamp layout (local, no offset)
pub const OBS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unit conversion factors
pub const MPH_TO_KNOTS: f64 = 0.868976;
pub const KMH_TO_KNOTS: f64 = 0.539957;
pub const INCH_TO_MM: f64 = 25.4;
pub const INHG_TO_HPA: f64 = 33.8639;

/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;
