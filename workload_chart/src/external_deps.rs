pub use chrono::{DateTime, Datelike, NaiveDate, Utc};
pub use chrono_tz::Tz;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, StatusCode};
pub use urlencoding::encode;
