pub mod app_time;
pub mod number_format;

pub use app_time::{AppInstant, now, sleep};
pub use number_format::format_number;
