mod time_utils;

pub use time_utils::{TimeUtils, clock_stamp_now, local_now_as_timestamp_ms};
