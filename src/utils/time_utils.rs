use chrono::Local;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";
}

// Time helper functions

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

/// Wall-clock stamp used on refreshed quotes, e.g. `14:32:07`.
pub fn clock_stamp_now() -> String {
    format!("{}", Local::now().format(TimeUtils::CLOCK_TIME_FORMAT))
}
