use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{QuoteError, Result};

/// 報價時間的格式
pub const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// chrono 的 `%m`、`%d`、`%H` 等允許單一位數，寬度需先自行檢查
static DATE_TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("Failed to compile date time regex")
});

/// Joins a date part and a time part with a single space and parses the
/// result with `DATE_TIME_LAYOUT`.
///
/// # Arguments
///
/// * `date` - A date string such as `2021-03-15`.
/// * `time` - A time string such as `15:00:00`.
///
/// # Errors
///
/// `QuoteError::InvalidTimestamp` when either part does not have the fixed
/// `YYYY-MM-DD` / `HH:MM:SS` width, or names a date or time that does not
/// exist. A partially valid value is never returned.
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let value = format!("{} {}", date, time);

    if !DATE_TIME_SHAPE.is_match(&value) {
        return Err(QuoteError::InvalidTimestamp {
            value,
            source: None,
        });
    }

    NaiveDateTime::parse_from_str(&value, DATE_TIME_LAYOUT).map_err(|why| {
        QuoteError::InvalidTimestamp {
            value,
            source: Some(why),
        }
    })
}
