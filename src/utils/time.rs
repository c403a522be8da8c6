//! 时间字段与数据库列的换算
//!
//! 数据库统一存 big_integer：时间戳为 Unix 秒，上课时刻为当日零点起的秒数。

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

/// 上课时刻 -> 当日零点起的秒数
pub fn seconds_from_midnight(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

/// 当日零点起的秒数 -> 上课时刻
pub fn time_of_day(secs: i64) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(secs.clamp(0, 86_399) as u32, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Unix 秒 -> UTC 时间
pub fn datetime_from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

/// Unix 秒 -> 日期（出生日期列）
pub fn date_from_timestamp(ts: i64) -> NaiveDate {
    datetime_from_timestamp(ts).date_naive()
}

/// 日期 -> 当日零点 (UTC) 的 Unix 秒
pub fn timestamp_from_date(d: NaiveDate) -> i64 {
    d.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_round_trip() {
        let t = NaiveTime::from_hms_opt(10, 45, 30).unwrap();
        assert_eq!(time_of_day(seconds_from_midnight(t)), t);
    }

    #[test]
    fn test_time_of_day_clamps_out_of_range() {
        assert_eq!(time_of_day(-5), NaiveTime::MIN);
        assert_eq!(
            time_of_day(1_000_000),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_date_round_trip() {
        let d = NaiveDate::from_ymd_opt(2001, 9, 14).unwrap();
        assert_eq!(date_from_timestamp(timestamp_from_date(d)), d);
    }
}
