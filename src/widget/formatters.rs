use chrono::{DateTime, FixedOffset, Utc};
use serde::Serializer;

/// The fixed display timezone for upload dates: Korea Standard Time,
/// UTC+9 year-round. A presentation policy, not a user setting.
fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("KST is a valid offset")
}

pub(super) fn kst_timestamp(x: &DateTime<Utc>) -> String {
    x.with_timezone(&kst())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Render an upload date in Korea Standard Time.
pub(super) fn format_kst<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&kst_timestamp(x))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kst_is_nine_hours_ahead_of_utc() {
        let uploaded_at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        assert_eq!("2024-03-02 08:30:00", kst_timestamp(&uploaded_at));
    }
}
