use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Resolve a canonical timezone name, e.g. "Pacific/Auckland", to the UTC
/// offset currently in effect in that timezone.
///
/// Returns `None` if `canonical_timezone` does not name a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

#[cfg(test)]
mod get_local_offset_tests {
    use super::get_local_offset;

    #[test]
    fn resolves_canonical_timezone_name() {
        assert!(get_local_offset("Etc/UTC").is_some());
        assert!(get_local_offset("Pacific/Auckland").is_some());
    }

    #[test]
    fn returns_none_for_unknown_timezone_name() {
        assert!(get_local_offset("Not/AZone").is_none());
    }
}
