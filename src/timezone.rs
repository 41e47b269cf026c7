use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// Get the current UTC offset of the timezone named `canonical_timezone`,
/// e.g. "Pacific/Auckland".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Look up the timezone named `canonical_timezone`, logging and returning an
/// error for unknown names.
pub(crate) fn local_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })
}

/// The calendar date of `date_time` in `timezone`.
///
/// Uses the offset in effect at that instant, so daylight saving changes
/// between then and now do not shift the date.
pub(crate) fn local_date(date_time: OffsetDateTime, timezone: &Tz) -> Date {
    let offset = timezone.get_offset_utc(&date_time).to_utc();
    date_time.to_offset(offset).date()
}

/// Today's date in `timezone`.
pub(crate) fn local_today(timezone: &Tz) -> Date {
    local_date(OffsetDateTime::now_utc(), timezone)
}
