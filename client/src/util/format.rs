//! Display formatting for timestamps, money, and avatars.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::net::types::User;

const DISPLAY: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const NAIVE_SPACE: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");
const NAIVE_T: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
const GIT_ISO: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
);

/// A backend timestamp in the viewer's local time, `YYYY-MM-DD HH:MM`.
/// Missing values render as `fallback`; unparseable ones verbatim.
#[must_use]
pub fn format_datetime(raw: Option<&str>, fallback: &str) -> String {
    format_datetime_with(raw, fallback, local_offset_at)
}

/// Calendar date of a backend timestamp, or `-`.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    format_date_with(raw, local_offset_at)
}

/// `format_datetime` with an explicit zone lookup.
#[must_use]
pub fn format_datetime_with(
    raw: Option<&str>,
    fallback: &str,
    offset_at: impl Fn(OffsetDateTime) -> UtcOffset,
) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback.to_owned();
    };
    parse_timestamp(raw, offset_at)
        .and_then(|at| at.format(DISPLAY).ok())
        .unwrap_or_else(|| raw.to_owned())
}

#[must_use]
pub fn format_date_with(raw: Option<&str>, offset_at: impl Fn(OffsetDateTime) -> UtcOffset) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_owned();
    };
    parse_timestamp(raw, offset_at)
        .map(PrimitiveDateTime::date)
        .or_else(|| Date::parse(raw, DATE).ok())
        .and_then(|d| d.format(DATE).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Zoned timestamps (RFC 3339 or `git --date=iso`) are shifted into the
/// local zone; zoneless ones are taken as already local.
fn parse_timestamp(raw: &str, offset_at: impl Fn(OffsetDateTime) -> UtcOffset) -> Option<PrimitiveDateTime> {
    let zoned = OffsetDateTime::parse(raw, &Rfc3339).or_else(|_| OffsetDateTime::parse(raw, GIT_ISO));
    if let Ok(at) = zoned {
        let local = at.to_offset(offset_at(at));
        return Some(PrimitiveDateTime::new(local.date(), local.time()));
    }
    PrimitiveDateTime::parse(raw, NAIVE_SPACE)
        .or_else(|_| PrimitiveDateTime::parse(raw, NAIVE_T))
        .ok()
}

/// The browser's UTC offset at `at`; UTC outside the browser.
fn local_offset_at(at: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = (at.unix_timestamp_nanos() / 1_000_000) as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        // getTimezoneOffset counts minutes behind UTC.
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (-date.get_timezone_offset() * 60.0) as i32;
        UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = at;
        UtcOffset::UTC
    }
}

/// Rupiah with `.` thousands separators, rounded to whole units.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if whole < 0 { format!("-Rp {grouped}") } else { format!("Rp {grouped}") }
}

#[must_use]
pub fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}

/// Up to two uppercase initials for avatar placeholders.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).take(2).flat_map(char::to_uppercase).collect()
}

/// URL of the user's uploaded picture, if any.
#[must_use]
pub fn avatar_url(base_url: &str, user: &User) -> Option<String> {
    let pic = user.profile_picture.trim();
    if pic.is_empty() {
        return None;
    }
    if pic.starts_with("http://") || pic.starts_with("https://") {
        return Some(pic.to_owned());
    }
    Some(format!("{}/uploads/{}", base_url.trim_end_matches('/'), pic.trim_start_matches('/')))
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Current time in the local zone.
#[must_use]
pub fn now_local() -> OffsetDateTime {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (now_ms() * 1_000_000.0) as i128;
    let now = OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    now.to_offset(local_offset_at(now))
}

/// Today's date as `YYYY-MM-DD` in the local zone.
#[must_use]
pub fn today_iso() -> String {
    now_local().date().format(DATE).unwrap_or_default()
}
