use super::*;

fn jakarta(_: OffsetDateTime) -> UtcOffset {
    time::macros::offset!(+7)
}

fn utc(_: OffsetDateTime) -> UtcOffset {
    UtcOffset::UTC
}

#[test]
fn zoned_datetime_is_shown_in_local_time() {
    assert_eq!(format_datetime_with(Some("2025-01-25T23:30:00Z"), "-", jakarta), "2025-01-26 06:30");
    assert_eq!(format_datetime_with(Some("2025-01-25T23:30:00Z"), "-", utc), "2025-01-25 23:30");
    assert_eq!(format_datetime_with(Some("2025-01-25T08:30:12.481+07:00"), "-", jakarta), "2025-01-25 08:30");
}

#[test]
fn git_iso_dates_are_zoned() {
    assert_eq!(format_datetime_with(Some("2025-01-25 08:30:12 +0700"), "-", utc), "2025-01-25 01:30");
}

#[test]
fn zoneless_datetime_is_taken_as_local() {
    assert_eq!(format_datetime_with(Some("2025-01-25 08:30:12"), "-", jakarta), "2025-01-25 08:30");
    assert_eq!(format_datetime_with(Some("2025-01-25T08:30:12.5"), "-", jakarta), "2025-01-25 08:30");
}

#[test]
fn missing_or_unparseable_datetime() {
    assert_eq!(format_datetime(None, "Never"), "Never");
    assert_eq!(format_datetime(Some("  "), "-"), "-");
    assert_eq!(format_datetime(Some("yesterday"), "-"), "yesterday");
}

#[test]
fn date_follows_local_zone() {
    assert_eq!(format_date_with(Some("2025-01-10T20:00:00Z"), jakarta), "2025-01-11");
    assert_eq!(format_date_with(Some("2025-01-10"), jakarta), "2025-01-10");
    assert_eq!(format_date(None), "-");
}

#[test]
fn amount_groups_thousands() {
    assert_eq!(format_amount(1_250_000.0), "Rp 1.250.000");
    assert_eq!(format_amount(999.4), "Rp 999");
    assert_eq!(format_amount(-15_000.0), "-Rp 15.000");
    assert_eq!(format_amount(0.0), "Rp 0");
}

#[test]
fn short_hash_is_seven_chars() {
    assert_eq!(short_hash("a1b2c3d4e5f6"), "a1b2c3d");
    assert_eq!(short_hash("abc"), "abc");
}

#[test]
fn initials_from_name() {
    assert_eq!(initials("ada lovelace byron"), "AL");
    assert_eq!(initials(""), "");
}

#[test]
fn avatar_url_points_at_uploads() {
    let user = User { profile_picture: "u7.png".to_owned(), ..User::default() };
    assert_eq!(avatar_url("http://api.test/", &user).as_deref(), Some("http://api.test/uploads/u7.png"));
    assert_eq!(avatar_url("http://api.test", &User::default()), None);
}

#[test]
fn today_iso_is_well_formed() {
    let today = today_iso();
    assert!(Date::parse(&today, DATE).is_ok(), "{today}");
}
