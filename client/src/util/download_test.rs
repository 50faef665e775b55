use time::macros::datetime;

use super::*;

#[test]
fn export_filename_is_timestamped() {
    let at = datetime!(2025-01-25 08:30:12 +7);
    assert_eq!(export_filename("activity_logs", at), "activity_logs_20250125_083012.csv");
}

