// tests/logging.rs
//
// Log line format, and the warning left behind by a box that is too small.
use std::fs;

use box_fixtures::log::{self, format_line, Level};
use box_fixtures::plan::BoxEntry;
use box_fixtures::runner;
use box_fixtures::FixtureError;

#[test]
fn line_format() {
    assert_eq!(format_line(Level::Debug, 0, "hello"), "[00:00:00.000][DEBUG] hello\n");
    assert_eq!(format_line(Level::Warn, 3_723_004, "x"), "[01:02:03.004][WARN] x\n");
    assert_eq!(format_line(Level::Info, 59_999, "a b"), "[00:00:59.999][INFO] a b\n");
    assert_eq!(format_line(Level::Error, 36_000_000, ""), "[10:00:00.000][ERROR] \n");
}

#[test]
fn short_box_logs_a_warning() {
    let dir = std::env::temp_dir().join("box_fixtures_log_warn");
    let _ = fs::remove_dir_all(&dir);
    log::set_dir(dir.clone());

    let boxes = vec![
        BoxEntry { box_id: 11, players: vec![1, 2] },
        BoxEntry { box_id: 12, players: vec![7] },
    ];
    let err = runner::generate_all(3, &boxes, None).unwrap_err();
    assert!(matches!(err, FixtureError::InsufficientPlayers { found: 1 }));

    assert_eq!(log::log_path(), dir.join("fixtures.log"));
    let text = fs::read_to_string(log::log_path()).unwrap();
    let warn = text.lines().find(|l| l.contains("[WARN]")).unwrap();
    assert!(warn.starts_with('[') && warn.as_bytes()[13] == b']', "{warn}");
    assert!(warn.contains("round=3 box=12"), "{warn}");
    assert!(warn.contains("Not enough players (1)"), "{warn}");

    // the good box before it was logged at debug level
    assert!(text.lines().any(|l| l.contains("[DEBUG]") && l.contains("box=11")));
}
