// tests/generate_pure.rs
//
// Kept in its own binary: it redirects the process-wide log directory.
use std::fs;

use box_fixtures::fixture::generate;
use box_fixtures::log;
use box_fixtures::plan::BoxEntry;
use box_fixtures::runner;

#[test]
fn generate_writes_nothing() {
    let dir = std::env::temp_dir().join("box_fixtures_pure_logs");
    let _ = fs::remove_dir_all(&dir);
    log::set_dir(dir.clone());

    generate(1, 10, &[1, 2, 3, 4]).unwrap();
    generate(1, 10, &[7]).unwrap_err();
    generate(1, 10, &[]).unwrap_err();
    assert!(!dir.exists(), "generate touched {}", dir.display());

    // the runner does log into the same place
    let boxes = [BoxEntry { box_id: 10, players: vec![7] }];
    runner::generate_all(1, &boxes, None).unwrap_err();
    assert!(log::log_path().is_file());
}
