use crate::common::harness::TerminalTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use meta_landing::input::key_handler::KeyResult;
use std::time::Duration;

/// Tearing down mid-boot revokes everything still scheduled
#[test]
fn test_teardown_mid_boot_emits_nothing_more() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    let _ = harness.advance(Duration::from_millis(600));
    let shown = harness.session().output().len();
    assert!(shown > 1);

    let revoked = harness.teardown();
    assert!(revoked > 0);
    assert_eq!(harness.session().boot().pending(), 0);

    let progress = harness.advance(Duration::from_secs(60));
    assert!(!progress.changed());
    assert_eq!(harness.session().output().len(), shown);
    assert!(!harness.session().is_ready());
}

#[test]
fn test_teardown_after_ready_blocks_input() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    assert_eq!(harness.teardown(), 0);
    harness.type_text("menu").unwrap();
    harness.submit().unwrap();
    assert!(harness.session().input().is_empty());
    harness.assert_screen_not_contains("MAIN MENU");
}

#[test]
fn test_ctrl_c_quits_during_boot() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    let result = harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(result, KeyResult::Quit);
}
