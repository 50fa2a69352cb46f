use crate::common::harness::TerminalTestHarness;
use crate::common::tracing::init_tracing_from_env;
use meta_landing::app::BootState;
use meta_landing::config::{BootConfig, Config};
use meta_landing::content::screens;
use std::time::Duration;

/// The first boot line is on screen as soon as the sequence starts
#[test]
fn test_first_line_shown_immediately() {
    init_tracing_from_env();
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains(screens::BOOT_LINES[0].2);
    harness.assert_screen_not_contains(screens::BOOT_LINES[1].2);
    assert!(harness.screen_row(0).contains("booting"));
}

/// Lines appear one by one at their cumulative delays
#[test]
fn test_lines_appear_in_order() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    let mut expected = 1;
    for (_, delay_ms, _) in &screens::BOOT_LINES[..screens::BOOT_LINES.len() - 1] {
        let _ = harness.advance(Duration::from_millis(*delay_ms));
        expected += 1;
        assert_eq!(harness.session().output().len(), expected);
    }

    let texts: Vec<&str> = harness
        .session()
        .output()
        .lines()
        .iter()
        .map(|line| line.text.as_str())
        .collect();
    let table: Vec<&str> = screens::BOOT_LINES.iter().map(|(_, _, text)| *text).collect();
    assert_eq!(texts, table);
}

/// Ready comes no earlier than total delay plus settle, with boot lines and
/// epilogue on screen in order
#[test]
fn test_ready_after_total_delay_and_settle() {
    let mut harness = TerminalTestHarness::new(80, 40).unwrap();
    let total = harness.session().boot().total_delay();
    let settle = harness.session().boot().settle_delay();
    let epilogue = harness.session().boot().epilogue_len();

    let _ = harness.advance(total);
    assert_eq!(harness.session().boot_state(), BootState::Booting);
    assert_eq!(
        harness.session().output().len(),
        screens::BOOT_LINES.len() + epilogue
    );

    let progress = harness.advance(settle - Duration::from_millis(1));
    assert!(!progress.became_ready);
    assert_eq!(harness.session().boot_state(), BootState::Booting);

    let progress = harness.advance(Duration::from_millis(1));
    assert!(progress.became_ready);
    assert_eq!(
        harness.session().output().len(),
        screens::BOOT_LINES.len() + epilogue
    );

    harness.render().unwrap();
    harness.assert_screen_contains("Type 'menu' to begin");
    assert!(harness.screen_row(0).contains("ready"));
}

/// Keystrokes during boot are dropped
#[test]
fn test_typing_during_boot_is_ignored() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("menu").unwrap();
    harness.submit().unwrap();
    assert!(harness.session().input().is_empty());
    assert!(harness.session().history().is_empty());

    harness.finish_boot();
    harness.run_command("menu").unwrap();
    harness.assert_screen_contains("MAIN MENU");
}

/// Speed and skip settings change timing only, not content
#[test]
fn test_fast_and_skipped_boot_emit_same_lines() {
    let fast = Config {
        boot: BootConfig {
            speed: 4.0,
            ..BootConfig::default()
        },
        ..Config::default()
    };
    let mut harness = TerminalTestHarness::with_config(80, 40, fast).unwrap();
    harness.finish_boot();
    let fast_lines = harness.session().output().clone();
    assert!(harness.clock().elapsed() < Duration::from_secs(1));

    let skipped = TerminalTestHarness::booted(80, 40).unwrap();
    assert_eq!(skipped.session().output().lines(), fast_lines.lines());
    assert_eq!(skipped.clock().elapsed(), Duration::ZERO);
}
