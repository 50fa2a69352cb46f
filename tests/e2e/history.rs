use crate::common::harness::TerminalTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn up(harness: &mut TerminalTestHarness) -> String {
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.session().input().text().to_string()
}

fn down(harness: &mut TerminalTestHarness) -> String {
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.session().input().text().to_string()
}

#[test]
fn test_up_up_up_down_down_down() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    for cmd in ["a", "b", "c"] {
        harness.run_command(cmd).unwrap();
    }

    let seen = vec![
        up(&mut harness),
        up(&mut harness),
        up(&mut harness),
        down(&mut harness),
        down(&mut harness),
        down(&mut harness),
    ];
    assert_eq!(seen, ["c", "b", "a", "b", "c", ""]);
}

#[test]
fn test_up_clamps_at_oldest() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.run_command("menu").unwrap();
    harness.run_command("help").unwrap();

    assert_eq!(up(&mut harness), "help");
    assert_eq!(up(&mut harness), "menu");
    assert_eq!(up(&mut harness), "menu");
    assert_eq!(up(&mut harness), "menu");
    assert_eq!(down(&mut harness), "help");
}

#[test]
fn test_recall_with_empty_history_does_nothing() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.type_text("draft").unwrap();
    assert_eq!(up(&mut harness), "draft");
    assert_eq!(down(&mut harness), "draft");
}

#[test]
fn test_recalled_command_runs_again() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.run_command("whoami").unwrap();
    harness.run_command("clear").unwrap();

    up(&mut harness);
    up(&mut harness);
    harness.submit().unwrap();

    harness.assert_screen_contains("guest@meta-landing");
    assert_eq!(harness.session().history().entries(), ["whoami", "clear", "whoami"]);
    assert!(!harness.session().history().is_browsing());
}

/// Whitespace and unknown commands: only the latter are remembered
#[test]
fn test_history_skips_blank_lines() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.run_command("   ").unwrap();
    harness.run_command("nope").unwrap();
    harness.run_command("").unwrap();
    assert_eq!(harness.session().history().entries(), ["nope"]);
}

/// The cursor lands after the prompt and the typed text
#[test]
fn test_cursor_follows_input() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.run_command("clear").unwrap();
    harness.type_text("men").unwrap();
    let pos = harness.cursor_position().unwrap();
    assert_eq!((pos.x, pos.y), (5, 1));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    let pos = harness.cursor_position().unwrap();
    assert_eq!(pos.x, 4);
}
