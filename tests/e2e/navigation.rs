use crate::common::harness::TerminalTestHarness;
use meta_landing::app::DispatchOutcome;
use meta_landing::content::ScreenKey;
use meta_landing::input::key_handler::KeyResult;

/// The walk the original visual check took: menu, 1, 2, rabbit
#[test]
fn test_menu_walkthrough() {
    let mut harness = TerminalTestHarness::booted(100, 40).unwrap();

    harness.run_command("menu").unwrap();
    harness.assert_screen_contains("MAIN MENU");
    harness.assert_screen_not_contains("System ready.");

    harness.run_command("1").unwrap();
    harness.assert_screen_contains("01 / THE PHILOSOPHY");
    harness.assert_screen_not_contains("MAIN MENU");

    harness.run_command("2").unwrap();
    harness.assert_screen_contains("02 / THE STACK");

    harness.run_command("rabbit").unwrap();
    harness.assert_screen_contains("Follow the white rabbit.");
}

/// Every alias replaces the buffer with its screen, whatever the case or padding
#[test]
fn test_every_alias_shows_its_screen() {
    let mut harness = TerminalTestHarness::booted(100, 40).unwrap();
    let aliases: Vec<(String, ScreenKey)> = harness
        .session()
        .commands()
        .aliases()
        .sorted()
        .into_iter()
        .filter_map(|(alias, command)| match command {
            meta_landing::content::Command::Screen(key) => Some((alias.to_string(), key)),
            _ => None,
        })
        .collect();

    for (alias, key) in aliases {
        let shouted = format!("  {}  ", alias.to_uppercase());
        let outcome = harness.session_mut().dispatch(&shouted);
        assert_eq!(outcome, DispatchOutcome::Screen(key), "alias {alias:?}");
        let expected = harness.session().commands().registry().get(key).unwrap();
        assert_eq!(harness.session().output().lines(), expected, "alias {alias:?}");
    }
}

#[test]
fn test_clear_twice() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    harness.run_command("clear").unwrap();
    assert!(harness.session().output().is_empty());
    harness.run_command("clear").unwrap();
    assert!(harness.session().output().is_empty());

    // Only the prompt remains
    assert_eq!(harness.screen_row(1), ">");
}

#[test]
fn test_exit_is_textual() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    let result = harness.run_command("quit").unwrap();
    assert_eq!(result, KeyResult::Submitted(DispatchOutcome::Exit));
    harness.assert_screen_contains("Connection to meta-landing closed.");

    harness.run_command("home").unwrap();
    harness.assert_screen_contains("Live Demo");
}

#[test]
fn test_unknown_command() {
    let mut harness = TerminalTestHarness::booted(100, 40).unwrap();
    harness.run_command("clear").unwrap();
    harness.run_command("frobnicate").unwrap();

    let lines = harness.session().output().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "> frobnicate");
    assert_eq!(
        lines[1].text,
        "Command not found: frobnicate. Type 'help' for available commands."
    );
    harness.assert_screen_contains("Command not found: frobnicate.");
}

#[test]
fn test_whitespace_submit_changes_nothing() {
    let mut harness = TerminalTestHarness::booted(80, 24).unwrap();
    let before = harness.session().output().clone();
    harness.type_text("    ").unwrap();
    let result = harness.submit().unwrap();
    assert_eq!(result, KeyResult::Submitted(DispatchOutcome::Empty));
    assert_eq!(harness.session().output(), &before);
    assert!(harness.session().history().is_empty());
}

#[test]
fn test_page_up_scrolls_long_screen() {
    let mut harness = TerminalTestHarness::booted(100, 12).unwrap();
    harness.run_command("proof").unwrap();
    harness.assert_screen_not_contains("04 / THE PROOF");

    harness
        .send_key(crossterm::event::KeyCode::PageUp, crossterm::event::KeyModifiers::NONE)
        .unwrap();
    harness
        .send_key(crossterm::event::KeyCode::PageUp, crossterm::event::KeyModifiers::NONE)
        .unwrap();
    harness.assert_screen_contains("04 / THE PROOF");
    assert!(harness.view().scroll() > 0);

    harness.run_command("whoami").unwrap();
    assert_eq!(harness.view().scroll(), 0);
}
