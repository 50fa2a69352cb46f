use crate::common::harness::TerminalTestHarness;
use meta_landing::app::DispatchOutcome;
use meta_landing::content::Builtin;
use meta_landing::input::key_handler::KeyResult;
use meta_landing::model::LineKind;
use std::time::Duration;

fn last_two(harness: &TerminalTestHarness) -> Vec<(String, LineKind)> {
    let lines = harness.session().output().lines();
    lines[lines.len() - 2..]
        .iter()
        .map(|line| (line.text.clone(), line.kind))
        .collect()
}

#[test]
fn test_whoami_appends_echo_and_identity() {
    let mut harness = TerminalTestHarness::booted(80, 40).unwrap();
    let before = harness.session().output().len();

    let result = harness.run_command("whoami").unwrap();
    assert_eq!(
        result,
        KeyResult::Submitted(DispatchOutcome::Builtin(Builtin::Whoami))
    );
    assert_eq!(harness.session().output().len(), before + 2);
    assert_eq!(
        last_two(&harness),
        vec![
            ("> whoami".to_string(), LineKind::InputEcho),
            ("guest@meta-landing".to_string(), LineKind::Plain),
        ]
    );
    harness.assert_screen_contains("guest@meta-landing");
}

#[test]
fn test_builtins_keep_previous_output() {
    let mut harness = TerminalTestHarness::booted(100, 40).unwrap();
    harness.run_command("menu").unwrap();
    harness.run_command("pwd").unwrap();
    harness.run_command("ls").unwrap();
    harness.run_command("uname -a").unwrap();

    harness.assert_screen_contains("MAIN MENU");
    harness.assert_screen_contains("/home/guest/meta-landing");
    harness.assert_screen_contains("philosophy  stack  workflow");
    harness.assert_screen_contains("> uname -a");
    harness.assert_screen_contains("MetaLanding 1.0.0-why");
}

#[test]
fn test_echo_keeps_typed_case() {
    let mut harness = TerminalTestHarness::booted(80, 40).unwrap();
    harness.run_command("  WhoAmI ").unwrap();
    assert_eq!(last_two(&harness)[0].0, "> WhoAmI");
    assert_eq!(harness.session().history().entries(), ["whoami"]);
}

#[test]
fn test_date_reads_injected_clock() {
    let mut harness = TerminalTestHarness::booted(80, 40).unwrap();
    harness.run_command("date").unwrap();
    assert_eq!(last_two(&harness)[1].0, "Thu Jan 15 09:30:00 UTC 2026");

    harness.clock().advance(Duration::from_secs(3600 * 24));
    harness.run_command("date").unwrap();
    assert_eq!(last_two(&harness)[1].0, "Fri Jan 16 09:30:00 UTC 2026");
}
