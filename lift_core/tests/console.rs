use lift_core::console::dispatch;
use lift_core::mocks::{MemorySlot, ScriptConsole};
use lift_core::{PositionTracker, ThresholdStore};
use rstest::rstest;

fn fixture(position: u16, threshold: u8) -> (ScriptConsole, PositionTracker, ThresholdStore<MemorySlot>) {
    let console = ScriptConsole::default();
    let mut tracker = PositionTracker::new();
    if position != 0 {
        tracker.update(position);
    }
    let store = ThresholdStore::open(MemorySlot::new(threshold)).expect("open");
    (console, tracker, store)
}

#[test]
fn threshold_command_sets_and_confirms() {
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "t200").expect("dispatch");

    assert_eq!(store.get(), 200);
    assert_eq!(*out.borrow(), vec!["New Threshold: 200".to_string()]);
}

#[rstest]
#[case("t49")]
#[case("t254")]
#[case("t999")] // does not fit u8; parse failure takes the same path
#[case("tx")]
fn threshold_rejections_are_reported(#[case] line: &str) {
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, line).expect("dispatch");

    assert_eq!(store.get(), 120);
    assert_eq!(
        *out.borrow(),
        vec!["Not stored. Keep your value between 50 and 254".to_string()]
    );
}

#[test]
fn bare_number_sets_the_target() {
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "3000").expect("dispatch");

    assert_eq!(tracker.target(), 3000);
    assert_eq!(*out.borrow(), vec!["New Target 3000".to_string()]);
}

#[rstest]
#[case("7000")]
#[case("150")]
#[case("6400")]
#[case("abc")]
fn out_of_range_target_is_rejected(#[case] line: &str) {
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();
    let before = tracker.target();

    dispatch(&mut console, &mut tracker, &mut store, line).expect("dispatch");

    assert_eq!(tracker.target(), before, "rejection must not move the target");
    assert_eq!(
        *out.borrow(),
        vec!["Not stored. Keep your value between 150 and 6400".to_string()]
    );
}

#[test]
fn stop_parks_target_outside_the_band_going_up() {
    // Direction is Above (target 700 > 500 + 80), so STOP parks at
    // position + 2 * threshold = 660.
    let (mut console, mut tracker, mut store) = fixture(500, 80);
    let out = console.output();
    tracker.set_target(700);

    dispatch(&mut console, &mut tracker, &mut store, "STOP").expect("dispatch");

    assert_eq!(tracker.target(), 660);
    assert_eq!(*out.borrow(), vec!["STOP at 660".to_string()]);
}

#[test]
fn stop_parks_target_outside_the_band_going_down() {
    let (mut console, mut tracker, mut store) = fixture(500, 80);
    tracker.set_target(300);

    dispatch(&mut console, &mut tracker, &mut store, "stop").expect("dispatch");

    assert_eq!(tracker.target(), 340);
}

#[test]
fn stop_while_level_leaves_target_alone() {
    let (mut console, mut tracker, mut store) = fixture(500, 80);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "STOP").expect("dispatch");

    assert_eq!(tracker.target(), 500);
    assert_eq!(*out.borrow(), vec!["STOP at 500".to_string()]);
}

#[test]
fn dispatch_is_substring_and_case_insensitive() {
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "please HeLp me").expect("dispatch");

    let lines = out.borrow();
    assert_eq!(lines.first().map(String::as_str), Some("======= Serial Commands ======="));
    assert_eq!(lines.last().map(String::as_str), Some("==============================="));
}

#[test]
fn values_dump_reports_threshold_and_position() {
    let (mut console, mut tracker, mut store) = fixture(1580, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "values").expect("dispatch");

    assert_eq!(
        *out.borrow(),
        vec![
            "======= VALUES =======".to_string(),
            "Threshold is: 120".to_string(),
            "Current Position: 1580".to_string(),
            "======================".to_string(),
        ]
    );
}

#[test]
fn help_outranks_the_threshold_branch() {
    // "HELP" contains no digits but does contain a 'T'-free match earlier
    // in the priority order; "THELP" exercises both and must still pick HELP.
    let (mut console, mut tracker, mut store) = fixture(500, 120);
    let out = console.output();

    dispatch(&mut console, &mut tracker, &mut store, "THELP").expect("dispatch");

    assert_eq!(store.get(), 120);
    assert_eq!(
        out.borrow().first().map(String::as_str),
        Some("======= Serial Commands =======")
    );
}
