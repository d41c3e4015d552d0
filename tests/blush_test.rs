use katzenbaum::animate::blush::{BLUSH_HOLD_SECS, Blush};

const DT: f32 = 1.0 / 60.0;

/// Run the blush forward frame by frame from `start` to `end` seconds.
fn run(blush: &mut Blush, start: f32, end: f32) -> f32 {
    let mut now = start;
    let mut level = blush.level();
    while now < end {
        now += DT;
        level = blush.update(now, DT);
    }
    level
}

#[test]
fn blush_rises_after_click() {
    let mut blush = Blush::new();
    assert_eq!(blush.level(), 0.0);
    blush.trigger(0.0);
    let level = run(&mut blush, 0.0, 1.0);
    assert!(
        level >= 0.99,
        "blush should saturate within a second, got {}",
        level
    );
}

#[test]
fn blush_decays_after_hold_window() {
    let mut blush = Blush::new();
    blush.trigger(0.0);
    run(&mut blush, 0.0, BLUSH_HOLD_SECS);
    // One second past the window is plenty for the decay to settle.
    let level = run(&mut blush, BLUSH_HOLD_SECS, BLUSH_HOLD_SECS + 1.0);
    assert!(level < 0.01, "blush should have decayed, got {}", level);
}

#[test]
fn repeated_clicks_reset_the_window() {
    let mut blush = Blush::new();
    blush.trigger(0.0);
    run(&mut blush, 0.0, 1.5);
    blush.trigger(1.5);

    // Without the second click the window would have closed at 2.0.
    assert!(blush.armed(2.5));
    let level = run(&mut blush, 1.5, 3.0);
    assert!(level >= 0.99, "blush dropped early, got {}", level);

    assert!(blush.armed(3.4));
    assert!(!blush.armed(3.6));
}

#[test]
fn unclicked_blush_stays_at_zero() {
    let mut blush = Blush::new();
    let level = run(&mut blush, 0.0, 5.0);
    assert_eq!(level, 0.0);
    assert!(!blush.armed(5.0));
}
