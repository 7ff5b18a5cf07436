// Host-side tests for the hold-to-confirm gesture state machine.

use folio_core::{ring_dashoffset, Burst, HoldGesture, HoldPhase};

#[test]
fn early_release_never_completes() {
    let mut g = HoldGesture::new(2.0);
    g.press(0.0);
    assert!(!g.tick(1.0));
    assert!((g.progress() - 0.5).abs() < 1e-6);
    g.release();
    assert_eq!(g.phase(), HoldPhase::Idle);
    assert_eq!(g.progress(), 0.0);
    // Time passing after release changes nothing.
    assert!(!g.tick(10.0));
    assert_eq!(g.phase(), HoldPhase::Idle);
}

#[test]
fn holding_past_the_duration_completes_exactly_once() {
    let mut g = HoldGesture::new(2.0);
    g.press(0.0);
    assert!(!g.tick(1.99));
    assert!(g.tick(2.0), "completion event expected");
    assert_eq!(g.phase(), HoldPhase::Completed);
    assert_eq!(g.progress(), 1.0);
    // Observing press state afterwards never re-fires.
    assert!(!g.tick(3.0));
    assert!(!g.tick(100.0));
}

#[test]
fn completed_locks_out_further_presses() {
    let mut g = HoldGesture::new(1.0);
    g.press(0.0);
    assert!(g.tick(5.0));
    g.release();
    assert_eq!(g.phase(), HoldPhase::Completed, "completed is monotonic");
    g.press(6.0);
    assert_eq!(g.phase(), HoldPhase::Completed);
    assert!(!g.tick(20.0));
}

#[test]
fn progress_is_clamped_and_resets_per_attempt() {
    let mut g = HoldGesture::new(2.0);
    g.press(0.0);
    g.tick(1.0);
    g.release();
    assert_eq!(g.progress(), 0.0);

    g.press(5.0);
    assert!(!g.tick(5.5));
    assert!((g.progress() - 0.25).abs() < 1e-6);
    assert!(g.tick(8.0));
    assert_eq!(g.progress(), 1.0);
}

#[test]
fn press_while_holding_keeps_the_original_start() {
    let mut g = HoldGesture::new(2.0);
    g.press(0.0);
    g.press(1.5); // ignored
    assert!(g.tick(2.0), "original press time governs completion");
}

#[test]
fn dashoffset_maps_progress_linearly_onto_the_ring() {
    assert!((ring_dashoffset(0.0) - 283.0).abs() < 1e-4);
    assert!((ring_dashoffset(1.0) - 0.0).abs() < 1e-4);
    assert!((ring_dashoffset(0.5) - 141.5).abs() < 1e-4);
    // Out-of-range progress clamps instead of extrapolating.
    assert!((ring_dashoffset(2.0) - 0.0).abs() < 1e-4);
    assert!((ring_dashoffset(-1.0) - 283.0).abs() < 1e-4);
}

#[test]
fn burst_flies_outward_then_expires() {
    let mut b = Burst::new();
    for offset in b.offsets() {
        assert!(offset.length() < 1e-4, "burst starts at the center");
    }
    assert!(b.tick(0.4));
    let mid = b.offsets();
    assert_eq!(mid.len(), 12);
    for offset in &mid {
        let reach = offset.length();
        assert!(reach > 1.0 && reach <= 100.0 + 1e-3, "reach {reach}");
    }
    assert!(b.opacity() > 0.0 && b.opacity() < 1.0);
    // Past the configured duration the burst reports itself dead.
    assert!(!b.tick(0.5));
}
