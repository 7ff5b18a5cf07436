// Host-side tests for the simulated boot sequence.

use folio_core::{status_line, LoadSequence};

#[test]
fn progress_is_monotone_and_capped_at_100() {
    let mut seq = LoadSequence::new(42);
    let mut prev = 0.0_f32;
    for _ in 0..2000 {
        seq.tick(0.1);
        let p = seq.progress();
        assert!(p >= prev, "progress regressed: {prev} -> {p}");
        assert!(p <= 100.0);
        prev = p;
        if seq.is_finished() {
            break;
        }
    }
    assert!(seq.is_finished(), "boot sequence never finished");
    assert_eq!(seq.progress(), 100.0);
}

#[test]
fn full_bar_lingers_before_finishing() {
    let mut seq = LoadSequence::new(7);
    let mut ticks_after_full = None::<u32>;
    for _ in 0..2000 {
        seq.tick(0.1);
        if seq.progress() >= 100.0 && ticks_after_full.is_none() {
            ticks_after_full = Some(0);
            assert!(
                !seq.is_finished(),
                "must hold the full bar before finishing"
            );
            continue;
        }
        if let Some(n) = &mut ticks_after_full {
            *n += 1;
            if seq.is_finished() {
                assert!(*n >= 4, "linger was too short: {n} ticks");
                return;
            }
            assert!(*n < 10, "linger never ended");
        }
    }
    panic!("boot sequence never filled");
}

#[test]
fn finished_state_is_stable() {
    let mut seq = LoadSequence::new(3);
    for _ in 0..2000 {
        seq.tick(0.1);
        if seq.is_finished() {
            break;
        }
    }
    assert!(seq.is_finished());
    seq.tick(10.0);
    assert!(seq.is_finished());
    assert_eq!(seq.progress(), 100.0);
}

#[test]
fn identical_seeds_replay_identical_sequences() {
    let mut a = LoadSequence::new(99);
    let mut b = LoadSequence::new(99);
    for _ in 0..50 {
        a.tick(0.1);
        b.tick(0.1);
        assert_eq!(a.progress(), b.progress());
    }
}

#[test]
fn status_lines_follow_the_boot_phases() {
    assert_eq!(status_line(0.0), "> loading_neural_core()");
    assert_eq!(status_line(29.9), "> loading_neural_core()");
    assert_eq!(status_line(45.0), "> initializing_synapses()");
    assert_eq!(status_line(75.0), "> calibrating_interface()");
    assert_eq!(status_line(95.0), "> ready_for_deployment()");
    assert_eq!(status_line(100.0), "> ready_for_deployment()");
}
