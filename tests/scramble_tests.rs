// Host-side tests for the scramble reveal engine.

use folio_core::constants::SCRAMBLE_REVEAL_BIAS;
use folio_core::{Scrambler, SCRAMBLE_ALPHABET};

fn run_to_completion(s: &mut Scrambler) -> u32 {
    let mut ticks = 0;
    while s.is_active() {
        s.tick();
        ticks += 1;
        assert!(ticks < 1000, "scramble never completed");
    }
    ticks
}

#[test]
fn completes_in_floor_duration_over_cadence_ticks() {
    let mut s = Scrambler::new(7);
    s.start("LIVE DEMO", 800);
    assert_eq!(s.total_frames(), 26);
    let ticks = run_to_completion(&mut s);
    assert_eq!(ticks, 26);
    assert_eq!(s.display(), "LIVE DEMO");
}

#[test]
fn source_is_case_normalized_to_upper() {
    let mut s = Scrambler::new(1);
    s.start("live demo", 600);
    run_to_completion(&mut s);
    assert_eq!(s.display(), "LIVE DEMO");
}

#[test]
fn spaces_always_pass_through() {
    let mut s = Scrambler::new(3);
    s.start("A B C", 900);
    while s.is_active() {
        s.tick();
        let chars: Vec<char> = s.display().chars().collect();
        assert_eq!(chars.len(), 5);
        assert_eq!(chars[1], ' ');
        assert_eq!(chars[3], ' ');
    }
}

#[test]
fn every_intermediate_char_is_revealed_or_from_the_alphabet() {
    let mut s = Scrambler::new(11);
    let source = "SIGNAL PATH 42";
    s.start(source, 1500);
    let source_chars: Vec<char> = source.chars().collect();
    while s.is_active() {
        s.tick();
        for (i, c) in s.display().chars().enumerate() {
            let ok = c == source_chars[i]
                || c == ' '
                || SCRAMBLE_ALPHABET.contains(&(c as u8));
            assert!(ok, "unexpected character {c:?} at index {i}");
        }
    }
}

#[test]
fn revealed_characters_never_revert() {
    let mut s = Scrambler::new(23);
    let source = "NEURAL INTERFACE";
    s.start(source, 1200);
    let total = s.total_frames() as f32;
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len() as f32;
    let mut revealed = vec![false; chars.len()];
    while s.is_active() {
        s.tick();
        let progress = s.frame() as f32 / total;
        for (i, c) in s.display().chars().enumerate() {
            let due = progress > i as f32 / len + SCRAMBLE_REVEAL_BIAS;
            if due {
                assert_eq!(c, chars[i], "due character not shown at index {i}");
            }
            if revealed[i] {
                assert!(
                    due || !s.is_active(),
                    "reveal threshold regressed at index {i}"
                );
            }
            revealed[i] = revealed[i] || due;
        }
    }
    assert_eq!(s.display(), source);
}

#[test]
fn start_is_idempotent_while_active() {
    let mut s = Scrambler::new(5);
    s.start("FIRST", 600);
    s.tick();
    // Re-trigger mid-session is a no-op; the original session finishes.
    s.start("SECOND", 600);
    run_to_completion(&mut s);
    assert_eq!(s.display(), "FIRST");
}

#[test]
fn restart_is_allowed_after_completion() {
    let mut s = Scrambler::new(5);
    s.start("ONE", 300);
    run_to_completion(&mut s);
    s.start("TWO", 300);
    assert!(s.is_active());
    run_to_completion(&mut s);
    assert_eq!(s.display(), "TWO");
}

#[test]
fn empty_source_resolves_immediately() {
    let mut s = Scrambler::new(9);
    s.start("", 800);
    assert!(!s.is_active());
    assert_eq!(s.display(), "");
}

#[test]
fn sub_cadence_duration_resolves_immediately() {
    let mut s = Scrambler::new(9);
    s.start("Hi", 20);
    assert!(!s.is_active());
    assert_eq!(s.display(), "HI");
}
