#![cfg(feature = "macros")]

use staffsynth::music::{PitchClass, PitchKey, PitchTable};
use staffsynth::pitch;

#[test]
fn test_pitch_macro_with_octave() {
    let table = PitchTable::new();
    let c4 = table.lookup(pitch!("C4"));
    assert!((c4.frequency() - 261.63).abs() < 0.01);
}

#[test]
fn test_pitch_macro_without_octave() {
    // Defaults to octave 4
    assert_eq!(pitch!("C"), pitch!("C4"));
}

#[test]
fn test_pitch_macro_sharps() {
    let table = PitchTable::new();
    let c_sharp = table.lookup(pitch!("C#4"));
    assert_eq!(c_sharp.class(), PitchClass::CSharp);
    assert!((c_sharp.frequency() - 277.18).abs() < 0.01);
}

#[test]
fn test_pitch_macro_flats() {
    let table = PitchTable::new();
    let b_flat = table.lookup(pitch!("Bb3"));
    assert_eq!(b_flat.class(), PitchClass::ASharp);
    assert_eq!(b_flat.octave(), 3);
    assert!((b_flat.frequency() - 233.08).abs() < 0.01);
}

#[test]
fn test_pitch_macro_a4() {
    let table = PitchTable::new();
    assert_eq!(table.lookup(pitch!("A4")).frequency(), 440.0);
}

#[test]
fn test_pitch_macro_lowercase() {
    assert_eq!(pitch!("a4"), pitch!("A4"));
}

#[test]
fn test_pitch_macro_wraps_octave() {
    assert_eq!(pitch!("Cb4"), PitchKey::new(PitchClass::B, 3).unwrap());
    assert_eq!(pitch!("B#4"), PitchKey::new(PitchClass::C, 5).unwrap());
}

#[test]
fn test_pitch_macro_extremes() {
    let table = PitchTable::new();
    let lowest = table.lookup(pitch!("C0"));
    let highest = table.lookup(pitch!("B8"));
    assert!((lowest.frequency() - 16.35).abs() < 0.01);
    assert!((highest.frequency() - 7902.13).abs() < 0.01);
}

#[test]
fn test_pitch_macro_shares_cached_pitch() {
    let table = PitchTable::new();
    let from_macro = table.lookup(pitch!("F#3"));
    let from_table = table.get(PitchClass::FSharp, 3).unwrap();
    assert!(std::sync::Arc::ptr_eq(&from_macro, &from_table));
}
