//! Renders a short waltz to a WAV file.
//!
//! Three scores (piano melody, timpani bass, snare rhythm) are mixed into
//! one mono track and written as 16-bit PCM.
//!
//! Run with: `cargo run --example render_waltz --features wav [output.wav]`

use log::LevelFilter;
use simple_logger::SimpleLogger;
use staffsynth::music::{
    DefaultNoteFactory, Instrument, InstrumentRegistry, MusicPiece, NoteFactory, NoteValue,
    PitchClass, PitchTable, Score, Tempo,
};
use staffsynth::render::write_wav;

const SAMPLE_RATE: u32 = 44100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(LevelFilter::Debug).init()?;

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "waltz.wav".to_string());

    let table = PitchTable::new();
    let factory = DefaultNoteFactory;

    let mut melody = Score::new(Instrument::Piano);
    for (class, octave, value) in [
        (PitchClass::E, 5, NoteValue::Quarter),
        (PitchClass::G, 5, NoteValue::Quarter),
        (PitchClass::FSharp, 5, NoteValue::Quarter),
        (PitchClass::E, 5, NoteValue::Half),
    ] {
        melody.add_note(factory.create_note(table.get(class, octave)?, value));
    }
    melody.add_note(factory.create_fermata_on(
        factory.create_note(table.get(PitchClass::B, 4)?, NoteValue::Quarter),
    ));

    let mut bass = Score::new(Instrument::Timpani);
    bass.add_note(factory.create_note(table.get(PitchClass::E, 3)?, NoteValue::Quarter));
    bass.add_note(factory.create_rest(NoteValue::Half));
    bass.add_note(factory.create_note(table.get(PitchClass::B, 2)?, NoteValue::Quarter));
    bass.add_note(factory.create_rest(NoteValue::Half));

    let mut rhythm = Score::new(Instrument::SnareDrum);
    for _ in 0..2 {
        rhythm.add_note(factory.create_rest(NoteValue::Quarter));
        rhythm.add_note(factory.create_note(table.get(PitchClass::D, 4)?, NoteValue::Quarter));
        rhythm.add_note(factory.create_note(table.get(PitchClass::D, 4)?, NoteValue::Quarter));
    }

    let mut piece = MusicPiece::new(Tempo::new(96)?);
    piece.extend([melody, bass, rhythm]);

    let registry = InstrumentRegistry::<SAMPLE_RATE>::new()?;
    let samples = piece.render(&registry);
    write_wav(&output, &samples, SAMPLE_RATE)?;

    println!(
        "Wrote {} samples ({:.2} s) to {}",
        samples.len(),
        samples.len() as f64 / f64::from(SAMPLE_RATE),
        output
    );
    Ok(())
}
