use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, parse_macro_input};

/// Lowest and highest octaves a pitch may land in once its accidental is applied.
const MIN_OCTAVE: i32 = 0;
const MAX_OCTAVE: i32 = 8;

/// Variant names of `staffsynth::music::PitchClass`, in chromatic order.
const PITCH_CLASSES: [&str; 12] = [
    "C", "CSharp", "D", "DSharp", "E", "F", "FSharp", "G", "GSharp", "A", "ASharp", "B",
];

/// Creates a `PitchKey` at compile time from a string literal.
///
/// The literal is validated while compiling, so the resulting key can be
/// resolved by `PitchTable::lookup` without a range check at run time.
///
/// # Format
///
/// The format is: `<letter>[accidental][octave]` where:
/// - `letter` is one of C, D, E, F, G, A, B (case-insensitive)
/// - `accidental` is an optional `#` (sharp) or `b` (flat)
/// - `octave` is optional and defaults to 4
///
/// Accidentals wrap across the octave boundary: `"Cb4"` is B3 and `"B#4"` is C5.
/// The resulting octave must lie within 0 to 8.
///
/// # Examples
///
/// ```ignore
/// use staffsynth::pitch;
///
/// let a4 = pitch!("A4");
/// let c_sharp = pitch!("C#5");
/// let b_flat = pitch!("Bb3");
/// let middle = pitch!("C"); // C4
/// ```
#[proc_macro]
pub fn pitch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let pitch_str = input.value();

    match parse_pitch(&pitch_str) {
        Ok((ordinal, octave)) => {
            let class = Ident::new(PITCH_CLASSES[ordinal], Span::call_site());
            let octave = octave as u8;

            let expanded = quote! {
                ::staffsynth::music::PitchKey::new_unchecked(
                    ::staffsynth::music::PitchClass::#class,
                    #octave,
                )
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid pitch string '{}': {}", pitch_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn natural_ordinal(letter: char) -> Result<i32, String> {
    match letter.to_ascii_uppercase() {
        'C' => Ok(0),
        'D' => Ok(2),
        'E' => Ok(4),
        'F' => Ok(5),
        'G' => Ok(7),
        'A' => Ok(9),
        'B' => Ok(11),
        other => Err(format!("invalid pitch letter '{}'", other)),
    }
}

/// Parses a pitch literal into a (pitch class ordinal, octave) pair.
fn parse_pitch(s: &str) -> Result<(usize, i32), String> {
    let mut chars = s.chars();
    let letter = chars.next().ok_or_else(|| "empty string".to_string())?;
    let base = natural_ordinal(letter)?;

    let rest = chars.as_str();
    let (alteration, octave_str) = match rest.chars().next() {
        Some('#') => (1, &rest[1..]),
        Some('b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let octave = if octave_str.is_empty() {
        4
    } else {
        octave_str
            .parse::<i32>()
            .map_err(|_| format!("invalid octave '{}'", octave_str))?
    };

    let shifted = base + alteration;
    let ordinal = shifted.rem_euclid(12);
    let octave = octave + shifted.div_euclid(12);

    if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        return Err(format!(
            "octave {} out of range ({} to {})",
            octave, MIN_OCTAVE, MAX_OCTAVE
        ));
    }

    Ok((ordinal as usize, octave))
}
