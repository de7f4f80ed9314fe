//! Amplitude envelopes applied over a note's duration.

mod adsr;

pub use adsr::Adsr;
