//! Base oscillators that render a note from scratch.

mod pure;

pub use pure::PureSound;
