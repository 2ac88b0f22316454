pub mod sequencer;
pub mod validation;
