//! Fontpack output generation
//!
//! The last pipeline stage: re-expresses every corpus string as escaped
//! symbol-code bytes and lays out the generated C source the firmware
//! build consumes. The writer is pure (types in, one string out); the
//! caller performs the single write-once file operation after the whole
//! pipeline has succeeded.

pub mod encode;
pub mod writer;

pub use encode::*;
pub use writer::*;
