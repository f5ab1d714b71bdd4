//! Byte sinks the encoder writes through and byte sources the decoder reads
//! from, in growable and bounded flavors.

mod sink;
mod source;


pub use sink::*;
pub use source::*;
