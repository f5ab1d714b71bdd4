//! # Wire format
//!
//! Following pseudocode depicts the byte representation of an encoded value.
//! All multi-byte fields are in native byte order; cross-architecture
//! portability is not a goal of this format.
//!
//! A top-level serialization is an envelope followed by one value body:
//!
//! ```text
//! struct Packet {
//!     version:    u16,    // major << 4 | minor
//!     crc:        u32,    // checksum of the payload; narrow CRCs sit in the low bits
//!     length:     u32,    // payload byte count, envelope excluded
//!     payload:    Value,
//! }
//! ```
//!
//! `Value` comes in several shapes, each identified by a category code.
//! Compound shapes are prefixed with a 5-byte data header carrying a packed
//! type byte (main category in the low nibble, element category in the high
//! nibble) and a `u32` length whose meaning depends on the main category.
//! Scalars carry no header; their bytes are written raw.
//!
//! ```text
//! struct Value::Scalar {                  // byte8..float64
//!     body:           [u8; width],
//! }
//!
//! struct Value::Pod {
//!     type_byte:      u8,                 // main = pod
//!     length:         u32,                // byte size of the record
//!     body:           [u8; length],
//! }
//!
//! struct Value::Pair {
//!     type_byte:      u8,                 // main = pair
//!     length:         u32,                // always 2
//!     first:          Value,
//!     second:         Value,
//! }
//!
//! struct Value::Variant {
//!     type_byte:      u8,                 // main = variant, sub = active's category
//!     length:         u32,                // number of declared alternatives
//!     index:          u32,                // zero-based, < length
//!     body:           Value,              // the active alternative
//! }
//!
//! struct Value::Tuple {
//!     type_byte:      u8,                 // main = tuple
//!     length:         u32,                // static arity
//!     elements:       [Value; length],
//! }
//!
//! struct Value::Container {
//!     type_byte:      u8,                 // main = seq_container | aso_container,
//!                                         // sub = element category
//!     length:         u32,                // element count
//!     elements:       [Value; length],    // back-to-back element bodies
//! }
//! ```
//!
//! Decoders dispatch on the *target* type and use these tags only to reject
//! incompatible streams. Within a container family, any concrete container
//! decodes from any other's bytes, and a sequence of narrow scalars decodes
//! into a container of wider scalars (see [`WireType::widens_to`]).

mod checksum;
mod data_header;
mod envelope;
mod wire_type;


pub use checksum::*;
pub use data_header::*;
pub use envelope::*;
pub use wire_type::*;
