//! Typed binary serialization with a self-describing tag-and-length wire
//! format.
//!
//! Values of a closed set of shapes — scalars, bitwise-copyable records,
//! pairs, tuples, tagged unions, sequence and associative containers, lazy
//! iterator ranges, and custom types — encode to a byte stream and decode
//! back. Decoding is driven entirely by the *target's* static type; the tags
//! on the wire exist for sanity checks and cross-container compatibility
//! only. Malformed or truncated input never panics and never returns an
//! error: every failed read yields the target's default value.
//!
//! ```
//! use bytepack::{deserialize, no_checksum, serialize};
//! use std::collections::HashMap;
//!
//! let mut scores = HashMap::new();
//! scores.insert(String::from("jacky"), 68u32);
//! scores.insert(String::from("bob"), 45u32);
//!
//! let bytes = serialize(&scores, no_checksum);
//! let back: HashMap<String, u32> = deserialize(&bytes, no_checksum);
//! assert_eq!(back, scores);
//! ```

pub mod codec;
pub mod pack;
pub mod rw;
pub mod wire;

pub use codec::*;
pub use pack::*;
pub use rw::*;
pub use wire::*;

#[doc(hidden)]
pub mod export {
    pub use zerocopy;
}
