//! Shape classification and the recursive encode/decode dispatch.
//!
//! Every supported type maps to exactly one wire category through the
//! [`Wire`] trait; [`Ser`] and [`Deser`] carry the per-shape byte logic.
//! A custom type opts in by implementing all three by hand — `Wire` is an
//! empty impl (its category defaults to `Custom`), `ser` writes the fields
//! through the sink, `deser` reads them back, and the codec wraps no framing
//! of its own around the body.

mod compound;
mod container;
mod macros;
mod scalar;


pub use container::IterSeq;

use crate::rw::{Sink, Source};
use crate::wire::WireType;

/// Maps a type onto its wire category. The default is `Custom`, the category
/// of every type that participates through hand-written impls.
pub trait Wire {
    const WIRE_TYPE: WireType = WireType::Custom;
}

/// Encoding half of the codec.
pub trait Ser: Wire {
    /// Exact number of bytes [`Ser::ser`] appends for this value. A pure
    /// read; allocates nothing.
    fn encoded_len(&self) -> usize;

    fn ser<W: Sink>(&self, w: &mut W);
}

/// Decoding half of the codec. Targets must be default-constructible: every
/// structurally incompatible or truncated read yields `Self::default()` and
/// leaves the cursor wherever the failed read left it.
pub trait Deser: Wire + Default + Sized {
    fn deser<R: Source>(r: &mut R) -> Self;

    /// Container-element read. `wire` is the stream's element kind, which for
    /// scalar targets may be narrower than `Self`; the element is read at the
    /// wire's width and widened. Non-scalar shapes validate their own headers
    /// and ignore it.
    fn deser_elem<R: Source>(r: &mut R, wire: WireType) -> Self {
        let _ = wire;
        Self::deser(r)
    }
}

impl<T: Wire> Wire for &T {
    const WIRE_TYPE: WireType = T::WIRE_TYPE;
}

impl<T: Ser> Ser for &T {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        (**self).ser(w)
    }
}

/// Encodes `value` through `w`, headers and all, envelope excluded.
pub fn encode<T: Ser, W: Sink>(w: &mut W, value: &T) {
    value.ser(w);
}

/// Decodes a `T` from `r`, envelope excluded. Returns `T::default()` when the
/// stream is structurally incompatible.
pub fn decode<T: Deser, R: Source>(r: &mut R) -> T {
    T::deser(r)
}

/// Exact size of `encode(value)`'s output.
pub fn encoded_len<T: Ser>(value: &T) -> usize {
    value.encoded_len()
}
