//! Scalar shapes: headerless, written raw in native byte order.

use super::{Deser, Ser, Wire};
use crate::rw::{Sink, Source};
use crate::wire::WireType;
use std::mem;

/// Reads an unsigned value at the wire's width. Only called after a widening
/// check, so the result always fits the target.
fn widen_unsigned<R: Source>(r: &mut R, wire: WireType) -> u64 {
    match wire {
        WireType::Byte8 => u8::deser(r) as u64,
        WireType::Byte16 => u16::deser(r) as u64,
        WireType::Byte32 => u32::deser(r) as u64,
        WireType::Byte64 => u64::deser(r),
        _ => 0,
    }
}

/// Signed counterpart of [`widen_unsigned`]; sign-extends narrow values.
fn widen_signed<R: Source>(r: &mut R, wire: WireType) -> i64 {
    match wire {
        WireType::Byte8 => i8::deser(r) as i64,
        WireType::Byte16 => i16::deser(r) as i64,
        WireType::Byte32 => i32::deser(r) as i64,
        WireType::Byte64 => i64::deser(r),
        _ => 0,
    }
}

macro_rules! integral_wire {
    ($($t:ty => $kind:ident / $widen:ident),+ $(,)?) => {$(
        impl Wire for $t {
            const WIRE_TYPE: WireType = WireType::$kind;
        }

        impl Ser for $t {
            fn encoded_len(&self) -> usize {
                mem::size_of::<$t>()
            }

            fn ser<W: Sink>(&self, w: &mut W) {
                w.put_fixed(&self.to_ne_bytes());
            }
        }

        impl Deser for $t {
            fn deser<R: Source>(r: &mut R) -> Self {
                r.take_arr().map(<$t>::from_ne_bytes).unwrap_or_default()
            }

            fn deser_elem<R: Source>(r: &mut R, wire: WireType) -> Self {
                $widen(r, wire) as $t
            }
        }
    )+};
}

integral_wire! {
    u8 => Byte8 / widen_unsigned,
    u16 => Byte16 / widen_unsigned,
    u32 => Byte32 / widen_unsigned,
    u64 => Byte64 / widen_unsigned,
    i8 => Byte8 / widen_signed,
    i16 => Byte16 / widen_signed,
    i32 => Byte32 / widen_signed,
    i64 => Byte64 / widen_signed,
}

impl Wire for f32 {
    const WIRE_TYPE: WireType = WireType::Float32;
}

impl Ser for f32 {
    fn encoded_len(&self) -> usize {
        mem::size_of::<f32>()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        w.put_fixed(&self.to_ne_bytes());
    }
}

impl Deser for f32 {
    fn deser<R: Source>(r: &mut R) -> Self {
        r.take_arr().map(f32::from_ne_bytes).unwrap_or_default()
    }
}

impl Wire for f64 {
    const WIRE_TYPE: WireType = WireType::Float64;
}

impl Ser for f64 {
    fn encoded_len(&self) -> usize {
        mem::size_of::<f64>()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        w.put_fixed(&self.to_ne_bytes());
    }
}

impl Deser for f64 {
    fn deser<R: Source>(r: &mut R) -> Self {
        r.take_arr().map(f64::from_ne_bytes).unwrap_or_default()
    }

    fn deser_elem<R: Source>(r: &mut R, wire: WireType) -> Self {
        match wire {
            WireType::Float32 => f32::deser(r) as f64,
            WireType::Float64 => f64::deser(r),
            _ => 0.0,
        }
    }
}

impl Wire for bool {
    const WIRE_TYPE: WireType = WireType::Byte8;
}

impl Ser for bool {
    fn encoded_len(&self) -> usize {
        1
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        w.put_fixed(&[*self as u8]);
    }
}

impl Deser for bool {
    fn deser<R: Source>(r: &mut R) -> Self {
        u8::deser(r) != 0
    }
}

/// `char` travels as its 4-byte code point. Values that are not valid code
/// points decode to the default character.
impl Wire for char {
    const WIRE_TYPE: WireType = WireType::Byte32;
}

impl Ser for char {
    fn encoded_len(&self) -> usize {
        mem::size_of::<u32>()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        w.put_fixed(&(*self as u32).to_ne_bytes());
    }
}

impl Deser for char {
    fn deser<R: Source>(r: &mut R) -> Self {
        char::from_u32(u32::deser(r)).unwrap_or_default()
    }

    fn deser_elem<R: Source>(r: &mut R, wire: WireType) -> Self {
        char::from_u32(widen_unsigned(r, wire) as u32).unwrap_or_default()
    }
}
