use crate::codec::Wire;
use crate::rw::{Sink, Source};
use crate::wire::{TypeByte, WireType};

/// The 5-byte header prefixing every compound value: packed tag byte plus a
/// `u32` length whose meaning depends on the main category (element count for
/// containers, arity for tuples, alternative count for variants, byte size
/// for POD records, the constant 2 for pairs).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DataHeader {
    pub type_byte: TypeByte,
    pub length: u32,
}

impl DataHeader {
    pub const WIRE_SIZE: usize = 5;

    pub fn new(main: WireType, sub: WireType, length: u32) -> Self {
        Self {
            type_byte: TypeByte::new(main, sub),
            length,
        }
    }

    pub fn main(&self) -> WireType {
        self.type_byte.main()
    }

    pub fn sub(&self) -> WireType {
        self.type_byte.sub()
    }

    /// Single fixed write, so a bounded sink takes the header whole or not at
    /// all.
    pub fn write_to<W: Sink>(&self, w: &mut W) {
        let mut buf = [0u8; Self::WIRE_SIZE];
        buf[0] = *self.type_byte;
        buf[1..].copy_from_slice(&self.length.to_ne_bytes());
        w.put_fixed(&buf);
    }

    /// All-or-nothing read; on `None` the cursor has not moved.
    pub fn read_from<R: Source>(r: &mut R) -> Option<Self> {
        let buf: [u8; Self::WIRE_SIZE] = r.take_arr()?;
        let mut length = [0u8; 4];
        length.copy_from_slice(&buf[1..]);
        Some(Self {
            type_byte: TypeByte::from(buf[0]),
            length: u32::from_ne_bytes(length),
        })
    }

    /// Can a stream whose elements carry our sub nibble fill a container of
    /// `T`?
    pub fn is_subtype_compatible<T: Wire>(&self) -> bool {
        self.sub().widens_to(T::WIRE_TYPE)
    }
}
