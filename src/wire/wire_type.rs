use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// On-wire category codes. Discriminants are assigned manually because they
/// are the nibble values written to the wire and must not shift with enum
/// edits.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum WireType {
    Empty = 0,

    Byte8 = 1,
    Byte16 = 2,
    Byte32 = 3,
    Byte64 = 4,
    Float32 = 5,
    Float64 = 6,

    Pod = 7,

    Pair = 8,

    Variant = 9,

    Tuple = 10,

    SeqContainer = 11,

    AsoContainer = 12,

    Custom = 13,
}

impl WireType {
    pub fn is_scalar(self) -> bool {
        self.is_integral() || self.is_float()
    }

    pub fn is_integral(self) -> bool {
        matches!(
            self,
            WireType::Byte8 | WireType::Byte16 | WireType::Byte32 | WireType::Byte64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, WireType::Float32 | WireType::Float64)
    }

    /// Widening relation between an on-wire element kind and a decode
    /// target's kind: a narrower integral fills a wider integral, `float32`
    /// fills `float64`, families never mix, and every non-scalar kind is
    /// compatible only with itself.
    pub fn widens_to(self, target: WireType) -> bool {
        if (self.is_integral() && target.is_integral()) || (self.is_float() && target.is_float()) {
            self as u8 <= target as u8
        } else {
            self == target
        }
    }
}

/// The packed tag byte: main category in the low nibble, element category in
/// the high nibble.
#[derive(From, Deref, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct TypeByte(u8);

impl TypeByte {
    pub fn new(main: WireType, sub: WireType) -> Self {
        let mut tb = Self(0);
        tb.set_main(main);
        tb.set_sub(sub);
        tb
    }

    pub fn set_main(&mut self, wt: WireType) {
        self.0 &= 0xf0;
        self.0 |= wt.to_u8().unwrap();
    }

    pub fn set_sub(&mut self, wt: WireType) {
        self.0 &= 0x0f;
        self.0 |= wt.to_u8().unwrap() << 4;
    }

    /// Unassigned nibble values fall back to `Empty`, which no decode target
    /// accepts.
    pub fn main(&self) -> WireType {
        WireType::from_u8(self.0 & 0x0f).unwrap_or(WireType::Empty)
    }

    pub fn sub(&self) -> WireType {
        WireType::from_u8(self.0 >> 4).unwrap_or(WireType::Empty)
    }
}
