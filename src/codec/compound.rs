//! Pairs and tuples. The 2-tuple is the pair shape (it is what associative
//! containers iterate); larger arities are the tuple shape.

use super::{Deser, Ser, Wire};
use crate::rw::{Sink, Source};
use crate::wire::{DataHeader, WireType};

impl<A: Wire, B: Wire> Wire for (A, B) {
    const WIRE_TYPE: WireType = WireType::Pair;
}

impl<A: Ser, B: Ser> Ser for (A, B) {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE + self.0.encoded_len() + self.1.encoded_len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::Pair, WireType::Empty, 2).write_to(w);
        self.0.ser(w);
        self.1.ser(w);
    }
}

impl<A: Deser, B: Deser> Deser for (A, B) {
    fn deser<R: Source>(r: &mut R) -> Self {
        let header = match DataHeader::read_from(r) {
            Some(h) => h,
            None => return Self::default(),
        };
        if header.main() != WireType::Pair || header.length != 2 {
            return Self::default();
        }
        let first = A::deser(r);
        let second = B::deser(r);
        (first, second)
    }
}

impl Wire for () {
    const WIRE_TYPE: WireType = WireType::Tuple;
}

impl Ser for () {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::Tuple, WireType::Empty, 0).write_to(w);
    }
}

impl Deser for () {
    fn deser<R: Source>(r: &mut R) -> Self {
        let _ = DataHeader::read_from(r);
    }
}

macro_rules! tuple_wire {
    ($arity:expr; $($t:ident : $idx:tt),+) => {
        impl<$($t: Wire),+> Wire for ($($t,)+) {
            const WIRE_TYPE: WireType = WireType::Tuple;
        }

        impl<$($t: Ser),+> Ser for ($($t,)+) {
            fn encoded_len(&self) -> usize {
                DataHeader::WIRE_SIZE $(+ self.$idx.encoded_len())+
            }

            fn ser<W: Sink>(&self, w: &mut W) {
                DataHeader::new(WireType::Tuple, WireType::Empty, $arity).write_to(w);
                $(self.$idx.ser(w);)+
            }
        }

        impl<$($t: Deser),+> Deser for ($($t,)+) {
            fn deser<R: Source>(r: &mut R) -> Self {
                let header = match DataHeader::read_from(r) {
                    Some(h) => h,
                    None => return Self::default(),
                };
                if header.length != $arity {
                    return Self::default();
                }
                ($($t::deser(&mut *r),)+)
            }
        }
    };
}

tuple_wire!(1; A:0);
tuple_wire!(3; A:0, B:1, C:2);
tuple_wire!(4; A:0, B:1, C:2, D:3);
tuple_wire!(5; A:0, B:1, C:2, D:3, E:4);
tuple_wire!(6; A:0, B:1, C:2, D:3, E:4, F:5);
tuple_wire!(7; A:0, B:1, C:2, D:3, E:4, F:5, G:6);
tuple_wire!(8; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);
tuple_wire!(9; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8);
tuple_wire!(10; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9);
tuple_wire!(11; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10);
tuple_wire!(12; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11);
