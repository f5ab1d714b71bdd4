//! Sequence and associative containers, plus the lazy iterator range.
//!
//! Within a family, concrete containers decode from each other's bytes: a
//! linked list's stream fills a vector, a hash map's stream fills a B-tree
//! map. Scalar elements additionally widen (see [`WireType::widens_to`]).

use super::{Deser, Ser, Wire};
use crate::pack::DEFAULT_RESERVE;
use crate::rw::{Sink, Source, VecSink};
use crate::wire::{DataHeader, WireType};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use std::mem;

/// Body size of a sequence: scalar elements are a straight multiply, the
/// rest walk.
fn seq_body_len<'a, T: Ser + 'a>(count: usize, elems: impl Iterator<Item = &'a T>) -> usize {
    if T::WIRE_TYPE.is_scalar() {
        count * mem::size_of::<T>()
    } else {
        elems.map(T::encoded_len).sum()
    }
}

macro_rules! seq_wire {
    ($($c:ident :: $push:ident),+ $(,)?) => {$(
        impl<T: Wire> Wire for $c<T> {
            const WIRE_TYPE: WireType = WireType::SeqContainer;
        }

        impl<T: Ser> Ser for $c<T> {
            fn encoded_len(&self) -> usize {
                DataHeader::WIRE_SIZE + seq_body_len(self.len(), self.iter())
            }

            fn ser<W: Sink>(&self, w: &mut W) {
                DataHeader::new(WireType::SeqContainer, T::WIRE_TYPE, self.len() as u32)
                    .write_to(w);
                for v in self {
                    v.ser(w);
                }
            }
        }

        impl<T: Deser> Deser for $c<T> {
            fn deser<R: Source>(r: &mut R) -> Self {
                let mut out = $c::new();
                let header = match DataHeader::read_from(r) {
                    Some(h) => h,
                    None => return out,
                };
                if header.main() != WireType::SeqContainer
                    || !header.is_subtype_compatible::<T>()
                {
                    return out;
                }
                let sub = header.sub();
                for _ in 0..header.length {
                    out.$push(T::deser_elem(r, sub));
                }
                out
            }
        }
    )+};
}

seq_wire! {
    Vec::push,
    VecDeque::push_back,
    LinkedList::push_back,
}

/// Fixed-size arrays encode as sequences. They cannot be a decode target
/// (nothing to push into); decode their bytes into a growable sequence
/// instead.
impl<T: Wire, const N: usize> Wire for [T; N] {
    const WIRE_TYPE: WireType = WireType::SeqContainer;
}

impl<T: Ser, const N: usize> Ser for [T; N] {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE + seq_body_len(N, self.iter())
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::SeqContainer, T::WIRE_TYPE, N as u32).write_to(w);
        for v in self {
            v.ser(w);
        }
    }
}

/// Strings travel as sequences of their UTF-8 bytes. Streams that do not
/// decode to valid UTF-8 yield the empty string.
impl Wire for String {
    const WIRE_TYPE: WireType = WireType::SeqContainer;
}

impl Ser for String {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE + self.len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::SeqContainer, WireType::Byte8, self.len() as u32).write_to(w);
        w.put(self.as_bytes());
    }
}

impl Deser for String {
    fn deser<R: Source>(r: &mut R) -> Self {
        let header = match DataHeader::read_from(r) {
            Some(h) => h,
            None => return String::new(),
        };
        if header.main() != WireType::SeqContainer || !header.is_subtype_compatible::<u8>() {
            return String::new();
        }
        match r.take(header.length as usize) {
            Some(bytes) => String::from_utf8(bytes.to_vec()).unwrap_or_default(),
            None => String::new(),
        }
    }
}

impl Wire for &str {
    const WIRE_TYPE: WireType = WireType::SeqContainer;
}

impl Ser for &str {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE + self.len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::SeqContainer, WireType::Byte8, self.len() as u32).write_to(w);
        w.put(self.as_bytes());
    }
}

impl<K: Wire, V: Wire> Wire for HashMap<K, V> {
    const WIRE_TYPE: WireType = WireType::AsoContainer;
}

impl<K: Ser, V: Ser> Ser for HashMap<K, V> {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE
            + self
                .iter()
                .map(|(k, v)| DataHeader::WIRE_SIZE + k.encoded_len() + v.encoded_len())
                .sum::<usize>()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::AsoContainer, WireType::Pair, self.len() as u32).write_to(w);
        for (k, v) in self {
            DataHeader::new(WireType::Pair, WireType::Empty, 2).write_to(w);
            k.ser(w);
            v.ser(w);
        }
    }
}

impl<K: Deser + Eq + Hash, V: Deser> Deser for HashMap<K, V> {
    fn deser<R: Source>(r: &mut R) -> Self {
        let mut out = HashMap::new();
        let header = match DataHeader::read_from(r) {
            Some(h) => h,
            None => return out,
        };
        if header.main() != WireType::AsoContainer || !header.is_subtype_compatible::<(K, V)>() {
            return out;
        }
        for _ in 0..header.length {
            let (k, v) = <(K, V)>::deser(r);
            out.insert(k, v);
        }
        out
    }
}

impl<K: Wire, V: Wire> Wire for BTreeMap<K, V> {
    const WIRE_TYPE: WireType = WireType::AsoContainer;
}

impl<K: Ser, V: Ser> Ser for BTreeMap<K, V> {
    fn encoded_len(&self) -> usize {
        DataHeader::WIRE_SIZE
            + self
                .iter()
                .map(|(k, v)| DataHeader::WIRE_SIZE + k.encoded_len() + v.encoded_len())
                .sum::<usize>()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        DataHeader::new(WireType::AsoContainer, WireType::Pair, self.len() as u32).write_to(w);
        for (k, v) in self {
            DataHeader::new(WireType::Pair, WireType::Empty, 2).write_to(w);
            k.ser(w);
            v.ser(w);
        }
    }
}

impl<K: Deser + Ord, V: Deser> Deser for BTreeMap<K, V> {
    fn deser<R: Source>(r: &mut R) -> Self {
        let mut out = BTreeMap::new();
        let header = match DataHeader::read_from(r) {
            Some(h) => h,
            None => return out,
        };
        if header.main() != WireType::AsoContainer || !header.is_subtype_compatible::<(K, V)>() {
            return out;
        }
        for _ in 0..header.length {
            let (k, v) = <(K, V)>::deser(r);
            out.insert(k, v);
        }
        out
    }
}

macro_rules! set_wire {
    ($($c:ident : $($bound:path),+);+ $(;)?) => {$(
        impl<T: Wire> Wire for $c<T> {
            const WIRE_TYPE: WireType = WireType::AsoContainer;
        }

        impl<T: Ser> Ser for $c<T> {
            fn encoded_len(&self) -> usize {
                DataHeader::WIRE_SIZE + seq_body_len(self.len(), self.iter())
            }

            fn ser<W: Sink>(&self, w: &mut W) {
                DataHeader::new(WireType::AsoContainer, T::WIRE_TYPE, self.len() as u32)
                    .write_to(w);
                for v in self {
                    v.ser(w);
                }
            }
        }

        impl<T: Deser $(+ $bound)+> Deser for $c<T> {
            fn deser<R: Source>(r: &mut R) -> Self {
                let mut out = $c::new();
                let header = match DataHeader::read_from(r) {
                    Some(h) => h,
                    None => return out,
                };
                if header.main() != WireType::AsoContainer
                    || !header.is_subtype_compatible::<T>()
                {
                    return out;
                }
                let sub = header.sub();
                for _ in 0..header.length {
                    out.insert(T::deser_elem(r, sub));
                }
                out
            }
        }
    )+};
}

set_wire! {
    HashSet: Eq, Hash;
    BTreeSet: Ord;
}

/// Sequence view over an iterator whose length may not be known upfront.
/// Encode-only: when `size_hint` is exact the header goes out first, else the
/// elements are buffered to learn the count, then spliced after the header.
pub struct IterSeq<I>(pub I);

impl<I> Wire for IterSeq<I> {
    const WIRE_TYPE: WireType = WireType::SeqContainer;
}

impl<I, T> Ser for IterSeq<I>
where
    I: Iterator<Item = T> + Clone,
    T: Ser,
{
    fn encoded_len(&self) -> usize {
        let mut len = DataHeader::WIRE_SIZE;
        for v in self.0.clone() {
            len += v.encoded_len();
        }
        len
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        match self.0.size_hint() {
            (lo, Some(hi)) if lo == hi => {
                DataHeader::new(WireType::SeqContainer, T::WIRE_TYPE, lo as u32).write_to(w);
                for v in self.0.clone() {
                    v.ser(w);
                }
            }
            _ => {
                let mut scratch = Vec::with_capacity(DEFAULT_RESERVE);
                let mut count = 0u32;
                let mut sw = VecSink::new(&mut scratch);
                for v in self.0.clone() {
                    v.ser(&mut sw);
                    count += 1;
                }
                DataHeader::new(WireType::SeqContainer, T::WIRE_TYPE, count).write_to(w);
                w.put(&scratch);
            }
        }
    }
}
