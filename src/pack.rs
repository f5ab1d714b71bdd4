//! Envelope framing: version + checksum + length around an encoded payload.
//!
//! The checksum is any `Fn(&[u8]) -> u32`; [`crate::crc8`], [`crate::crc16`],
//! [`crate::crc32`] and [`crate::no_checksum`] are the provided defaults.

use crate::codec::{Deser, Ser};
use crate::rw::{ByteSource, SliceSink, Sink, Source, VecSink};
use crate::wire::{EnvelopeHeader, VERSION};
use anyhow::{bail, ensure, Result};

/// Scratch preallocation for envelope encoding and lazy-range buffering.
pub const DEFAULT_RESERVE: usize = 4096;

/// Encodes `value` and prefixes the envelope.
pub fn serialize<T, C>(value: &T, checksum: C) -> Vec<u8>
where
    T: Ser,
    C: Fn(&[u8]) -> u32,
{
    let mut payload = Vec::with_capacity(DEFAULT_RESERVE);
    let mut w = VecSink::new(&mut payload);
    value.ser(&mut w);

    let header = EnvelopeHeader::new(checksum(&payload), payload.len() as u32);

    let mut out = Vec::with_capacity(EnvelopeHeader::WIRE_SIZE + payload.len());
    let mut w = VecSink::new(&mut out);
    header.write_to(&mut w);
    w.put(&payload);
    out
}

/// Bounded-sink variant: encodes through the caller's buffer instead of a
/// growable scratch. Overflow is a silent no-op, so what fits in `buf` is
/// what ships.
pub fn serialize_into<T, C>(buf: &mut [u8], value: &T, checksum: C) -> Vec<u8>
where
    T: Ser,
    C: Fn(&[u8]) -> u32,
{
    let mut w = SliceSink::new(&mut *buf);
    value.ser(&mut w);
    let length = w.count();

    let header = EnvelopeHeader::new(checksum(&buf[..length]), length as u32);

    let mut out = Vec::with_capacity(EnvelopeHeader::WIRE_SIZE + length);
    let mut ow = VecSink::new(&mut out);
    header.write_to(&mut ow);
    ow.put(&buf[..length]);
    out
}

/// Verifies the envelope and decodes a `T` from the payload. Returns
/// `T::default()` on a truncated envelope, version mismatch, short payload,
/// or checksum mismatch.
pub fn deserialize<T, C>(bytes: &[u8], checksum: C) -> T
where
    T: Deser,
    C: Fn(&[u8]) -> u32,
{
    let mut r = ByteSource::new(bytes);
    let header = match EnvelopeHeader::read_from(&mut r) {
        Some(h) => h,
        None => return T::default(),
    };
    if header.version != VERSION {
        return T::default();
    }
    let start = EnvelopeHeader::WIRE_SIZE;
    let end = start.checked_add(header.length as usize);
    let payload = match end.and_then(|end| bytes.get(start..end)) {
        Some(p) => p,
        None => return T::default(),
    };
    if checksum(payload) != header.crc {
        return T::default();
    }
    T::deser(&mut r)
}

/// Strict-mode variant of [`deserialize`]: reports what went wrong instead of
/// defaulting, and additionally requires the decode to consume exactly the
/// payload the envelope declared.
pub fn try_deserialize<T, C>(bytes: &[u8], checksum: C) -> Result<T>
where
    T: Deser,
    C: Fn(&[u8]) -> u32,
{
    let mut r = ByteSource::new(bytes);
    let header = match EnvelopeHeader::read_from(&mut r) {
        Some(h) => h,
        None => bail!("input shorter than the envelope header"),
    };
    ensure!(
        header.version == VERSION,
        "version mismatch: got {:#06x}, expected {:#06x}",
        header.version,
        VERSION
    );
    let start = EnvelopeHeader::WIRE_SIZE;
    let end = start.checked_add(header.length as usize);
    let Some(payload) = end.and_then(|end| bytes.get(start..end)) else {
        bail!(
            "envelope declares {} payload bytes, input holds {}",
            header.length,
            bytes.len() - start
        );
    };
    let crc = checksum(payload);
    ensure!(
        crc == header.crc,
        "checksum mismatch: computed {:#010x}, stored {:#010x}",
        crc,
        header.crc
    );
    let value = T::deser(&mut r);
    let consumed = r.count() - start;
    ensure!(
        consumed == header.length as usize,
        "decode consumed {} of {} payload bytes",
        consumed,
        header.length
    );
    Ok(value)
}
