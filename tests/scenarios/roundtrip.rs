//! Envelope-level behavior: framing, rejection, truncation, bounded sinks.

use bytepack::{
    crc32, deserialize, no_checksum, serialize, serialize_into, try_deserialize, EnvelopeHeader,
    IterSeq, VERSION,
};
use std::collections::{HashMap, VecDeque};

#[test]
fn map_round_trips_through_envelope() {
    let mut map = HashMap::new();
    map.insert(String::from("jacky"), 68u32);
    map.insert(String::from("element"), 97);
    map.insert(String::from("bob"), 45);

    let bytes = serialize(&map, no_checksum);
    assert_eq!(deserialize::<HashMap<String, u32>, _>(&bytes, no_checksum), map);
}

#[test]
fn envelope_layout() {
    let bytes = serialize(&0xDEADBEEFu32, crc32);
    assert_eq!(bytes.len(), EnvelopeHeader::WIRE_SIZE + 4);
    assert_eq!(&bytes[0..2], &VERSION.to_ne_bytes());
    assert_eq!(&bytes[2..6], &crc32(&bytes[10..]).to_ne_bytes());
    assert_eq!(&bytes[6..10], &4u32.to_ne_bytes());
    assert_eq!(&bytes[10..], &0xDEADBEEFu32.to_ne_bytes());
}

#[test]
fn any_single_byte_flip_is_rejected_under_crc32() {
    let value = vec![1u32, 2, 3, 4];
    let mut bytes = serialize(&value, crc32);
    assert_eq!(deserialize::<Vec<u32>, _>(&bytes, crc32), value);

    for i in 0..bytes.len() {
        bytes[i] ^= 0x01;
        assert_eq!(
            deserialize::<Vec<u32>, _>(&bytes, crc32),
            Vec::new(),
            "flip at byte {i} slipped through"
        );
        bytes[i] ^= 0x01;
    }
}

#[test]
fn wrong_version_is_rejected() {
    let mut bytes = serialize(&7u64, no_checksum);
    bytes[0] ^= 0xFF;
    assert_eq!(deserialize::<u64, _>(&bytes, no_checksum), 0);

    let mut bytes = serialize(&7u64, no_checksum);
    bytes[0..2].copy_from_slice(&(VERSION + 1).to_ne_bytes());
    assert_eq!(deserialize::<u64, _>(&bytes, no_checksum), 0);
}

#[test]
fn every_truncation_yields_the_default() {
    let value = vec![String::from("asdf"), String::from("zxcv")];
    let bytes = serialize(&value, crc32);

    for k in 0..bytes.len() {
        assert_eq!(
            deserialize::<Vec<String>, _>(&bytes[..k], crc32),
            Vec::<String>::new(),
            "prefix of {k} bytes decoded to something"
        );
    }
    assert_eq!(deserialize::<Vec<String>, _>(&bytes, crc32), value);
}

#[test]
fn bounded_serialize_matches_growable() {
    let value = (String::from("192.168.10.1"), 3768u32);
    let mut buf = [0u8; 256];
    assert_eq!(
        serialize_into(&mut buf, &value, crc32),
        serialize(&value, crc32)
    );
}

#[test]
fn bounded_serialize_overflow_is_silent_and_detectable() {
    // 8 bytes hold the container header but no element, so the elements are
    // dropped and the truncated payload no longer matches its own header.
    let mut buf = [0u8; 8];
    let bytes = serialize_into(&mut buf, &vec![1u32, 2, 3], no_checksum);
    assert_eq!(bytes.len(), EnvelopeHeader::WIRE_SIZE + 5);
    assert_eq!(
        deserialize::<Vec<u32>, _>(&bytes, no_checksum),
        vec![0, 0, 0]
    );
}

#[test]
fn strict_mode_accepts_clean_input() {
    let value = vec![(String::from("a"), 1u32), (String::from("b"), 2u32)];
    let bytes = serialize(&value, crc32);
    let back: Vec<(String, u32)> = try_deserialize(&bytes, crc32).unwrap();
    assert_eq!(back, value);
}

#[test]
fn strict_mode_reports_what_went_wrong() {
    let bytes = serialize(&42u32, crc32);

    let err = try_deserialize::<u32, _>(&bytes[..4], crc32).unwrap_err();
    assert!(err.to_string().contains("shorter than the envelope"));

    let mut corrupt = bytes.clone();
    corrupt[0] ^= 0xFF;
    let err = try_deserialize::<u32, _>(&corrupt, crc32).unwrap_err();
    assert!(err.to_string().contains("version mismatch"));

    let mut corrupt = bytes.clone();
    let last = corrupt.len() - 1;
    corrupt[last] ^= 0x01;
    let err = try_deserialize::<u32, _>(&corrupt, crc32).unwrap_err();
    assert!(err.to_string().contains("checksum mismatch"));
}

#[test]
fn strict_mode_requires_exact_consumption() {
    let mut bytes = serialize(&42u32, no_checksum);
    bytes[6..10].copy_from_slice(&6u32.to_ne_bytes());
    bytes.extend_from_slice(&[0xAA, 0xBB]);

    let err = try_deserialize::<u32, _>(&bytes, no_checksum).unwrap_err();
    assert!(err.to_string().contains("decode consumed"));
}

#[test]
fn lazy_range_decodes_into_a_deque() {
    let bytes = serialize(&IterSeq((1i32..100).filter(|v| *v <= 4)), no_checksum);
    assert_eq!(
        deserialize::<VecDeque<i32>, _>(&bytes, no_checksum),
        VecDeque::from([1, 2, 3, 4])
    );
}

#[test]
fn array_decodes_into_a_vector() {
    let bytes = serialize(&[1i32, 2, 3, 4, 5], no_checksum);
    assert_eq!(
        deserialize::<Vec<i32>, _>(&bytes, no_checksum),
        vec![1, 2, 3, 4, 5]
    );
}
