//! Custom-contract types: hand-written `Wire`/`Ser`/`Deser` impls composed
//! with built-in shapes, round-tripped through the envelope.

use bytepack::{
    crc16, deserialize, encoded_len, no_checksum, serialize, try_deserialize, Deser,
    EnvelopeHeader, Ser, Sink, Source, Wire,
};
use std::collections::HashMap;

#[derive(Default, PartialEq, Debug, Clone)]
struct Row {
    value: u16,
    data: Vec<i32>,
}

impl Wire for Row {}

impl Ser for Row {
    fn encoded_len(&self) -> usize {
        self.value.encoded_len() + self.data.encoded_len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        self.value.ser(w);
        self.data.ser(w);
    }
}

impl Deser for Row {
    fn deser<R: Source>(r: &mut R) -> Self {
        let value = u16::deser(r);
        let data = <Vec<i32>>::deser(r);
        Row { value, data }
    }
}

#[derive(Default, PartialEq, Debug)]
struct Inventory {
    name: String,
    rows: HashMap<u32, Row>,
}

impl Wire for Inventory {}

impl Ser for Inventory {
    fn encoded_len(&self) -> usize {
        self.name.encoded_len() + self.rows.encoded_len()
    }

    fn ser<W: Sink>(&self, w: &mut W) {
        self.name.ser(w);
        self.rows.ser(w);
    }
}

impl Deser for Inventory {
    fn deser<R: Source>(r: &mut R) -> Self {
        let name = String::deser(r);
        let rows = <HashMap<u32, Row>>::deser(r);
        Inventory { name, rows }
    }
}

fn sample() -> Inventory {
    let mut rows = HashMap::new();
    for i in 1u32..=5 {
        rows.insert(
            i,
            Row {
                value: i as u16,
                data: vec![i as i32; 3],
            },
        );
    }
    Inventory {
        name: String::from("jacky"),
        rows,
    }
}

#[test]
fn composite_round_trips_through_envelope() {
    let inventory = sample();
    let bytes = serialize(&inventory, crc16);
    assert_eq!(deserialize::<Inventory, _>(&bytes, crc16), inventory);
}

#[test]
fn composite_size_is_the_sum_of_its_parts() {
    let inventory = sample();
    assert_eq!(
        encoded_len(&inventory),
        encoded_len(&inventory.name) + encoded_len(&inventory.rows)
    );

    let bytes = serialize(&inventory, no_checksum);
    assert_eq!(bytes.len(), EnvelopeHeader::WIRE_SIZE + encoded_len(&inventory));
}

#[test]
fn custom_rows_nest_in_containers() {
    let rows = vec![
        Row {
            value: 1,
            data: vec![1, 1, 1],
        },
        Row {
            value: 2,
            data: vec![],
        },
    ];
    let bytes = serialize(&rows, crc16);
    assert_eq!(deserialize::<Vec<Row>, _>(&bytes, crc16), rows);
}

#[test]
fn composite_survives_strict_mode() {
    let inventory = sample();
    let bytes = serialize(&inventory, crc16);
    let back: Inventory = try_deserialize(&bytes, crc16).unwrap();
    assert_eq!(back, inventory);
}

bytepack::variant_wire! {
    #[derive(PartialEq, Debug)]
    enum Content {
        Num(i32) = 0,
        Ch(char) = 1,
        Text(String) = 2,
    }
}

#[test]
fn variant_holding_a_string_keeps_its_index() {
    let content = Content::Text(String::from("serialization"));
    let bytes = serialize(&content, no_checksum);

    let back: Content = deserialize(&bytes, no_checksum);
    assert_eq!(back.index(), 2);
    assert_eq!(back, content);
}

#[test]
fn assorted_shapes_have_exact_sizes() {
    let tuple = (String::from("bob"), 3435i32, 3.1415926f64);
    let variant = Content::Text(String::from("bob"));
    let nested = (
        8i32,
        String::from("bob"),
        vec![
            String::from("jacky"),
            String::from("element"),
            String::from("elementx"),
        ],
        3.14f32,
    );

    for (len, bytes) in [
        (encoded_len(&tuple), serialize(&tuple, no_checksum)),
        (encoded_len(&variant), serialize(&variant, no_checksum)),
        (encoded_len(&nested), serialize(&nested, no_checksum)),
    ] {
        assert_eq!(bytes.len(), EnvelopeHeader::WIRE_SIZE + len);
    }
}
