mod composite;
mod roundtrip;
