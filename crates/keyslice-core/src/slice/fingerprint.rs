#![expect(clippy::cast_possible_truncation)]

use crate::{
    slice::{BoundingMode, Direction, KeyTuple, SliceQuery},
    value::Value,
};
use sha2::{Digest, Sha256};
use std::fmt;

///
/// SliceFingerprint
///
/// Stable digest of a slice query's shape and literal values, used to
/// correlate trace events for one query.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SliceFingerprint([u8; 32]);

impl SliceFingerprint {
    #[must_use]
    pub fn of(query: &SliceQuery) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"slicefp:v1");
        write_tag(&mut hasher, order_tag(query.order()));
        write_tag(&mut hasher, bounding_tag(query.bounding()));
        write_u32(&mut hasher, query.partition_len() as u32);
        write_u32(&mut hasher, query.limit());
        write_tuple(&mut hasher, query.start());
        write_tuple(&mut hasher, query.end());

        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Self(out)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            use std::fmt::Write as _;
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for SliceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

fn write_tuple(hasher: &mut Sha256, tuple: &KeyTuple) {
    write_str(hasher, tuple.owner());
    write_u32(hasher, tuple.arity() as u32);
    for component in tuple {
        match component {
            Some(value) => {
                write_tag(hasher, 0x01);
                write_value(hasher, value);
            }
            None => write_tag(hasher, 0x00),
        }
    }
}

fn write_value(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Blob(bytes) => {
            write_tag(hasher, 0x10);
            write_u32(hasher, bytes.len() as u32);
            hasher.update(bytes);
        }
        Value::Bool(b) => {
            write_tag(hasher, 0x11);
            write_tag(hasher, u8::from(*b));
        }
        Value::Enum(e) => {
            write_tag(hasher, 0x12);
            write_str(hasher, &e.variant);
            match &e.path {
                Some(path) => {
                    write_tag(hasher, 0x01);
                    write_str(hasher, path);
                }
                None => write_tag(hasher, 0x00),
            }
        }
        Value::Float32(f) => {
            write_tag(hasher, 0x13);
            hasher.update(f.to_be_bytes());
        }
        Value::Float64(f) => {
            write_tag(hasher, 0x14);
            hasher.update(f.to_be_bytes());
        }
        Value::Int(i) => {
            write_tag(hasher, 0x15);
            hasher.update(i.to_be_bytes());
        }
        Value::List(items) => {
            write_tag(hasher, 0x16);
            write_u32(hasher, items.len() as u32);
            for item in items {
                write_value(hasher, item);
            }
        }
        Value::Text(s) => {
            write_tag(hasher, 0x17);
            write_str(hasher, s);
        }
        Value::Uint(u) => {
            write_tag(hasher, 0x18);
            hasher.update(u.to_be_bytes());
        }
        Value::Ulid(u) => {
            write_tag(hasher, 0x19);
            hasher.update(u.0.to_be_bytes());
        }
    }
}

fn write_str(hasher: &mut Sha256, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u32(hasher: &mut Sha256, value: u32) {
    hasher.update(value.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

const fn order_tag(order: Direction) -> u8 {
    match order {
        Direction::Asc => 0x01,
        Direction::Desc => 0x02,
    }
}

const fn bounding_tag(bounding: BoundingMode) -> u8 {
    match bounding {
        BoundingMode::InclusiveBounds => 0x01,
        BoundingMode::ExclusiveBounds => 0x02,
        BoundingMode::InclusiveStartOnly => 0x03,
        BoundingMode::InclusiveEndOnly => 0x04,
    }
}
