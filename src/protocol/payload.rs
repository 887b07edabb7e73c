//! Schema-driven payload encoding and decoding
//!
//! Fields are walked in schema order. Multi-byte integers are little-endian,
//! signed kinds two's complement. Reserved slots are consumed on decode and
//! zero-filled on encode, so they round-trip without ever being exposed.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::{Error, FieldKind, FieldSchema, Fields, Result, Value, Violation};

/// Decode a payload according to `schema`
///
/// Byte blocks are zero-copy slices of `payload`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `payload` is not exactly as wide as
/// the schema.
pub fn decode_payload(schema: &FieldSchema, payload: &Bytes) -> Result<Fields> {
    let expected = schema.width();
    if payload.len() != expected {
        return Err(Error::LengthMismatch {
            declared: payload.len(),
            expected,
        });
    }

    let mut fields = Fields::with_capacity(schema.fields().len());
    let mut cursor = payload.clone();

    for field in schema.fields() {
        let value = match field.kind() {
            FieldKind::UInt8 => Value::from(cursor.get_u8()),
            FieldKind::UInt16 => Value::from(cursor.get_u16_le()),
            FieldKind::Int16 => Value::from(cursor.get_i16_le()),
            FieldKind::UInt32 => Value::from(cursor.get_u32_le()),
            FieldKind::Int32 => Value::from(cursor.get_i32_le()),
            FieldKind::FixedBytes(width) => Value::Bytes(cursor.split_to(width)),
            FieldKind::Reserved(width) => {
                cursor.advance(width);
                continue;
            }
        };
        if let Some(name) = field.name() {
            fields.push(name, value);
        }
    }

    debug_assert!(!cursor.has_remaining());
    Ok(fields)
}

/// Encode `fields` according to `schema`, appending to `dst`
///
/// `fields` must name every value field of the schema, in schema order, and
/// nothing else. Reserved slots are written as zero. Byte blocks shorter
/// than their width are zero-padded.
///
/// Nothing is written to `dst` unless the whole payload validates.
pub fn encode_payload(
    schema: &FieldSchema,
    fields: &Fields,
    dst: &mut BytesMut,
) -> std::result::Result<(), Violation> {
    let values = match_schema(schema, fields)?;

    dst.reserve(schema.width());
    for (kind, value) in values {
        match (kind, value) {
            (FieldKind::Reserved(width), _) => dst.put_bytes(0, width),
            (FieldKind::FixedBytes(width), Some(Value::Bytes(block))) => {
                dst.put_slice(block);
                dst.put_bytes(0, width - block.len());
            }
            (kind, Some(Value::Int(value))) => put_int(dst, kind, *value),
            // match_schema pairs every non-reserved slot with a checked value
            (_, _) => unreachable!("unchecked field reached the writer"),
        }
    }

    Ok(())
}

/// Pair every schema slot with the caller's value, checking names, order,
/// types and ranges before anything is written.
fn match_schema<'a>(
    schema: &FieldSchema,
    fields: &'a Fields,
) -> std::result::Result<Vec<(FieldKind, Option<&'a Value>)>, Violation> {
    let supplied = fields.entries();
    let mut next = 0;
    let mut values = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let Some(name) = field.name() else {
            values.push((field.kind(), None));
            continue;
        };

        let value = take_in_order(supplied, &mut next, name)?;
        check_value(name, field.kind(), value)?;
        values.push((field.kind(), Some(value)));
    }

    reject_leftovers(supplied, next)?;
    Ok(values)
}

/// Decode the inline parameters of a short message
///
/// Unnamed slots are reserved and never surfaced.
pub(crate) fn decode_params(params: &[Option<&'static str>; 2], raw: [u8; 2]) -> Fields {
    params
        .iter()
        .zip(raw)
        .filter_map(|(role, byte)| role.map(|name| (name, Value::from(byte))))
        .collect()
}

/// Encode the inline parameters of a short message; unnamed slots are zero
pub(crate) fn encode_params(
    params: &[Option<&'static str>; 2],
    fields: &Fields,
) -> std::result::Result<[u8; 2], Violation> {
    let supplied = fields.entries();
    let mut next = 0;
    let mut raw = [0u8; 2];

    for (slot, role) in raw.iter_mut().zip(params) {
        let Some(name) = *role else {
            continue;
        };
        let value = take_in_order(supplied, &mut next, name)?;
        check_value(name, FieldKind::UInt8, value)?;
        if let Value::Int(byte) = value {
            *slot = u8::try_from(*byte).map_err(|_| Violation::OutOfRange {
                name,
                value: *byte,
                kind: FieldKind::UInt8,
            })?;
        }
    }

    reject_leftovers(supplied, next)?;
    Ok(raw)
}

/// Take the value for `name`, which must be the next supplied entry
fn take_in_order<'a>(
    supplied: &'a [(&'static str, Value)],
    next: &mut usize,
    name: &'static str,
) -> std::result::Result<&'a Value, Violation> {
    match supplied.get(*next) {
        Some((found, value)) if *found == name => {
            *next += 1;
            Ok(value)
        }
        Some((found, _)) if supplied.iter().any(|(other, _)| *other == name) => {
            Err(Violation::OutOfOrder {
                expected: name,
                found: *found,
            })
        }
        _ => Err(Violation::MissingField(name)),
    }
}

fn reject_leftovers(
    supplied: &[(&'static str, Value)],
    next: usize,
) -> std::result::Result<(), Violation> {
    match supplied.get(next) {
        Some((extra, _)) => Err(Violation::UnexpectedField(*extra)),
        None => Ok(()),
    }
}

fn check_value(
    name: &'static str,
    kind: FieldKind,
    value: &Value,
) -> std::result::Result<(), Violation> {
    match (kind, value) {
        (FieldKind::FixedBytes(width), Value::Bytes(block)) => {
            if block.len() > width {
                return Err(Violation::BlockTooLong {
                    name,
                    len: block.len(),
                    width,
                });
            }
        }
        (kind, Value::Int(value)) => {
            let Some((min, max)) = kind.int_range() else {
                return Err(Violation::WrongType { name, kind });
            };
            if !(min..=max).contains(value) {
                return Err(Violation::OutOfRange {
                    name,
                    value: *value,
                    kind,
                });
            }
        }
        (kind, Value::Bytes(_)) => return Err(Violation::WrongType { name, kind }),
    }
    Ok(())
}

// Values are range-checked before this is reached, so the narrowing casts
// are exact.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn put_int(dst: &mut BytesMut, kind: FieldKind, value: i64) {
    match kind {
        FieldKind::UInt8 => dst.put_u8(value as u8),
        FieldKind::UInt16 => dst.put_u16_le(value as u16),
        FieldKind::Int16 => dst.put_i16_le(value as i16),
        FieldKind::UInt32 => dst.put_u32_le(value as u32),
        FieldKind::Int32 => dst.put_i32_le(value as i32),
        FieldKind::FixedBytes(_) | FieldKind::Reserved(_) => {
            unreachable!("integer written to a {kind} slot")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Field;

    static POSITION: [Field; 2] = [Field::u16("chan_ident"), Field::i32("position")];
    static DC_STATUS: [Field; 5] = [
        Field::u16("chan_ident"),
        Field::i32("position"),
        Field::i16("velocity"),
        Field::reserved(2),
        Field::u32("status_bits"),
    ];
    static AXIS: [Field; 3] = [
        Field::u16("chan_ident"),
        Field::bytes("part_no_axis", 8),
        Field::reserved(4),
    ];

    fn encode(schema: &FieldSchema, fields: &Fields) -> std::result::Result<Vec<u8>, Violation> {
        let mut dst = BytesMut::new();
        encode_payload(schema, fields, &mut dst)?;
        Ok(dst.to_vec())
    }

    #[test]
    fn test_negative_position_twos_complement() {
        let schema = FieldSchema::new(&POSITION);
        let fields = Fields::new()
            .with("chan_ident", 1u16)
            .with("position", -1000i32);

        let bytes = encode(&schema, &fields).unwrap();
        assert_eq!(bytes, [0x01, 0x00, 0x18, 0xFC, 0xFF, 0xFF]);

        let decoded = decode_payload(&schema, &Bytes::from(bytes)).unwrap();
        assert_eq!(decoded.int("position"), Some(-1000));
    }

    #[test]
    fn test_reserved_zeroed_and_hidden() {
        let schema = FieldSchema::new(&DC_STATUS);
        let fields = Fields::new()
            .with("chan_ident", 1u16)
            .with("position", 200i32)
            .with("velocity", -5i16)
            .with("status_bits", 0x8000_0400u32);

        let bytes = encode(&schema, &fields).unwrap();
        assert_eq!(bytes.len(), 14);
        assert_eq!(&bytes[8..10], &[0, 0]);

        let mut wire = bytes.clone();
        wire[8] = 0xAA;
        wire[9] = 0x55;
        let decoded = decode_payload(&schema, &Bytes::from(wire)).unwrap();
        assert_eq!(decoded, fields);
    }

    #[test]
    fn test_byte_block_padding() {
        let schema = FieldSchema::new(&AXIS);
        let fields = Fields::new()
            .with("chan_ident", 1u16)
            .with("part_no_axis", &b"DRV"[..]);

        let bytes = encode(&schema, &fields).unwrap();
        assert_eq!(&bytes[2..10], b"DRV\0\0\0\0\0");

        let decoded = decode_payload(&schema, &Bytes::from(bytes)).unwrap();
        assert_eq!(
            decoded.bytes("part_no_axis").map(|block| &block[..]),
            Some(&b"DRV\0\0\0\0\0"[..])
        );
    }

    #[test]
    fn test_length_mismatch() {
        let schema = FieldSchema::new(&POSITION);
        let result = decode_payload(&schema, &Bytes::from_static(&[0x01, 0x00, 0x18]));

        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                declared: 3,
                expected: 6
            })
        ));
    }

    #[test]
    fn test_field_order_enforced() {
        let schema = FieldSchema::new(&POSITION);
        let fields = Fields::new()
            .with("position", 5i32)
            .with("chan_ident", 1u16);

        assert_eq!(
            encode(&schema, &fields),
            Err(Violation::OutOfOrder {
                expected: "chan_ident",
                found: "position"
            })
        );
    }

    #[test]
    fn test_missing_and_unexpected_fields() {
        let schema = FieldSchema::new(&POSITION);

        let missing = Fields::new().with("chan_ident", 1u16);
        assert_eq!(
            encode(&schema, &missing),
            Err(Violation::MissingField("position"))
        );

        let extra = Fields::new()
            .with("chan_ident", 1u16)
            .with("position", 0i32)
            .with("velocity", 3u16);
        assert_eq!(
            encode(&schema, &extra),
            Err(Violation::UnexpectedField("velocity"))
        );
    }

    #[test]
    fn test_value_checks() {
        let schema = FieldSchema::new(&POSITION);

        let too_big = Fields::new()
            .with("chan_ident", 70_000i64)
            .with("position", 0i32);
        assert!(matches!(
            encode(&schema, &too_big),
            Err(Violation::OutOfRange {
                name: "chan_ident",
                value: 70_000,
                ..
            })
        ));

        let wrong_type = Fields::new()
            .with("chan_ident", 1u16)
            .with("position", vec![1u8, 2, 3, 4]);
        assert!(matches!(
            encode(&schema, &wrong_type),
            Err(Violation::WrongType {
                name: "position",
                ..
            })
        ));

        let axis = FieldSchema::new(&AXIS);
        let long_block = Fields::new()
            .with("chan_ident", 1u16)
            .with("part_no_axis", vec![b'x'; 9]);
        assert!(matches!(
            encode(&axis, &long_block),
            Err(Violation::BlockTooLong { len: 9, width: 8, .. })
        ));
    }

    #[test]
    fn test_short_params() {
        let params = [Some("chan_ident"), Some("direction")];
        let fields = Fields::new()
            .with("chan_ident", 1u8)
            .with("direction", 2u8);

        let raw = encode_params(&params, &fields).unwrap();
        assert_eq!(raw, [0x01, 0x02]);
        assert_eq!(decode_params(&params, raw), fields);
    }

    #[test]
    fn test_short_reserved_slot() {
        let params = [Some("chan_ident"), None];
        let decoded = decode_params(&params, [0x01, 0x7F]);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.int("chan_ident"), Some(1));
        assert_eq!(encode_params(&params, &decoded), Ok([0x01, 0x00]));
        assert_eq!(
            encode_params(&params, &Fields::new().with("chan_ident", 256u16)),
            Err(Violation::OutOfRange {
                name: "chan_ident",
                value: 256,
                kind: FieldKind::UInt8
            })
        );
    }

    #[test]
    fn test_failed_encode_writes_nothing() {
        let schema = FieldSchema::new(&POSITION);
        let mut dst = BytesMut::from(&b"keep"[..]);

        let result = encode_payload(&schema, &Fields::new(), &mut dst);
        assert!(result.is_err());
        assert_eq!(&dst[..], b"keep");
    }
}
