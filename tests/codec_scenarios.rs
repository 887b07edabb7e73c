use aptwire::protocol::catalog::DESCRIPTORS;
use aptwire::protocol::{Layout, frame_len, metrics};
use aptwire::{
    Address, Codec, Error, Field, FieldSchema, Message, MessageDescriptor, MessageShape, Registry,
    Violation,
};
use bytes::BytesMut;
use proptest::prelude::*;

#[test]
fn short_request_matches_wire_bytes() {
    let request = Message::new(0x0411, 0x50, 0x01).with("chan_ident", 1u8);
    let bytes = Codec::default().encode(&request).unwrap();

    assert_eq!(bytes, [0x11, 0x04, 0x01, 0x00, 0x50, 0x01]);
    assert_eq!(frame_len(&bytes).unwrap(), 6);
}

#[test]
fn long_report_decodes_signed_position() {
    let bytes = [
        0x12, 0x04, 0x06, 0x00, 0x81, 0x50, 0x01, 0x00, 0x18, 0xFC, 0xFF, 0xFF,
    ];
    let message = Codec::default().decode(&bytes).unwrap();

    assert_eq!(message.id(), 0x0412);
    assert_eq!(message.shape(), Some(MessageShape::Long));
    assert_eq!(message.dest(), Address::HOST);
    assert_eq!(message.source(), Address::GENERIC_USB);
    assert_eq!(message.int("chan_ident"), Some(1));
    assert_eq!(message.int("position"), Some(-1000));
}

#[test]
fn reserved_bytes_are_hidden_and_zeroed() {
    // MOT_MOVE_COMPLETED with garbage in the reserved word
    let mut bytes = vec![0x64, 0x04, 0x0E, 0x00, 0x81, 0x50];
    bytes.extend_from_slice(&[0x01, 0x00]);
    bytes.extend_from_slice(&20_000i32.to_le_bytes());
    bytes.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    bytes.extend_from_slice(&0x8000_0400u32.to_le_bytes());

    let codec = Codec::default();
    let message = codec.decode(&bytes).unwrap();
    let names: Vec<_> = message.fields().names().collect();
    assert_eq!(names, ["chan_ident", "position", "status_bits"]);

    let reencoded = codec.encode(&message).unwrap();
    assert_eq!(&reencoded[..12], &bytes[..12]);
    assert_eq!(&reencoded[12..16], &[0, 0, 0, 0]);
    assert_eq!(&reencoded[16..], &bytes[16..]);
}

#[test]
fn text_blocks_are_padded_and_bounded() {
    let codec = Codec::default();
    let request = Message::new(0x0081, Address::HOST, Address::GENERIC_USB)
        .with("msg_ident", 0x0443u16)
        .with("code", 2u16)
        .with("notes", &b"limit switch"[..]);

    let bytes = codec.encode(&request).unwrap();
    assert_eq!(bytes.len(), 6 + 68);
    let notes = codec.decode(&bytes).unwrap().fields().bytes("notes").cloned();
    let notes = notes.unwrap();
    assert_eq!(notes.len(), 64);
    assert!(notes.starts_with(b"limit switch"));
    assert!(notes[12..].iter().all(|&b| b == 0));

    let too_long = request.with("notes", vec![b'x'; 65]);
    assert!(matches!(
        codec.encode(&too_long),
        Err(Error::SchemaViolation {
            id: 0x0081,
            violation: Violation::BlockTooLong {
                name: "notes",
                len: 65,
                width: 64
            }
        })
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let request = Message::new(0x0410, Address::GENERIC_USB, Address::HOST)
        .with("chan_ident", 0x1_0000i64)
        .with("position", 0i32);

    let err = Codec::default().encode(&request).unwrap_err();
    assert!(matches!(
        err,
        Error::SchemaViolation {
            violation: Violation::OutOfRange {
                name: "chan_ident",
                value: 0x1_0000,
                ..
            },
            ..
        }
    ));
}

#[test]
fn stream_buffer_skips_unknown_messages() {
    let codec = Codec::default();
    let mut wire = BytesMut::new();

    codec
        .encode_into(
            &Message::new(0x0443, Address::HOST, Address::GENERIC_USB).with("chan_ident", 1u8),
            &mut wire,
        )
        .unwrap();
    // unregistered long message with a 3-byte payload
    wire.extend_from_slice(&[0x34, 0x12, 0x03, 0x00, 0x81, 0x50, 0xAA, 0xBB, 0xCC]);
    codec
        .encode_into(
            &Message::new(0x0453, Address::HOST, Address::GENERIC_USB)
                .with_shape(MessageShape::Long)
                .with("chan_ident", 1u16)
                .with("absolute_distance", 4_000i32),
            &mut wire,
        )
        .unwrap();

    let first = codec.decode_from(&mut wire).unwrap();
    assert_eq!(first.id(), 0x0443);

    let err = codec.decode_from(&mut wire).unwrap_err();
    assert!(err.is_recoverable());
    let Error::UnknownMessageId { id, frame } = err else {
        panic!("expected unknown id");
    };
    assert_eq!(id, 0x1234);
    assert_eq!(&frame[6..], &[0xAA, 0xBB, 0xCC]);

    let third = codec.decode_from(&mut wire).unwrap();
    assert_eq!(third.int("absolute_distance"), Some(4_000));
    assert!(wire.is_empty());
}

#[test]
fn slice_decoding_advances_by_consumed() {
    let codec = Codec::default();
    let mut wire = vec![0xEF, 0xBE, 0x00, 0x00, 0x50, 0x01];
    wire.extend(codec.encode(&Message::new(0x0005, 0x50, 0x01)).unwrap());

    let err = codec.decode(&wire).unwrap_err();
    let skip = err.consumed().unwrap();
    assert_eq!(skip, 6);

    let next = codec.decode(&wire[skip..]).unwrap();
    assert_eq!(next.id(), 0x0005);
    assert!(next.fields().is_empty());
}

#[test]
fn truncated_input_reports_incomplete() {
    let codec = Codec::default();
    let bytes = codec
        .encode(
            &Message::new(0x0410, 0x50, 0x01)
                .with("chan_ident", 1u16)
                .with("position", 7i32),
        )
        .unwrap();

    for cut in 0..bytes.len() {
        let err = codec.decode(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, Error::Incomplete { got, .. } if got == cut),
            "cut at {cut}: {err}"
        );
        assert_eq!(err.consumed(), None);
    }
}

#[test]
fn custom_registry_drives_codec() {
    static PING: [Field; 2] = [Field::u16("sequence"), Field::reserved(2)];
    let registry = Registry::new([
        MessageDescriptor::short(0x7001, "PING_REQ", [Some("channel"), None]),
        MessageDescriptor::long(0x7002, "PING_ACK", FieldSchema::new(&PING)),
    ])
    .unwrap();
    let codec = Codec::new(&registry);

    let ack = Message::new(0x7002, 0x50, 0x01).with("sequence", 9u16);
    let bytes = codec.encode(&ack).unwrap();
    assert_eq!(bytes, [0x02, 0x70, 0x04, 0x00, 0xD0, 0x01, 0x09, 0x00, 0x00, 0x00]);
    assert_eq!(codec.decode(&bytes).unwrap().int("sequence"), Some(9));

    // the built-in catalog is not consulted
    assert!(matches!(
        codec.encode(&Message::new(0x0443, 0x50, 0x01).with("chan_ident", 1u8)),
        Err(Error::SchemaViolation {
            violation: Violation::UnknownId,
            ..
        })
    ));
}

#[test]
fn duplicate_descriptors_are_rejected() {
    let result = Registry::new([
        MessageDescriptor::short(0x7001, "A", [None, None]),
        MessageDescriptor::short(0x7001, "B", [None, None]),
    ]);

    assert!(matches!(
        result,
        Err(Error::DuplicateDescriptor {
            id: 0x7001,
            shape: MessageShape::Short
        })
    ));
}

#[test]
fn metrics_track_decoded_messages() {
    let before = metrics::snapshot();
    let codec = Codec::default();
    let bytes = codec
        .encode(&Message::new(0x0443, 0x50, 0x01).with("chan_ident", 1u8))
        .unwrap();
    codec.decode(&bytes).unwrap();
    let _ = codec.decode(&[0xEF, 0xBE, 0x00, 0x00, 0x50, 0x01]);

    let after = metrics::snapshot();
    assert!(after.encoded_messages > before.encoded_messages);
    assert!(after.decoded_messages > before.decoded_messages);
    assert!(after.unknown_ids > before.unknown_ids);
    assert!(after.skipped_messages() > before.skipped_messages());
}

#[test]
fn shared_codec_decodes_across_threads() {
    let codec = Codec::default();
    let frames: Vec<Vec<u8>> = (0..8)
        .map(|position| {
            let report = Message::new(0x0412, Address::HOST, Address::GENERIC_USB)
                .with("chan_ident", 1u16)
                .with("position", position * -100);
            codec.encode(&report).unwrap()
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = frames
            .iter()
            .zip(0i64..)
            .map(|(frame, index)| {
                scope.spawn(move || {
                    for _ in 0..100 {
                        let message = codec.decode(frame).unwrap();
                        assert_eq!(message.int("position"), Some(index * -100));
                        assert_eq!(codec.encode(&message).unwrap(), *frame);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

/// Expected re-encoding of `frame`: reserved and unused bytes zeroed.
fn canonical(desc: &MessageDescriptor, frame: &[u8]) -> Vec<u8> {
    let mut out = frame.to_vec();
    match desc.layout() {
        Layout::Short { params } => {
            for (slot, role) in params.iter().enumerate() {
                if role.is_none() {
                    out[2 + slot] = 0;
                }
            }
        }
        Layout::Long { fields } => {
            let mut offset = 6;
            for field in fields.fields() {
                if field.kind().is_reserved() {
                    out[offset..offset + field.width()].fill(0);
                }
                offset += field.width();
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn every_catalog_message_survives_a_roundtrip(
        index in 0..DESCRIPTORS.len(),
        dest in 0u8..0x80,
        source in any::<u8>(),
        noise in proptest::collection::vec(any::<u8>(), 256),
    ) {
        let desc = &DESCRIPTORS[index];
        let id = desc.id().to_le_bytes();
        let mut frame = vec![id[0], id[1], noise[0], noise[1], dest, source];
        if let Some(schema) = desc.fields() {
            let len = u16::try_from(schema.width()).unwrap().to_le_bytes();
            frame[2] = len[0];
            frame[3] = len[1];
            frame[4] |= 0x80;
            frame.extend_from_slice(&noise[..schema.width()]);
        }

        let codec = Codec::default();
        let message = codec.decode(&frame).unwrap();
        prop_assert_eq!(message.id(), desc.id());
        prop_assert_eq!(message.shape(), Some(desc.shape()));
        prop_assert_eq!(message.dest(), dest);

        let reencoded = codec.encode(&message).unwrap();
        prop_assert_eq!(reencoded, canonical(desc, &frame));
    }
}
