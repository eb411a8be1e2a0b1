//! Cross-crate tests: the in-place primitives and the host-side codec must
//! agree on the wire format, byte for byte.

use bytes::BytesMut;
use wirebuf::cursor::ByteCursor;
use wirebuf::frame::{decode_frame, encode_frame, FrameView, MessageFrame, HEADER_SIZE};
use wirebuf::ring::RingQueue;

#[test]
fn device_builds_host_decodes() {
    let mut storage = [0u8; 32];
    let mut frame = MessageFrame::new(&mut storage);

    frame.begin(0x42).unwrap();
    frame.write_byte(0x11).unwrap();
    frame.write_byte(0x22).unwrap();
    frame.finalize();

    let mut wire = BytesMut::from(frame.as_bytes());
    let view = decode_frame(&mut wire).expect("complete frame");

    assert_eq!(view.frame_type, 0x42);
    assert_eq!(view.payload.as_ref(), [0x11, 0x22]);
    assert!(wire.is_empty());
}

#[test]
fn host_encodes_device_parses() {
    let mut wire = BytesMut::new();
    encode_frame(0x0A, b"telemetry", &mut wire).unwrap();

    // A transport would receive these bytes into device-owned storage.
    let mut storage = [0u8; 64];
    storage[..wire.len()].copy_from_slice(&wire);

    let mut frame = MessageFrame::new(&mut storage);
    frame.begin_read(wire.len()).unwrap();

    assert_eq!(frame.frame_type(), 0x0A);
    assert_eq!(frame.payload_len() as usize, b"telemetry".len());

    let mut received = Vec::new();
    while let Ok(b) = frame.read_byte() {
        received.push(b);
    }
    assert_eq!(received, b"telemetry");
}

#[test]
fn scalar_payload_survives_the_full_path() {
    // Sender: encode scalars with a cursor, frame the result.
    let mut payload_storage = [0u8; 16];
    let mut payload = ByteCursor::new(&mut payload_storage);
    payload.write_u16_be(0x0102).unwrap();
    payload.write_u32_le(0xCAFE_F00D).unwrap();

    let mut tx_storage = [0u8; 32];
    let mut tx = MessageFrame::new(&mut tx_storage);
    tx.begin(0x51).unwrap();
    tx.write_bytes(payload.as_written()).unwrap();
    tx.finalize();
    let wire: Vec<u8> = tx.as_bytes().to_vec();

    // Receiver: parse the frame, replay the payload through a cursor.
    let mut rx_storage = [0u8; 32];
    rx_storage[..wire.len()].copy_from_slice(&wire);
    let mut rx = MessageFrame::new(&mut rx_storage);
    rx.begin_read(wire.len()).unwrap();
    assert_eq!(rx.frame_type(), 0x51);

    let mut decode_storage = [0u8; 16];
    let mut decoder = ByteCursor::new(&mut decode_storage);
    while let Ok(b) = rx.read_byte() {
        decoder.write_u8(b).unwrap();
    }

    assert_eq!(decoder.read_u16_be().unwrap(), 0x0102);
    assert_eq!(decoder.read_u32_le().unwrap(), 0xCAFE_F00D);
    assert_eq!(decoder.read_remaining(), 0);
}

#[test]
fn received_frames_queue_in_order() {
    let mut wire = BytesMut::new();
    encode_frame(1, b"one", &mut wire).unwrap();
    encode_frame(2, b"two", &mut wire).unwrap();
    encode_frame(3, b"three", &mut wire).unwrap();

    let mut pending: RingQueue<FrameView, 4> = RingQueue::new();
    while let Some(view) = decode_frame(&mut wire) {
        pending.push(view).unwrap();
    }
    assert_eq!(pending.len(), 3);

    let f1 = pending.pop().unwrap();
    let f2 = pending.pop().unwrap();
    let f3 = pending.pop().unwrap();
    assert_eq!((f1.frame_type, f1.payload.as_ref()), (1, b"one".as_ref()));
    assert_eq!((f2.frame_type, f2.payload.as_ref()), (2, b"two".as_ref()));
    assert_eq!(
        (f3.frame_type, f3.payload.as_ref()),
        (3, b"three".as_ref())
    );
    assert!(pending.is_empty());
}

#[test]
fn clamped_frame_decodes_to_declared_length() {
    let mut storage = [0u8; 512];
    let mut frame = MessageFrame::new(&mut storage);

    frame.begin(0x7E).unwrap();
    for i in 0..300u32 {
        frame.write_byte(i as u8).unwrap();
    }
    frame.finalize();
    assert_eq!(frame.wire_size(), HEADER_SIZE + 300);

    // A receiver trusting the header sees exactly 255 payload bytes; the
    // 45 unreported bytes remain as trailing data.
    let mut wire = BytesMut::from(frame.as_bytes());
    let view = decode_frame(&mut wire).expect("complete frame");
    assert_eq!(view.frame_type, 0x7E);
    assert_eq!(view.payload.len(), 255);
    assert_eq!(wire.len(), 45);
}
