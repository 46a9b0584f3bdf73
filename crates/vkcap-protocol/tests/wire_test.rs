//! Integration test: capture file and chunk framing
//!
//! Run with: cargo test --test wire_test -- --nocapture

use vkcap_protocol::wire::*;

#[test]
fn test_file_header() {
    let header = encode_file_header();
    assert_eq!(&header[..8], b"VKCAPTUR");
    assert_eq!(decode_file_header(&header).expect("valid header"), FILE_VERSION);

    let mut bad = header;
    bad[0] = b'X';
    match decode_file_header(&bad) {
        Err(WireError::InvalidMagic) => {}
        other => panic!("expected InvalidMagic, got {:?}", other),
    }

    let mut future = header;
    future[8..].copy_from_slice(&7u32.to_le_bytes());
    match decode_file_header(&future) {
        Err(WireError::UnsupportedVersion(7)) => {}
        other => panic!("expected UnsupportedVersion, got {:?}", other),
    }
}

#[test]
fn test_small_chunk_is_stored_uncompressed() {
    let payload = b"hello".to_vec();
    let frame = encode_chunk(0x42, &payload, Some(COMPRESSION_THRESHOLD)).expect("encode");
    assert_eq!(frame.len(), HEADER_SIZE + payload.len());

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&frame[..HEADER_SIZE]);
    let (flags, chunk_type, length) = decode_header(&header).expect("decode header");
    assert!(flags.is_empty());
    assert_eq!(chunk_type, 0x42);
    assert_eq!(length as usize, payload.len());

    let body = decode_payload(frame[HEADER_SIZE..].to_vec(), flags).expect("decode payload");
    assert_eq!(body, payload);
}

#[test]
fn test_large_chunk_is_compressed() {
    let payload = vec![0xABu8; 64 * 1024];
    let frame = encode_chunk(7, &payload, Some(COMPRESSION_THRESHOLD)).expect("encode");
    println!("{} bytes framed as {}", payload.len(), frame.len());
    assert!(frame.len() < payload.len());

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&frame[..HEADER_SIZE]);
    let (flags, _, length) = decode_header(&header).expect("decode header");
    assert!(flags.contains(ChunkFlags::COMPRESSED));
    assert_eq!(length as usize, frame.len() - HEADER_SIZE);

    let body = decode_payload(frame[HEADER_SIZE..].to_vec(), flags).expect("decode payload");
    assert_eq!(body, payload);
}

#[test]
fn test_compression_disabled() {
    let payload = vec![0u8; 8192];
    let frame = encode_chunk(7, &payload, None).expect("encode");
    assert_eq!(frame[2], 0, "flags byte must be clear");
    assert_eq!(frame.len(), HEADER_SIZE + payload.len());
}

#[test]
fn test_bad_chunk_headers() {
    let mut header = [0u8; HEADER_SIZE];
    match decode_header(&header) {
        Err(WireError::InvalidMagic) => {}
        other => panic!("expected InvalidMagic, got {:?}", other),
    }

    header[..2].copy_from_slice(&MAGIC);
    header[7..].copy_from_slice(&(MAX_CHUNK_SIZE + 1).to_le_bytes());
    match decode_header(&header) {
        Err(WireError::ChunkTooLarge(len)) => assert_eq!(len, u64::from(MAX_CHUNK_SIZE) + 1),
        other => panic!("expected ChunkTooLarge, got {:?}", other),
    }
}

#[test]
fn test_corrupt_compressed_payload() {
    match decode_payload(vec![16, 0, 0, 0, 0xff, 1, 2], ChunkFlags::COMPRESSED) {
        Err(WireError::DecompressionError(_)) => {}
        other => panic!("expected DecompressionError, got {:?}", other),
    }
}

#[test]
fn test_oversized_decompressed_size_is_rejected() {
    let mut payload = (MAX_CHUNK_SIZE + 1).to_le_bytes().to_vec();
    payload.extend_from_slice(&[0x10, 0x41]);
    match decode_payload(payload, ChunkFlags::COMPRESSED) {
        Err(WireError::ChunkTooLarge(len)) => assert_eq!(len, u64::from(MAX_CHUNK_SIZE) + 1),
        other => panic!("expected ChunkTooLarge, got {:?}", other),
    }

    match decode_payload(vec![1, 0], ChunkFlags::COMPRESSED) {
        Err(WireError::DecompressionError(_)) => {}
        other => panic!("expected DecompressionError, got {:?}", other),
    }
}
