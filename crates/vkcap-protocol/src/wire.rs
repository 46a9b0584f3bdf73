use std::borrow::Cow;

/// Capture file magic: "VKCAPTUR"
pub const FILE_MAGIC: [u8; 8] = *b"VKCAPTUR";

/// Current capture file format version.
pub const FILE_VERSION: u32 = 1;

/// File header size in bytes: magic(8) + version(4) = 12
pub const FILE_HEADER_SIZE: usize = 12;

/// Chunk frame magic bytes: "VC"
pub const MAGIC: [u8; 2] = [0x56, 0x43];

/// Maximum chunk payload size: 256 MB
pub const MAX_CHUNK_SIZE: u32 = 256 * 1024 * 1024;

/// Chunk header size in bytes: magic(2) + flags(1) + chunk_type(4) + length(4) = 11
pub const HEADER_SIZE: usize = 11;

/// Default minimum payload size to attempt LZ4 compression (bytes).
pub const COMPRESSION_THRESHOLD: usize = 512;

bitflags::bitflags! {
    /// Chunk flags byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChunkFlags: u8 {
        const COMPRESSED = 0b0000_0001;
    }
}

pub fn encode_file_header() -> [u8; FILE_HEADER_SIZE] {
    let mut header = [0u8; FILE_HEADER_SIZE];
    header[..8].copy_from_slice(&FILE_MAGIC);
    header[8..].copy_from_slice(&FILE_VERSION.to_le_bytes());
    header
}

/// Validate a file header. Returns the format version.
pub fn decode_file_header(header: &[u8; FILE_HEADER_SIZE]) -> Result<u32, WireError> {
    if header[..8] != FILE_MAGIC {
        return Err(WireError::InvalidMagic);
    }
    let version = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);
    if version != FILE_VERSION {
        return Err(WireError::UnsupportedVersion(version));
    }
    Ok(version)
}

/// Frame a serialised chunk payload (header + payload).
///
/// With a threshold, payloads above it are LZ4-compressed when that makes
/// them smaller. `None` always stores the payload as-is.
pub fn encode_chunk(
    chunk_type: u32,
    payload: &[u8],
    compression_threshold: Option<usize>,
) -> Result<Vec<u8>, WireError> {
    let (final_payload, flags) = match compression_threshold {
        Some(threshold) if payload.len() > threshold => {
            let compressed = lz4_flex::compress_prepend_size(payload);
            if compressed.len() < payload.len() {
                (Cow::Owned(compressed), ChunkFlags::COMPRESSED)
            } else {
                (Cow::Borrowed(payload), ChunkFlags::empty())
            }
        }
        _ => (Cow::Borrowed(payload), ChunkFlags::empty()),
    };

    let payload_len = u32::try_from(final_payload.len())
        .ok()
        .filter(|len| *len <= MAX_CHUNK_SIZE)
        .ok_or(WireError::ChunkTooLarge(final_payload.len() as u64))?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + final_payload.len());
    frame.extend_from_slice(&MAGIC);
    frame.push(flags.bits());
    frame.extend_from_slice(&chunk_type.to_le_bytes());
    frame.extend_from_slice(&payload_len.to_le_bytes());
    frame.extend_from_slice(&final_payload);

    Ok(frame)
}

/// Decode a chunk header. Returns (flags, chunk_type, payload_length).
pub fn decode_header(header: &[u8; HEADER_SIZE]) -> Result<(ChunkFlags, u32, u32), WireError> {
    if header[0] != MAGIC[0] || header[1] != MAGIC[1] {
        return Err(WireError::InvalidMagic);
    }

    let flags = ChunkFlags::from_bits_truncate(header[2]);
    let chunk_type = u32::from_le_bytes([header[3], header[4], header[5], header[6]]);
    let length = u32::from_le_bytes([header[7], header[8], header[9], header[10]]);

    if length > MAX_CHUNK_SIZE {
        return Err(WireError::ChunkTooLarge(u64::from(length)));
    }

    Ok((flags, chunk_type, length))
}

/// Recover the serialised payload, decompressing if the COMPRESSED flag is set.
pub fn decode_payload(payload: Vec<u8>, flags: ChunkFlags) -> Result<Vec<u8>, WireError> {
    if !flags.contains(ChunkFlags::COMPRESSED) {
        return Ok(payload);
    }
    let (prefix, compressed) = payload
        .split_first_chunk::<4>()
        .ok_or_else(|| WireError::DecompressionError("missing size prefix".to_string()))?;
    let size = u32::from_le_bytes(*prefix);
    if size > MAX_CHUNK_SIZE {
        return Err(WireError::ChunkTooLarge(u64::from(size)));
    }
    lz4_flex::decompress(compressed, size as usize)
        .map_err(|e| WireError::DecompressionError(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid magic bytes")]
    InvalidMagic,
    #[error("unsupported capture version {0}")]
    UnsupportedVersion(u32),
    #[error("chunk too large: {0} bytes")]
    ChunkTooLarge(u64),
    #[error("decompression error: {0}")]
    DecompressionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
