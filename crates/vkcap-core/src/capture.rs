use std::io::{self, Read, Write};

use tracing::{debug, error, info};
use vkcap_protocol::wire::{self, ChunkFlags, FILE_HEADER_SIZE, HEADER_SIZE};
use vkcap_protocol::{Serialiser, StreamContext, StructuredObject};

use crate::chunk::{CaptureChunk, ChunkType};
use crate::config::CaptureConfig;
use crate::error::CoreError;

/// Writes a capture file: the file header, then one frame per chunk.
pub struct CaptureWriter<W: Write> {
    out: W,
    ctx: StreamContext,
    compression_threshold: Option<usize>,
    chunks_written: u64,
    failed: bool,
}

impl<W: Write> CaptureWriter<W> {
    pub fn new(mut out: W, ctx: StreamContext, config: &CaptureConfig) -> Result<Self, CoreError> {
        out.write_all(&wire::encode_file_header())?;
        info!("capture opened (compression: {:?})", config.threshold());
        Ok(Self {
            out,
            ctx,
            compression_threshold: config.threshold(),
            chunks_written: 0,
            failed: false,
        })
    }

    /// Serialise and append one chunk.
    ///
    /// A chunk that fails to serialise is dropped without touching the
    /// output. An I/O failure leaves a partial frame behind, so every later
    /// call fails with [`CoreError::CaptureAborted`].
    pub fn write_chunk(&mut self, chunk: impl Into<CaptureChunk>) -> Result<(), CoreError> {
        if self.failed {
            return Err(CoreError::CaptureAborted);
        }
        let mut chunk = chunk.into();
        let chunk_type = chunk.chunk_type();

        let mut ser = Serialiser::writer(self.ctx.clone());
        chunk.serialise_into(&mut ser)?;
        let payload = ser.into_bytes();
        let frame = wire::encode_chunk(chunk_type.code(), &payload, self.compression_threshold)?;

        if let Err(e) = self.out.write_all(&frame) {
            self.failed = true;
            error!("capture write failed in {}: {}", chunk_type.name(), e);
            return Err(e.into());
        }
        self.chunks_written += 1;
        debug!(
            "wrote {} ({} bytes, {} stored)",
            chunk_type.name(),
            payload.len(),
            frame.len() - HEADER_SIZE
        );
        Ok(())
    }

    pub fn chunks_written(&self) -> u64 {
        self.chunks_written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W, CoreError> {
        if self.failed {
            return Err(CoreError::CaptureAborted);
        }
        self.out.flush()?;
        info!("capture finished: {} chunks", self.chunks_written);
        Ok(self.out)
    }
}

/// One chunk decoded for display, with its framing details.
#[derive(Debug, Clone)]
pub struct InspectedChunk {
    pub chunk_type: ChunkType,
    /// Bytes the payload occupies in the file.
    pub stored_size: usize,
    /// Bytes of the serialised payload after decompression.
    pub payload_size: usize,
    pub compressed: bool,
    pub tree: Vec<StructuredObject>,
}

struct RawChunk {
    chunk_type: ChunkType,
    flags: ChunkFlags,
    stored_size: usize,
    payload: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    Open,
    Finished,
    Failed,
}

/// Reads a capture file chunk by chunk.
///
/// Any error is fatal for the whole capture: the reader stays failed and
/// every later call returns [`CoreError::CaptureAborted`].
pub struct CaptureReader<R: Read> {
    input: R,
    ctx: StreamContext,
    version: u32,
    chunks_read: u64,
    state: ReaderState,
}

impl<R: Read> CaptureReader<R> {
    pub fn open(mut input: R, ctx: StreamContext) -> Result<Self, CoreError> {
        let mut header = [0u8; FILE_HEADER_SIZE];
        input.read_exact(&mut header)?;
        let version = wire::decode_file_header(&header)?;
        info!("capture opened (version {})", version);
        Ok(Self {
            input,
            ctx,
            version,
            chunks_read: 0,
            state: ReaderState::Open,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn chunks_read(&self) -> u64 {
        self.chunks_read
    }

    /// Decode the next chunk, resolving handles through the context's
    /// tracker. `None` at a clean end of file.
    pub fn next_chunk(&mut self) -> Result<Option<CaptureChunk>, CoreError> {
        self.step(|reader| {
            let Some(raw) = reader.next_raw()? else {
                return Ok(None);
            };
            let mut ser = Serialiser::reader(raw.payload, reader.ctx.clone());
            let chunk = CaptureChunk::read_from(raw.chunk_type, &mut ser)?;
            check_consumed(raw.chunk_type, &ser)?;
            Ok(Some(chunk))
        })
    }

    /// Decode the next chunk into a structured tree without resolving
    /// handles. `None` at a clean end of file.
    pub fn inspect_next(&mut self) -> Result<Option<InspectedChunk>, CoreError> {
        self.step(|reader| {
            let Some(raw) = reader.next_raw()? else {
                return Ok(None);
            };
            let payload_size = raw.payload.len();
            let mut ser = Serialiser::inspector(raw.payload, reader.ctx.clone());
            CaptureChunk::read_from(raw.chunk_type, &mut ser)?;
            check_consumed(raw.chunk_type, &ser)?;
            Ok(Some(InspectedChunk {
                chunk_type: raw.chunk_type,
                stored_size: raw.stored_size,
                payload_size,
                compressed: raw.flags.contains(ChunkFlags::COMPRESSED),
                tree: ser.take_structured(),
            }))
        })
    }

    fn step<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<Option<T>, CoreError>,
    ) -> Result<Option<T>, CoreError> {
        match self.state {
            ReaderState::Failed => return Err(CoreError::CaptureAborted),
            ReaderState::Finished => return Ok(None),
            ReaderState::Open => {}
        }
        match f(self) {
            Ok(Some(item)) => {
                self.chunks_read += 1;
                Ok(Some(item))
            }
            Ok(None) => {
                self.state = ReaderState::Finished;
                info!("capture finished: {} chunks", self.chunks_read);
                Ok(None)
            }
            Err(e) => {
                self.state = ReaderState::Failed;
                error!("cannot load capture at chunk {}: {}", self.chunks_read, e);
                Err(e)
            }
        }
    }

    fn next_raw(&mut self) -> Result<Option<RawChunk>, CoreError> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };
        let (flags, code, length) = wire::decode_header(&header)?;
        let chunk_type = ChunkType::from_code(code).ok_or(CoreError::UnknownChunk(code))?;

        let length = length as usize;
        let mut stored = Vec::new();
        (&mut self.input).take(length as u64).read_to_end(&mut stored)?;
        if stored.len() != length {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated chunk payload").into());
        }

        let payload = wire::decode_payload(stored, flags)?;
        debug!("read {} ({} bytes, {} stored)", chunk_type.name(), payload.len(), length);
        Ok(Some(RawChunk {
            chunk_type,
            flags,
            stored_size: length,
            payload,
        }))
    }

    /// A frame header, or `None` at a clean end of file.
    fn read_header(&mut self) -> Result<Option<[u8; HEADER_SIZE]>, CoreError> {
        let mut header = [0u8; HEADER_SIZE];
        let mut filled = 0;
        while filled < HEADER_SIZE {
            match self.input.read(&mut header[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(
                        io::Error::new(io::ErrorKind::UnexpectedEof, "truncated chunk header").into(),
                    )
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(header))
    }
}

fn check_consumed(chunk_type: ChunkType, ser: &Serialiser) -> Result<(), CoreError> {
    match ser.remaining() {
        0 => Ok(()),
        trailing => Err(CoreError::TrailingBytes {
            chunk: chunk_type.name(),
            trailing,
        }),
    }
}
