use vkcap_protocol::wire::WireError;
use vkcap_protocol::SerialiseError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("unknown chunk type {0:#x}")]
    UnknownChunk(u32),

    #[error("{chunk}: {trailing} trailing bytes after payload")]
    TrailingBytes { chunk: &'static str, trailing: usize },

    #[error("capture stream aborted by an earlier error")]
    CaptureAborted,

    #[error("serialise error: {0}")]
    Serialise(#[from] SerialiseError),

    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
