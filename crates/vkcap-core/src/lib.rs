pub mod capture;
pub mod chunk;
pub mod config;
pub mod error;
pub mod resource_manager;

pub use capture::{CaptureReader, CaptureWriter, InspectedChunk};
pub use chunk::{CaptureChunk, ChunkType};
pub use config::VkcapConfig;
pub use error::CoreError;
pub use resource_manager::{LiveResource, ResourceManager};
