pub mod chain;
pub mod enums;
pub mod error;
pub mod flags;
pub mod handle;
pub mod serialiser;
pub mod stringify;
pub mod strings;
pub mod structured;
pub mod types;
pub mod vulkan_serialise;
pub mod vulkan_structs;
pub mod wire;

pub use chain::{Extensible, NextStruct};
pub use error::{ResolveError, SerialiseError};
pub use handle::{ResourceHandle, ResourceId, ResourceTracker, ResourceType};
pub use serialiser::{
    Blob, ExtensionPolicy, Mode, Serialise, Serialiser, StreamContext, StreamLimits,
};
pub use strings::{Interned, StringTable};
pub use structured::{StructuredObject, StructuredValue};
